use std::fmt;

use serde::{Deserialize, Serialize};

/// Data type of one process variable, per the IO-Link common profile
/// coding of PVinD/PVoutD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessVariableDataType {
    OctetString,
    SetOfBool,
    UInteger,
    Integer,
    Float32,
    String,
    Time,
    TimeSpan,
}

impl ProcessVariableDataType {
    /// Table code of this type.
    pub fn code(self) -> u8 {
        match self {
            ProcessVariableDataType::OctetString => 0,
            ProcessVariableDataType::SetOfBool => 1,
            ProcessVariableDataType::UInteger => 2,
            ProcessVariableDataType::Integer => 3,
            ProcessVariableDataType::Float32 => 4,
            ProcessVariableDataType::String => 5,
            ProcessVariableDataType::Time => 6,
            ProcessVariableDataType::TimeSpan => 7,
        }
    }

    /// Reverse lookup from the table code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ProcessVariableDataType::OctetString),
            1 => Some(ProcessVariableDataType::SetOfBool),
            2 => Some(ProcessVariableDataType::UInteger),
            3 => Some(ProcessVariableDataType::Integer),
            4 => Some(ProcessVariableDataType::Float32),
            5 => Some(ProcessVariableDataType::String),
            6 => Some(ProcessVariableDataType::Time),
            7 => Some(ProcessVariableDataType::TimeSpan),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessVariableDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessVariableDataType::OctetString => "OctetString",
            ProcessVariableDataType::SetOfBool => "SetOfBool",
            ProcessVariableDataType::UInteger => "UInteger",
            ProcessVariableDataType::Integer => "Integer",
            ProcessVariableDataType::Float32 => "Float32",
            ProcessVariableDataType::String => "String",
            ProcessVariableDataType::Time => "Time",
            ProcessVariableDataType::TimeSpan => "TimeSpan",
        };
        f.write_str(name)
    }
}
