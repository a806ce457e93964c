use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::datatype::ProcessVariableDataType;
use crate::error::{ProfileError, Result};

/// Largest process-data layout in bits (32 octets).
const MAX_LAYOUT_BITS: u16 = 256;

/// Descriptive header of the source device description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// One named bit field inside a process-data layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdField {
    pub name: String,
    pub bit_offset: u16,
    pub bit_length: u16,
    pub datatype: ProcessVariableDataType,
}

/// Bit layout of one process-data direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdLayout {
    /// Total layout size in bits; zero means no data in this direction.
    pub bit_length: u16,
    #[serde(default)]
    pub fields: Vec<PdField>,
}

impl PdLayout {
    /// Layout size in whole octets, rounding up.
    pub fn octet_count(&self) -> u8 {
        self.bit_length.div_ceil(8) as u8
    }
}

/// One process-data definition variant, selected by condition value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDataVariant {
    /// Condition value this variant applies to; `None` for the
    /// unconditional definition.
    #[serde(default)]
    pub condition: Option<i64>,
    #[serde(default)]
    pub input: PdLayout,
    #[serde(default)]
    pub output: PdLayout,
}

/// One device-specific variable name definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDef {
    pub index: u16,
    pub name: String,
}

/// Everything the analyzer needs from a device description, distilled to
/// JSON by external IODD tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    #[serde(default)]
    pub document: DocumentInfo,
    /// The device's M-sequence capability octet (direct parameter 0x03).
    pub msequence_capability: u8,
    /// Process-data definition variants; at least one expected.
    #[serde(default)]
    pub process_data: Vec<ProcessDataVariant>,
    /// Device-specific ISDU variable names.
    #[serde(default)]
    pub variables: Vec<VariableDef>,
}

impl DeviceProfile {
    /// Load and validate a profile from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a profile from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let profile: DeviceProfile = serde_json::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        for variant in &self.process_data {
            validate_layout("input", &variant.input)?;
            validate_layout("output", &variant.output)?;
        }
        Ok(())
    }

    /// Select the process-data variant for a condition value.
    ///
    /// `None` selects the unconditional variant; a profile with a single
    /// variant accepts `None` regardless of its declared condition. An
    /// unmatched selector is a startup error.
    pub fn select_process_data(&self, condition: Option<i64>) -> Result<&ProcessDataVariant> {
        if condition.is_none() && self.process_data.len() == 1 {
            return Ok(&self.process_data[0]);
        }

        self.process_data
            .iter()
            .find(|variant| variant.condition == condition)
            .ok_or_else(|| ProfileError::UnknownCondition {
                condition,
                available: self.process_data.iter().map(|v| v.condition).collect(),
            })
    }

    /// Condition values declared by this profile.
    pub fn condition_values(&self) -> Vec<Option<i64>> {
        self.process_data.iter().map(|v| v.condition).collect()
    }
}

fn validate_layout(direction: &'static str, layout: &PdLayout) -> Result<()> {
    if layout.bit_length > MAX_LAYOUT_BITS {
        return Err(ProfileError::LayoutTooLong {
            direction,
            bits: layout.bit_length,
        });
    }
    for field in &layout.fields {
        let end = field.bit_offset.saturating_add(field.bit_length);
        if end > layout.bit_length {
            return Err(ProfileError::FieldOutOfBounds {
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}
