//! Direct Parameter Page 1 addresses.
//!
//! Addresses 0x00-0x0f form the standardized page 1 table; 0x10-0x1f are
//! device-specific page 2 parameters.

/// Master command register.
pub const MASTER_COMMAND: u8 = 0x00;

/// Cycle time selected by the master.
pub const MASTER_CYCLE_TIME: u8 = 0x01;

/// Minimum cycle time supported by the device.
pub const MIN_CYCLE_TIME: u8 = 0x02;

/// M-sequence capability (preoperate/operate type codes, ISDU support).
pub const MSEQUENCE_CAPABILITY: u8 = 0x03;

/// IO-Link protocol revision.
pub const REVISION_ID: u8 = 0x04;

/// Process data input length encoding.
pub const PROCESS_DATA_IN: u8 = 0x05;

/// Process data output length encoding.
pub const PROCESS_DATA_OUT: u8 = 0x06;

/// Vendor ID, high and low octet.
pub const VENDOR_ID_1: u8 = 0x07;
pub const VENDOR_ID_2: u8 = 0x08;

/// Device ID, three octets.
pub const DEVICE_ID_1: u8 = 0x09;
pub const DEVICE_ID_2: u8 = 0x0a;
pub const DEVICE_ID_3: u8 = 0x0b;

/// Function ID, two octets.
pub const FUNCTION_ID_1: u8 = 0x0c;
pub const FUNCTION_ID_2: u8 = 0x0d;

/// System command register.
pub const SYSTEM_COMMAND: u8 = 0x0f;

/// First device-specific (page 2) address.
pub const PAGE2_START: u8 = 0x10;

/// Returns a human-readable name for a direct-parameter address.
pub fn parameter_name(address: u8) -> &'static str {
    match address {
        MASTER_COMMAND => "MasterCommand",
        MASTER_CYCLE_TIME => "MasterCycleTime",
        MIN_CYCLE_TIME => "MinCycleTime",
        MSEQUENCE_CAPABILITY => "MSequenceCapability",
        REVISION_ID => "RevisionID",
        PROCESS_DATA_IN => "ProcessDataIn",
        PROCESS_DATA_OUT => "ProcessDataOut",
        VENDOR_ID_1 => "VendorID1",
        VENDOR_ID_2 => "VendorID2",
        DEVICE_ID_1 => "DeviceID1",
        DEVICE_ID_2 => "DeviceID2",
        DEVICE_ID_3 => "DeviceID3",
        FUNCTION_ID_1 => "FunctionID1",
        FUNCTION_ID_2 => "FunctionID2",
        0x0e => "Reserved",
        SYSTEM_COMMAND => "SystemCommand",
        PAGE2_START..=0x1f => "DeviceSpecific",
        _ => "OutOfRange",
    }
}

/// Returns true for addresses in the device-specific page 2 range.
pub fn is_device_specific(address: u8) -> bool {
    (PAGE2_START..=0x1f).contains(&address)
}
