//! Built-in names for the standardized ISDU parameter indices.

/// Standard parameter indices and their display names, sorted by index.
const STANDARD_VARIABLES: &[(u16, &str)] = &[
    (0x0002, "System Command"),
    (0x000c, "Device Access Locks"),
    (0x000d, "Profile Characteristic"),
    (0x0010, "Vendor Name"),
    (0x0011, "Vendor Text"),
    (0x0012, "Product Name"),
    (0x0013, "Product ID"),
    (0x0014, "Product Text"),
    (0x0015, "Serial Number"),
    (0x0016, "Hardware Revision"),
    (0x0017, "Firmware Revision"),
    (0x0018, "Application Specific Tag"),
    (0x0019, "Function Tag"),
    (0x001a, "Location Tag"),
    (0x0020, "Error Count"),
    (0x0024, "Device Status"),
    (0x0025, "Detailed Device Status"),
    (0x0028, "Process Data Input"),
    (0x0029, "Process Data Output"),
];

/// Name of a standardized parameter index, if it has one.
pub fn standard_variable_name(index: u16) -> Option<&'static str> {
    STANDARD_VARIABLES
        .binary_search_by_key(&index, |(idx, _)| *idx)
        .ok()
        .map(|pos| STANDARD_VARIABLES[pos].1)
}

/// All standard entries, for listing purposes.
pub fn standard_variables() -> &'static [(u16, &'static str)] {
    STANDARD_VARIABLES
}
