use std::collections::HashMap;

use crate::profile::VariableDef;
use crate::standard::standard_variable_name;

/// Index→name lookup for ISDU parameters: device-specific names layered
/// over the built-in standard table, device-specific winning on collision.
///
/// Read-only display metadata; never consulted for decoding decisions.
#[derive(Debug, Clone, Default)]
pub struct VariableNames {
    device: HashMap<u16, String>,
}

impl VariableNames {
    /// Build the lookup from a profile's device-specific definitions.
    pub fn new(definitions: &[VariableDef]) -> Self {
        let device = definitions
            .iter()
            .map(|def| (def.index, def.name.clone()))
            .collect();
        Self { device }
    }

    /// Resolve an index to its display name, device-specific first.
    pub fn resolve(&self, index: u16) -> Option<&str> {
        self.device
            .get(&index)
            .map(String::as_str)
            .or_else(|| standard_variable_name(index))
    }

    /// Number of device-specific entries.
    pub fn device_specific_len(&self) -> usize {
        self.device.len()
    }

    /// Iterate device-specific entries (unordered).
    pub fn device_specific(&self) -> impl Iterator<Item = (u16, &str)> {
        self.device.iter().map(|(idx, name)| (*idx, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(index: u16, name: &str) -> VariableDef {
        VariableDef {
            index,
            name: name.to_string(),
        }
    }

    #[test]
    fn standard_names_resolve_without_device_entries() {
        let names = VariableNames::default();
        assert_eq!(names.resolve(0x0012), Some("Product Name"));
        assert_eq!(names.resolve(0x4000), None);
    }

    #[test]
    fn device_specific_entries_resolve() {
        let names = VariableNames::new(&[def(0x0040, "Switchpoint 1")]);
        assert_eq!(names.resolve(0x0040), Some("Switchpoint 1"));
    }

    #[test]
    fn device_specific_wins_on_collision() {
        let names = VariableNames::new(&[def(0x0012, "Sensor Family X")]);
        assert_eq!(names.resolve(0x0012), Some("Sensor Family X"));
        // Non-colliding standard entries still resolve.
        assert_eq!(names.resolve(0x0010), Some("Vendor Name"));
    }
}
