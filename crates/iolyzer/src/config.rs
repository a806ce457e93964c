use std::path::PathBuf;

use iolyzer_dispatch::AnalyzerMode;
use iolyzer_profile::DeviceProfile;

use crate::error::AnalyzerError;

/// The host-facing configuration surface of an analysis session.
///
/// Three recognized options: the device-description profile to load, the
/// analyzer mode selecting the dispatch profile, and an optional integer
/// condition picking among the profile's process-data variants. All
/// validation is fail-fast: a bad path, mode string or condition surfaces
/// before any octet is processed.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Path of the device profile JSON distilled from an IODD.
    pub profile: PathBuf,
    /// Active analysis mode.
    pub mode: AnalyzerMode,
    /// Process-data variant selector, if the profile declares several.
    pub condition: Option<i64>,
}

impl AnalyzerConfig {
    pub fn new(profile: impl Into<PathBuf>, mode: AnalyzerMode) -> Self {
        Self {
            profile: profile.into(),
            mode,
            condition: None,
        }
    }

    /// Select a process-data variant condition.
    pub fn with_condition(mut self, condition: Option<i64>) -> Self {
        self.condition = condition;
        self
    }

    /// Load and validate the referenced device profile.
    pub fn load_profile(&self) -> Result<DeviceProfile, AnalyzerError> {
        Ok(DeviceProfile::from_path(&self.profile)?)
    }
}
