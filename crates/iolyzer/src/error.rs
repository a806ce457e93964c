use iolyzer_dispatch::ModeParseError;
use iolyzer_profile::ProfileError;
use iolyzer_settings::SettingsError;

/// Errors raised while assembling an analyzer session.
///
/// Everything here is fatal at startup. Once a session runs, decode problems
/// never surface as errors; they reset transient state and leave a gap in
/// the output timeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("invalid settings seed: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Mode(#[from] ModeParseError),
}
