use std::path::PathBuf;

/// Errors raised while loading or querying a device profile.
///
/// All of these are fatal at startup; nothing here is recoverable by the
/// analyzer itself.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed reading profile {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The profile file is not valid JSON or misses required fields.
    #[error("malformed profile: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A process-data layout exceeds the 32-octet protocol maximum.
    #[error("process data layout '{direction}' is {bits} bits (max 256)")]
    LayoutTooLong { direction: &'static str, bits: u16 },

    /// A layout field reaches past the end of its layout.
    #[error("field '{field}' extends past the end of its layout")]
    FieldOutOfBounds { field: String },

    /// No process-data variant matches the requested condition value.
    #[error("no process data variant for condition {condition:?} (available: {available:?})")]
    UnknownCondition {
        condition: Option<i64>,
        available: Vec<Option<i64>>,
    },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
