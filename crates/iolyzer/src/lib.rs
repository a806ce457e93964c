//! Transaction analysis for IO-Link octet streams.
//!
//! iolyzer classifies decoded master/device transmissions into semantic
//! protocol transactions and continuously re-derives the framing settings
//! the decoder needs from the traffic itself.
//!
//! # Crate Structure
//!
//! - [`model`] — Messages, transactions, records, dispatch traits
//! - [`settings`] — Per-stage framing settings and the automatic adapter
//! - [`profile`] — IODD-derived device profiles and variable names
//! - [`dispatch`] — Analyzer modes and the mode-selected dispatch registry
//!
//! The [`Analyzer`] session ties these together around two external
//! collaborators: an [`OctetDecoder`] producing messages and a
//! [`MessageInterpreter`] assembling transactions.

/// Re-export model types.
pub mod model {
    pub use iolyzer_model::*;
}

/// Re-export settings types.
pub mod settings {
    pub use iolyzer_settings::*;
}

/// Re-export profile types.
pub mod profile {
    pub use iolyzer_profile::*;
}

/// Re-export dispatch types.
pub mod dispatch {
    pub use iolyzer_dispatch::*;
}

mod config;
mod error;
mod session;

pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use session::{seed_settings, Analyzer, FramingError, MessageInterpreter, OctetDecoder};
