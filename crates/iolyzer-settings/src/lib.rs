//! Per-lifecycle-stage framing settings and their traffic-driven adaptation.
//!
//! The external octet-stream decoder needs to know how many on-request-data
//! and process-data octets each frame carries, and those counts differ
//! between the Startup, Preoperate and Operate stages. The initial values
//! come from the device description; afterwards the [`AutoSettingsAdapter`]
//! keeps them consistent with what the device actually announced on the
//! wire, by watching direct-parameter reads of the M-sequence capability and
//! the process-data lengths.

pub mod adapter;
pub mod error;
pub mod mseq;
pub mod settings;
pub mod store;

pub use adapter::AutoSettingsAdapter;
pub use error::SettingsError;
pub use mseq::{MSequenceCapability, ProcessDataLength};
pub use settings::{DecoderSettings, OperateSettings, StageSettings};
pub use store::{SettingsStore, SharedSettings};
