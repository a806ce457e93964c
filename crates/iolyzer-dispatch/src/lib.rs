//! Mode-selected dispatch of classified traffic to output records.
//!
//! Double dispatch: the *shape* of a [`iolyzer_model::Message`] or
//! [`iolyzer_model::Transaction`] selects which handler method runs, and
//! the active [`AnalyzerMode`] selects which view implementation is active.
//! A view that does not implement a shape inherits the no-record default,
//! so each mode only sees its own domain.

pub mod diagnosis;
pub mod isdu;
pub mod mode;
pub mod msequence;
pub mod parameters;
pub mod process_data;
pub mod registry;
pub mod render;

pub use diagnosis::DiagnosisView;
pub use isdu::IsduView;
pub use mode::{AnalyzerMode, ModeParseError};
pub use msequence::MSequenceView;
pub use parameters::PageView;
pub use process_data::{DecodedField, NullCodec, ProcessDataCodec, ProcessDataView};
pub use registry::DispatchRegistry;
