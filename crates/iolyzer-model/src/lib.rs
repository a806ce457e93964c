//! Wire data model for IO-Link transmission analysis.
//!
//! This is the shared vocabulary of the iolyzer workspace. An external
//! physical-layer decoder turns octet groups into [`Message`]s; an external
//! classifier assembles them into [`Transaction`]s. Both shapes route through
//! the double-dispatch handler traits defined here, and everything a handler
//! emits is a [`Record`]: an ordered field-name → display-value mapping.

pub mod message;
pub mod octets;
pub mod page;
pub mod record;
pub mod time;
pub mod transaction;

pub use message::{DeviceMessage, MasterMessage, Message, MessageHandler};
pub use octets::{ChecksumStatus, ChecksumType, CommChannel, Direction, MSequenceControl};
pub use record::Record;
pub use time::Span;
pub use transaction::{
    DiagnosisEvent, DiagnosisReadTransaction, DiagnosisResetTransaction, IsduError,
    IsduTransaction, PageTransaction, ProcessTransaction, Transaction, TransactionHandler,
};
