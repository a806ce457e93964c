use bytes::Bytes;

use crate::octets::{ChecksumStatus, ChecksumType, MSequenceControl};
use crate::record::Record;
use crate::time::Span;

/// One decoded master transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterMessage {
    /// M-sequence control octet (direction, channel, address).
    pub control: MSequenceControl,
    /// Checksum/type octet.
    pub checksum: ChecksumType,
    /// On-request data octets, if the frame carried any.
    pub od: Option<Bytes>,
    /// Output process data octets, if the frame carried any.
    pub pd_out: Option<Bytes>,
    pub span: Span,
}

/// One decoded device transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceMessage {
    /// Checksum/status octet.
    pub status: ChecksumStatus,
    /// On-request data octets, if the frame carried any.
    pub od: Option<Bytes>,
    /// Input process data octets, if the frame carried any.
    pub pd_in: Option<Bytes>,
    pub span: Span,
}

/// One decoded physical-layer transmission, tagged by originator.
///
/// Produced by the external octet-stream decoder for exactly one octet
/// group, consumed immediately by the classifier and the dispatch registry,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Master(MasterMessage),
    Device(DeviceMessage),
}

impl Message {
    pub fn span(&self) -> Span {
        match self {
            Message::Master(msg) => msg.span,
            Message::Device(msg) => msg.span,
        }
    }

    /// Route this message to the handler method matching its shape.
    pub fn dispatch(&self, handler: &mut dyn MessageHandler) -> Vec<Record> {
        match self {
            Message::Master(msg) => handler.handle_master(msg),
            Message::Device(msg) => handler.handle_device(msg),
        }
    }
}

/// Shape-selected handler for decoded messages.
///
/// Every method defaults to "no records" so an implementation only overrides
/// the shapes it cares about.
pub trait MessageHandler {
    fn handle_master(&mut self, _message: &MasterMessage) -> Vec<Record> {
        Vec::new()
    }

    fn handle_device(&mut self, _message: &DeviceMessage) -> Vec<Record> {
        Vec::new()
    }
}
