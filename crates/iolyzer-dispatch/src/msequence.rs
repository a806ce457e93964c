use iolyzer_model::{DeviceMessage, MasterMessage, MessageHandler, Record};

use crate::render::hex_string;

/// Raw M-sequence view: every decoded message yields exactly one record,
/// in every lifecycle stage, never filtered.
#[derive(Debug, Default)]
pub struct MSequenceView;

impl MessageHandler for MSequenceView {
    fn handle_master(&mut self, message: &MasterMessage) -> Vec<Record> {
        let mut record = Record::new("MasterMsg", message.span);
        record.push("mc", message.control.to_string());
        record.push("ckt", message.checksum.to_string());
        if let Some(pd_out) = message.pd_out.as_deref().filter(|pd| !pd.is_empty()) {
            record.push("pdOut", hex_string(pd_out));
        }
        if let Some(od) = message.od.as_deref().filter(|od| !od.is_empty()) {
            record.push("od", hex_string(od));
        }
        vec![record]
    }

    fn handle_device(&mut self, message: &DeviceMessage) -> Vec<Record> {
        let mut record = Record::new("DeviceMsg", message.span);
        record.push("cks", message.status.to_string());
        if let Some(od) = message.od.as_deref().filter(|od| !od.is_empty()) {
            record.push("od", hex_string(od));
        }
        if let Some(pd_in) = message.pd_in.as_deref().filter(|pd| !pd.is_empty()) {
            record.push("pdIn", hex_string(pd_in));
        }
        vec![record]
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use iolyzer_model::{ChecksumStatus, ChecksumType, MSequenceControl, Message, Span};

    use super::*;

    #[test]
    fn master_record_carries_all_present_fields_in_order() {
        let message = Message::Master(MasterMessage {
            control: MSequenceControl::new(0xa3),
            checksum: ChecksumType::new(0x00),
            od: Some(Bytes::from_static(&[0x12, 0x00])),
            pd_out: Some(Bytes::from_static(&[0xff])),
            span: Span::micros(0, 20),
        });

        let records = message.dispatch(&mut MSequenceView);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.kind(), "MasterMsg");
        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["mc", "ckt", "pdOut", "od"]);
        assert_eq!(record.field("od"), Some("1200"));
        assert_eq!(record.field("pdOut"), Some("ff"));
    }

    #[test]
    fn absent_payloads_are_omitted_entirely() {
        let message = Message::Device(DeviceMessage {
            status: ChecksumStatus::new(0x00),
            od: None,
            pd_in: Some(Bytes::new()),
            span: Span::micros(0, 20),
        });

        let records = message.dispatch(&mut MSequenceView);
        let record = &records[0];
        assert_eq!(record.kind(), "DeviceMsg");
        assert_eq!(record.field("od"), None);
        // Empty payloads are treated as absent, not rendered as "".
        assert_eq!(record.field("pdIn"), None);
        assert_eq!(record.field("cks"), Some("PDvalid"));
    }

    #[test]
    fn emits_even_outside_operate_state() {
        // No settings involved: a bare startup-stage exchange still shows up.
        let message = Message::Device(DeviceMessage {
            status: ChecksumStatus::new(0x80),
            od: Some(Bytes::from_static(&[0x2d])),
            pd_in: None,
            span: Span::micros(5, 9),
        });
        assert_eq!(message.dispatch(&mut MSequenceView).len(), 1);
    }
}
