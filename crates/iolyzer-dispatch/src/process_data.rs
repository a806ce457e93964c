use std::sync::Arc;

use iolyzer_model::{DeviceMessage, MasterMessage, MessageHandler, Record};
use iolyzer_settings::SharedSettings;

use crate::render::hex_string;

/// One decoded process variable: field name and canonical string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub name: String,
    pub value: String,
}

impl DecodedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// External process-data codec: splits a payload into named fields rendered
/// as strings, so downstream display never shows a numeric field as an
/// opaque hex blob. Bit-field extraction itself is outside this crate.
pub trait ProcessDataCodec {
    fn decode_out(&self, payload: &[u8]) -> Vec<DecodedField>;
    fn decode_in(&self, payload: &[u8]) -> Vec<DecodedField>;
}

/// Codec that decodes nothing; records then carry only the raw hex payload.
#[derive(Debug, Default)]
pub struct NullCodec;

impl ProcessDataCodec for NullCodec {
    fn decode_out(&self, _payload: &[u8]) -> Vec<DecodedField> {
        Vec::new()
    }

    fn decode_in(&self, _payload: &[u8]) -> Vec<DecodedField> {
        Vec::new()
    }
}

/// Process-data view.
///
/// Emits a record only when a message carries process data whose length
/// equals the *currently configured* Operate size for that direction, read
/// from the shared settings store at dispatch time. During Startup and
/// Preoperate the same octet positions carry other semantics, so mismatched
/// lengths are silently dropped rather than decoded into garbage.
pub struct ProcessDataView {
    settings: SharedSettings,
    codec: Arc<dyn ProcessDataCodec>,
}

impl ProcessDataView {
    pub fn new(settings: SharedSettings, codec: Arc<dyn ProcessDataCodec>) -> Self {
        Self { settings, codec }
    }

    fn push_decoded(record: &mut Record, fields: Vec<DecodedField>) {
        for field in fields {
            record.push(field.name, field.value);
        }
    }
}

impl MessageHandler for ProcessDataView {
    fn handle_master(&mut self, message: &MasterMessage) -> Vec<Record> {
        let configured = self.settings.get().operate.pd_out as usize;
        let Some(pd_out) = message.pd_out.as_deref().filter(|pd| !pd.is_empty()) else {
            return Vec::new();
        };
        if pd_out.len() != configured {
            return Vec::new();
        }

        let mut record = Record::new("PDout", message.span);
        record.push("pdOut", hex_string(pd_out));
        Self::push_decoded(&mut record, self.codec.decode_out(pd_out));
        vec![record]
    }

    fn handle_device(&mut self, message: &DeviceMessage) -> Vec<Record> {
        let configured = self.settings.get().operate.pd_in as usize;
        let Some(pd_in) = message.pd_in.as_deref().filter(|pd| !pd.is_empty()) else {
            return Vec::new();
        };
        if pd_in.len() != configured {
            return Vec::new();
        }

        let mut record = Record::new("PDin", message.span);
        record.push("pdIn", hex_string(pd_in));
        Self::push_decoded(&mut record, self.codec.decode_in(pd_in));
        vec![record]
    }
}
