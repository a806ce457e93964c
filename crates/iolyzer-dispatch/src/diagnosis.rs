use iolyzer_model::{
    DiagnosisReadTransaction, DiagnosisResetTransaction, Record, TransactionHandler,
};

use crate::render::octet;

/// Events/diagnosis view: event-memory reads and resets.
#[derive(Debug, Default)]
pub struct DiagnosisView;

impl TransactionHandler for DiagnosisView {
    fn handle_diagnosis_read(&mut self, transaction: &DiagnosisReadTransaction) -> Vec<Record> {
        let mut record = Record::new("DiagRead", transaction.span);

        let events = if transaction.events.is_empty() {
            "none".to_string()
        } else {
            transaction
                .events
                .iter()
                .map(|event| format!("0x{:04x} [{}]", event.code, octet(event.qualifier)))
                .collect::<Vec<_>>()
                .join("; ")
        };
        record.push("events", events);

        vec![record]
    }

    fn handle_diagnosis_reset(&mut self, transaction: &DiagnosisResetTransaction) -> Vec<Record> {
        // A reset carries no event data; the kind alone says everything.
        vec![Record::new("DiagReset", transaction.span)]
    }
}
