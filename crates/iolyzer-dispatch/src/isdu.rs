use iolyzer_model::{Direction, IsduTransaction, Record, TransactionHandler};
use iolyzer_profile::VariableNames;

use crate::render::{hex_string, isdu_index, isdu_sub_index, octet};

/// ISDU view: one record per completed indexed service data unit access,
/// enriched with variable names from the device description.
pub struct IsduView {
    names: VariableNames,
}

impl IsduView {
    pub fn new(names: VariableNames) -> Self {
        Self { names }
    }
}

impl TransactionHandler for IsduView {
    fn handle_isdu(&mut self, transaction: &IsduTransaction) -> Vec<Record> {
        let kind = match transaction.direction {
            Direction::Read => "IsduRead",
            Direction::Write => "IsduWrite",
        };
        let mut record = Record::new(kind, transaction.span);

        record.push("valid", if transaction.valid { "true" } else { "false" });

        let index = isdu_index(transaction.index);
        let info = match self.names.resolve(transaction.index) {
            Some(name) => format!("{index}: {name}"),
            None => index.clone(),
        };
        record.push("index", index);
        record.push("info", info);

        if let Some(sub_index) = transaction.sub_index {
            record.push("subIndex", isdu_sub_index(sub_index));
        }
        if let Some(payload) = transaction.payload.as_deref().filter(|p| !p.is_empty()) {
            record.push("data", hex_string(payload));
        }
        if let Some(error) = transaction.error {
            record.push("errorCode", octet(error.code));
            record.push("additionalCode", octet(error.additional));
        }

        vec![record]
    }
}
