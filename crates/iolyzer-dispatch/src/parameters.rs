use iolyzer_model::{page, PageTransaction, Record, TransactionHandler};

use crate::render::octet;

/// Direct-parameter (page 1) view.
#[derive(Debug, Default)]
pub struct PageView;

impl TransactionHandler for PageView {
    fn handle_page(&mut self, transaction: &PageTransaction) -> Vec<Record> {
        let mut record = Record::new("Page", transaction.span);
        record.push("pageDir", transaction.direction.to_string());
        record.push(
            "pageInfo",
            format!(
                "{} = {}",
                page::parameter_name(transaction.index),
                octet(transaction.value)
            ),
        );
        vec![record]
    }
}
