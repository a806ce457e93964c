use bytes::Bytes;

use crate::octets::Direction;
use crate::record::Record;
use crate::time::Span;

/// One direct-parameter (page) access: a single index/value exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTransaction {
    pub direction: Direction,
    /// Direct-parameter address (0x00-0x1f), see [`crate::page`].
    pub index: u8,
    pub value: u8,
    pub valid: bool,
    pub span: Span,
}

/// One entry read from the device event memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisEvent {
    /// Qualifier octet (mode, type, source).
    pub qualifier: u8,
    /// 16-bit event code.
    pub code: u16,
}

/// Event-memory read.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisReadTransaction {
    pub events: Vec<DiagnosisEvent>,
    pub valid: bool,
    pub span: Span,
}

/// Explicit event-memory reset; carries no event data.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisResetTransaction {
    pub valid: bool,
    pub span: Span,
}

/// Error information of a failed ISDU access, passed through for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsduError {
    pub code: u8,
    pub additional: u8,
}

/// Indexed Service Data Unit access, assembled from several messages.
#[derive(Debug, Clone, PartialEq)]
pub struct IsduTransaction {
    pub direction: Direction,
    pub index: u16,
    pub sub_index: Option<u8>,
    /// Read response data or write request data.
    pub payload: Option<Bytes>,
    /// Present iff the device answered with an error response.
    pub error: Option<IsduError>,
    pub valid: bool,
    pub span: Span,
}

/// One cyclic process-data exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTransaction {
    pub pd_in: Option<Bytes>,
    pub pd_out: Option<Bytes>,
    pub valid: bool,
    pub span: Span,
}

/// A semantic operation assembled from one or more messages by the external
/// classifier.
///
/// The span covers the first to last constituent message; `valid` signals
/// whether the on-the-wire exchange was logically complete and well-formed.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Page(PageTransaction),
    DiagnosisRead(DiagnosisReadTransaction),
    DiagnosisReset(DiagnosisResetTransaction),
    Isdu(IsduTransaction),
    Process(ProcessTransaction),
}

impl Transaction {
    pub fn span(&self) -> Span {
        match self {
            Transaction::Page(t) => t.span,
            Transaction::DiagnosisRead(t) => t.span,
            Transaction::DiagnosisReset(t) => t.span,
            Transaction::Isdu(t) => t.span,
            Transaction::Process(t) => t.span,
        }
    }

    pub fn valid(&self) -> bool {
        match self {
            Transaction::Page(t) => t.valid,
            Transaction::DiagnosisRead(t) => t.valid,
            Transaction::DiagnosisReset(t) => t.valid,
            Transaction::Isdu(t) => t.valid,
            Transaction::Process(t) => t.valid,
        }
    }

    /// Route this transaction to the handler method matching its variant.
    pub fn dispatch(&self, handler: &mut dyn TransactionHandler) -> Vec<Record> {
        match self {
            Transaction::Page(t) => handler.handle_page(t),
            Transaction::DiagnosisRead(t) => handler.handle_diagnosis_read(t),
            Transaction::DiagnosisReset(t) => handler.handle_diagnosis_reset(t),
            Transaction::Isdu(t) => handler.handle_isdu(t),
            Transaction::Process(t) => handler.handle_process(t),
        }
    }
}

/// Variant-selected handler for classified transactions.
///
/// Every method defaults to "no records"; a handler only overrides the
/// variants in its domain.
pub trait TransactionHandler {
    fn handle_page(&mut self, _transaction: &PageTransaction) -> Vec<Record> {
        Vec::new()
    }

    fn handle_diagnosis_read(&mut self, _transaction: &DiagnosisReadTransaction) -> Vec<Record> {
        Vec::new()
    }

    fn handle_diagnosis_reset(&mut self, _transaction: &DiagnosisResetTransaction) -> Vec<Record> {
        Vec::new()
    }

    fn handle_isdu(&mut self, _transaction: &IsduTransaction) -> Vec<Record> {
        Vec::new()
    }

    fn handle_process(&mut self, _transaction: &ProcessTransaction) -> Vec<Record> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PageOnly;

    impl TransactionHandler for PageOnly {
        fn handle_page(&mut self, transaction: &PageTransaction) -> Vec<Record> {
            vec![Record::new("Page", transaction.span)]
        }
    }

    fn page(valid: bool) -> Transaction {
        Transaction::Page(PageTransaction {
            direction: Direction::Read,
            index: 0x03,
            value: 0x2d,
            valid,
            span: Span::micros(0, 10),
        })
    }

    #[test]
    fn dispatch_selects_by_variant() {
        let mut handler = PageOnly;

        assert_eq!(page(true).dispatch(&mut handler).len(), 1);

        let reset = Transaction::DiagnosisReset(DiagnosisResetTransaction {
            valid: true,
            span: Span::micros(0, 1),
        });
        assert!(reset.dispatch(&mut handler).is_empty());

        let process = Transaction::Process(ProcessTransaction {
            pd_in: Some(Bytes::from_static(&[1, 2])),
            pd_out: None,
            valid: true,
            span: Span::micros(1, 2),
        });
        assert!(process.dispatch(&mut handler).is_empty());
    }

    #[test]
    fn validity_and_span_accessors() {
        assert!(page(true).valid());
        assert!(!page(false).valid());
        assert_eq!(page(true).span(), Span::micros(0, 10));

        let isdu = Transaction::Isdu(IsduTransaction {
            direction: Direction::Write,
            index: 0x0012,
            sub_index: None,
            payload: None,
            error: None,
            valid: true,
            span: Span::micros(5, 50),
        });
        assert_eq!(isdu.span(), Span::micros(5, 50));
        assert!(isdu.valid());
    }
}
