use std::sync::Arc;

use iolyzer_model::{Message, Record, Transaction};
use iolyzer_profile::VariableNames;
use iolyzer_settings::SharedSettings;

use crate::diagnosis::DiagnosisView;
use crate::isdu::IsduView;
use crate::mode::AnalyzerMode;
use crate::msequence::MSequenceView;
use crate::parameters::PageView;
use crate::process_data::{ProcessDataCodec, ProcessDataView};

/// Routes classified traffic to the view selected by the active mode.
///
/// Message-level modes (MSequence, ProcessData) consume raw messages;
/// transaction-level modes (Diagnosis, Page, Isdu) consume classified
/// transactions. Whatever the inactive half receives yields no records.
/// Records come out in classification order.
pub struct DispatchRegistry {
    mode: AnalyzerMode,
    msequence: MSequenceView,
    process_data: ProcessDataView,
    diagnosis: DiagnosisView,
    page: PageView,
    isdu: IsduView,
}

impl DispatchRegistry {
    pub fn new(
        mode: AnalyzerMode,
        settings: SharedSettings,
        names: VariableNames,
        codec: Arc<dyn ProcessDataCodec>,
    ) -> Self {
        Self {
            mode,
            msequence: MSequenceView,
            process_data: ProcessDataView::new(settings, codec),
            diagnosis: DiagnosisView,
            page: PageView,
            isdu: IsduView::new(names),
        }
    }

    pub fn mode(&self) -> AnalyzerMode {
        self.mode
    }

    /// Dispatch one decoded message to the active message-level view.
    pub fn dispatch_message(&mut self, message: &Message) -> Vec<Record> {
        match self.mode {
            AnalyzerMode::MSequence => message.dispatch(&mut self.msequence),
            AnalyzerMode::ProcessData => message.dispatch(&mut self.process_data),
            _ => Vec::new(),
        }
    }

    /// Dispatch one classified transaction to the active transaction-level
    /// view.
    pub fn dispatch_transaction(&mut self, transaction: &Transaction) -> Vec<Record> {
        match self.mode {
            AnalyzerMode::Diagnosis => transaction.dispatch(&mut self.diagnosis),
            AnalyzerMode::Page => transaction.dispatch(&mut self.page),
            AnalyzerMode::Isdu => transaction.dispatch(&mut self.isdu),
            _ => Vec::new(),
        }
    }
}
