use std::sync::Arc;

use iolyzer_dispatch::{AnalyzerMode, DispatchRegistry, ProcessDataCodec};
use iolyzer_model::{Message, Record, Span, Transaction};
use iolyzer_profile::{DeviceProfile, VariableNames};
use iolyzer_settings::{
    AutoSettingsAdapter, DecoderSettings, MSequenceCapability, SettingsStore, SharedSettings,
};

use crate::error::AnalyzerError;

/// Error signalled by the external decoder for the current frame: checksum
/// failure, unexpected octet, lost synchronization. Never fatal: the
/// session drops transient state and resumes at the next octet.
#[derive(Debug, thiserror::Error)]
#[error("framing error: {0}")]
pub struct FramingError(pub String);

/// External physical-layer decoder.
///
/// Consumes one timestamped octet at a time and emits a [`Message`] once a
/// whole frame group has accumulated. Reads the shared
/// [`SettingsStore`](iolyzer_settings::SettingsStore) to know the current
/// frame sizes; never writes it.
pub trait OctetDecoder {
    fn process_octet(&mut self, octet: u8, span: Span) -> Result<Option<Message>, FramingError>;

    /// Drop any partially accumulated frame.
    fn reset(&mut self);
}

/// External classifier assembling messages into transactions, including the
/// multi-message ISDU joins.
pub trait MessageInterpreter {
    /// Classify one message; returns the transactions completed by it
    /// (usually none or one).
    fn process_message(&mut self, message: &Message) -> Vec<Transaction>;

    /// Drop any partially assembled transaction.
    fn reset(&mut self);
}

/// Seed a settings store from a device profile and process-data selector.
///
/// Fails on an unknown selector or a capability/size combination outside
/// the M-sequence tables; an invalid seed is never accepted silently.
pub fn seed_settings(
    profile: &DeviceProfile,
    condition: Option<i64>,
) -> Result<SharedSettings, AnalyzerError> {
    let variant = profile.select_process_data(condition)?;
    let seed = DecoderSettings::seeded(
        MSequenceCapability::new(profile.msequence_capability),
        variant.input.octet_count(),
        variant.output.octet_count(),
    )?;
    Ok(Arc::new(SettingsStore::new(seed)))
}

/// One analysis session: decoder → interpreter → settings adaptation →
/// mode-selected dispatch.
///
/// Strictly synchronous and single-threaded; every call returns the records
/// produced for exactly the input it was given, in classification order.
pub struct Analyzer<D, I> {
    decoder: D,
    interpreter: I,
    settings: SharedSettings,
    adapter: AutoSettingsAdapter,
    registry: DispatchRegistry,
}

impl<D: OctetDecoder, I: MessageInterpreter> Analyzer<D, I> {
    /// Assemble a session around an already seeded settings store.
    ///
    /// The same store handle must be the one the decoder reads its frame
    /// sizes from.
    pub fn new(
        settings: SharedSettings,
        mode: AnalyzerMode,
        names: VariableNames,
        codec: Arc<dyn ProcessDataCodec>,
        decoder: D,
        interpreter: I,
    ) -> Self {
        let adapter = AutoSettingsAdapter::new(Arc::clone(&settings));
        let registry = DispatchRegistry::new(mode, Arc::clone(&settings), names, codec);
        Self {
            decoder,
            interpreter,
            settings,
            adapter,
            registry,
        }
    }

    /// The shared settings store of this session.
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    pub fn mode(&self) -> AnalyzerMode {
        self.registry.mode()
    }

    /// Feed one timestamped octet through the decoder.
    ///
    /// A framing error resets the decoder and the interpreter: the affected
    /// span produces no records and the next valid octet starts fresh.
    pub fn push_octet(&mut self, octet: u8, span: Span) -> Vec<Record> {
        match self.decoder.process_octet(octet, span) {
            Ok(Some(message)) => self.push_message(message),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "frame dropped");
                self.reset_transient();
                Vec::new()
            }
        }
    }

    /// Classify and dispatch one decoded message.
    ///
    /// For every transaction the message completes, the settings adapter
    /// runs *before* the registry sees that same transaction: a page read
    /// reconfigures the decode no later than the transaction that caused
    /// it, and never retroactively.
    pub fn push_message(&mut self, message: Message) -> Vec<Record> {
        let mut records = Vec::new();

        for transaction in self.interpreter.process_message(&message) {
            transaction.dispatch(&mut self.adapter);
            records.extend(self.registry.dispatch_transaction(&transaction));
        }

        records.extend(self.registry.dispatch_message(&message));
        records
    }

    /// React to an explicit error marker from the capture source.
    pub fn signal_error(&mut self) {
        tracing::debug!("error marker: dropping in-flight frame and transaction state");
        self.reset_transient();
    }

    fn reset_transient(&mut self) {
        self.decoder.reset();
        self.interpreter.reset();
    }
}
