use iolyzer_model::{page, Direction, PageTransaction, Record, TransactionHandler};

use crate::mseq::{operate_od, preoperate_od, MSequenceCapability, ProcessDataLength};
use crate::settings::DecoderSettings;
use crate::store::SharedSettings;

/// Sentinel for "no capability observed yet"; outside every table.
const NO_OPERATE_CODE: u8 = 0xff;

/// Re-derives the decoder settings from observed direct-parameter traffic.
///
/// A [`TransactionHandler`] that watches Page *reads* of the M-sequence
/// capability and the process-data lengths. Writes to those indices are
/// always ignored: a write is a request, not confirmed device state. The
/// Operate OD size is never taken from a page value directly; it is always
/// recomputed from the cached operate code and the current process-data
/// sizes, and a combination outside the type table leaves it unchanged.
pub struct AutoSettingsAdapter {
    store: SharedSettings,
    operate_code: u8,
}

impl AutoSettingsAdapter {
    pub fn new(store: SharedSettings) -> Self {
        Self {
            store,
            operate_code: NO_OPERATE_CODE,
        }
    }

    fn rederive_operate_od(&self, settings: DecoderSettings) -> DecoderSettings {
        match operate_od(
            self.operate_code,
            settings.operate.pd_in,
            settings.operate.pd_out,
        ) {
            Some(od) => settings.with_operate_od(od),
            None => settings,
        }
    }

    fn apply_capability(&mut self, settings: DecoderSettings, value: u8) -> DecoderSettings {
        let capability = MSequenceCapability::new(value);

        let settings = match preoperate_od(capability.preoperate_code()) {
            Some(od) => settings.with_preoperate_od(od),
            // Reserved code: leave Preoperate untouched.
            None => settings,
        };

        self.operate_code = capability.operate_code();
        self.rederive_operate_od(settings)
    }

    fn apply_pd_in(&self, settings: DecoderSettings, value: u8) -> DecoderSettings {
        match ProcessDataLength::new(value).octet_count() {
            Some(octets) => self.rederive_operate_od(settings.with_pd_in(octets)),
            None => settings,
        }
    }

    fn apply_pd_out(&self, settings: DecoderSettings, value: u8) -> DecoderSettings {
        match ProcessDataLength::new(value).octet_count() {
            Some(octets) => self.rederive_operate_od(settings.with_pd_out(octets)),
            None => settings,
        }
    }
}

impl TransactionHandler for AutoSettingsAdapter {
    fn handle_page(&mut self, transaction: &PageTransaction) -> Vec<Record> {
        // Only completed reads reflect confirmed device state.
        if transaction.direction == Direction::Write || !transaction.valid {
            return Vec::new();
        }

        let current = self.store.get();
        let updated = match transaction.index {
            page::MSEQUENCE_CAPABILITY => self.apply_capability(current, transaction.value),
            page::PROCESS_DATA_IN => self.apply_pd_in(current, transaction.value),
            page::PROCESS_DATA_OUT => self.apply_pd_out(current, transaction.value),
            _ => return Vec::new(),
        };

        if updated != current {
            tracing::debug!(
                startup_od = updated.startup.od,
                preoperate_od = updated.preoperate.od,
                operate_od = updated.operate.od,
                pd_in = updated.operate.pd_in,
                pd_out = updated.operate.pd_out,
                "m-sequence payload sizes updated"
            );
            self.store.set(updated);
        }

        Vec::new()
    }
}
