use serde::Serialize;

use crate::error::SettingsError;
use crate::mseq::{operate_od, preoperate_od, MSequenceCapability, MAX_PD_OCTETS};

/// On-request-data octet count during Startup. The startup stage always runs
/// TYPE_0 M-sequences.
pub const STARTUP_OD: u8 = 1;

/// Framing values of the Startup and Preoperate stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSettings {
    /// On-request-data octets per frame.
    pub od: u8,
}

/// Framing values of the Operate stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperateSettings {
    /// On-request-data octets per frame.
    pub od: u8,
    /// Input process-data octets (device to master).
    pub pd_in: u8,
    /// Output process-data octets (master to device).
    pub pd_out: u8,
}

/// Frame sizes per device lifecycle stage.
///
/// An immutable value object: updates construct a new value via the `with_*`
/// helpers and the whole value is swapped into the [`crate::SettingsStore`],
/// so no reader ever observes a half-updated set. Values stored here are
/// always consistent with the M-sequence type tables; validation happens in
/// [`DecoderSettings::seeded`] and in the adapter, never in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecoderSettings {
    pub startup: StageSettings,
    pub preoperate: StageSettings,
    pub operate: OperateSettings,
}

impl DecoderSettings {
    /// Build the startup seed from device-description values.
    ///
    /// Fails on capability codes or size combinations absent from the type
    /// tables; an invalid seed must never be accepted silently.
    pub fn seeded(capability: MSequenceCapability, pd_in: u8, pd_out: u8) -> Result<Self, SettingsError> {
        if pd_in > MAX_PD_OCTETS {
            return Err(SettingsError::ProcessDataTooLong { octets: pd_in });
        }
        if pd_out > MAX_PD_OCTETS {
            return Err(SettingsError::ProcessDataTooLong { octets: pd_out });
        }

        let preoperate = preoperate_od(capability.preoperate_code()).ok_or(
            SettingsError::UnsupportedPreoperateCode {
                code: capability.preoperate_code(),
            },
        )?;
        let operate = operate_od(capability.operate_code(), pd_in, pd_out).ok_or(
            SettingsError::UnsupportedOperateCombination {
                code: capability.operate_code(),
                pd_in,
                pd_out,
            },
        )?;

        Ok(Self {
            startup: StageSettings { od: STARTUP_OD },
            preoperate: StageSettings { od: preoperate },
            operate: OperateSettings {
                od: operate,
                pd_in,
                pd_out,
            },
        })
    }

    /// Copy with a different Preoperate OD size.
    pub fn with_preoperate_od(self, od: u8) -> Self {
        Self {
            preoperate: StageSettings { od },
            ..self
        }
    }

    /// Copy with a different Operate OD size.
    pub fn with_operate_od(self, od: u8) -> Self {
        Self {
            operate: OperateSettings { od, ..self.operate },
            ..self
        }
    }

    /// Copy with a different Operate input process-data size.
    pub fn with_pd_in(self, pd_in: u8) -> Self {
        Self {
            operate: OperateSettings {
                pd_in,
                ..self.operate
            },
            ..self
        }
    }

    /// Copy with a different Operate output process-data size.
    pub fn with_pd_out(self, pd_out: u8) -> Self {
        Self {
            operate: OperateSettings {
                pd_out,
                ..self.operate
            },
            ..self
        }
    }
}
