/// Errors raised while building the startup settings seed.
///
/// Adaptation at runtime never raises these (an underivable update is a
/// silent no-op), but an invalid seed must fail loudly at startup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The capability octet carries a preoperate code outside the table.
    #[error("unsupported preoperate M-sequence code {code}")]
    UnsupportedPreoperateCode { code: u8 },

    /// The operate code and process-data sizes form no valid table entry.
    #[error("unsupported operate M-sequence combination (code {code}, pdIn {pd_in}, pdOut {pd_out})")]
    UnsupportedOperateCombination { code: u8, pd_in: u8, pd_out: u8 },

    /// A process-data length exceeds the 32-octet protocol maximum.
    #[error("process data length {octets} exceeds 32 octets")]
    ProcessDataTooLong { octets: u8 },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
