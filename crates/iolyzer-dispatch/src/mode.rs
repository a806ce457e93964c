use std::fmt;
use std::str::FromStr;

/// The analysis mode: which dispatch profile is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerMode {
    /// Raw M-sequence view: every decoded message, unfiltered.
    MSequence,
    /// Cyclic process-data view.
    ProcessData,
    /// Event memory reads and resets.
    Diagnosis,
    /// Direct parameter (page 1) accesses.
    Page,
    /// Indexed Service Data Unit accesses.
    Isdu,
}

/// Rejected mode selection string.
#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a recognized analyzer mode")]
pub struct ModeParseError(pub String);

impl AnalyzerMode {
    /// All modes in display order.
    pub const ALL: [AnalyzerMode; 5] = [
        AnalyzerMode::MSequence,
        AnalyzerMode::ProcessData,
        AnalyzerMode::Diagnosis,
        AnalyzerMode::Page,
        AnalyzerMode::Isdu,
    ];

    /// Stable machine name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            AnalyzerMode::MSequence => "msequence",
            AnalyzerMode::ProcessData => "process-data",
            AnalyzerMode::Diagnosis => "diagnosis",
            AnalyzerMode::Page => "page",
            AnalyzerMode::Isdu => "isdu",
        }
    }

    /// Human-readable description, also accepted by [`FromStr`].
    pub fn description(self) -> &'static str {
        match self {
            AnalyzerMode::MSequence => "M-Sequences",
            AnalyzerMode::ProcessData => "Process Data",
            AnalyzerMode::Diagnosis => "Events / Diagnosis",
            AnalyzerMode::Page => "Direct Parameter (Page 1)",
            AnalyzerMode::Isdu => "Indexed Service Data Unit (ISDU)",
        }
    }
}

impl fmt::Display for AnalyzerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalyzerMode {
    type Err = ModeParseError;

    /// Parse a machine name or display description, case-insensitive.
    /// Unmapped strings fail here, at configuration time.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim();
        AnalyzerMode::ALL
            .into_iter()
            .find(|mode| {
                mode.name().eq_ignore_ascii_case(wanted)
                    || mode.description().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ModeParseError(input.to_string()))
    }
}
