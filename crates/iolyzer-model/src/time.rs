use std::time::Duration;

use serde::Serialize;

/// Start/end timestamp pair of one transmission or transaction.
///
/// Timestamps are offsets from the start of the capture. A span is immutable
/// once attached to a message; transactions assembled from several messages
/// carry the enclosing span of their first and last constituent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Duration,
    pub end: Duration,
}

impl Span {
    /// Create a span from start/end offsets.
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    /// Span covering whole microseconds, mainly useful in tests.
    pub fn micros(start: u64, end: u64) -> Self {
        Self::new(Duration::from_micros(start), Duration::from_micros(end))
    }

    /// The smallest span containing both `self` and `other`.
    pub fn enclose(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
