//! Single-octet field decompositions of the IO-Link data-link layer.
//!
//! Checksum *computation* happens in the external decoder; the types here
//! only split already-validated octets into their named bit fields so that
//! records can render them as canonical strings.

use std::fmt;

use serde::Serialize;

/// Transfer direction of a parameter access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => f.write_str("Read"),
            Direction::Write => f.write_str("Write"),
        }
    }
}

/// Communication channel selected by the MC octet (bits 5-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommChannel {
    Process,
    Page,
    Diagnosis,
    Isdu,
}

impl fmt::Display for CommChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommChannel::Process => f.write_str("Process"),
            CommChannel::Page => f.write_str("Page"),
            CommChannel::Diagnosis => f.write_str("Diagnosis"),
            CommChannel::Isdu => f.write_str("ISDU"),
        }
    }
}

/// M-sequence control octet (MC): read/write flag, channel, address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MSequenceControl(u8);

impl MSequenceControl {
    pub fn new(octet: u8) -> Self {
        Self(octet)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// Bit 7: 1 = read, 0 = write.
    pub fn direction(self) -> Direction {
        if self.0 & 0x80 != 0 {
            Direction::Read
        } else {
            Direction::Write
        }
    }

    /// Bits 5-6: communication channel.
    pub fn channel(self) -> CommChannel {
        match (self.0 >> 5) & 0x03 {
            0 => CommChannel::Process,
            1 => CommChannel::Page,
            2 => CommChannel::Diagnosis,
            _ => CommChannel::Isdu,
        }
    }

    /// Bits 0-4: address within the selected channel.
    pub fn address(self) -> u8 {
        self.0 & 0x1f
    }
}

impl fmt::Display for MSequenceControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0x{:02x}",
            self.direction(),
            self.channel(),
            self.address()
        )
    }
}

/// Checksum/M-sequence-type octet (CKT) of a master message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumType(u8);

impl ChecksumType {
    pub fn new(octet: u8) -> Self {
        Self(octet)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// Bits 6-7: M-sequence type code (0, 1 or 2; 3 is reserved).
    pub fn msequence_type(self) -> u8 {
        (self.0 >> 6) & 0x03
    }

    /// Bits 0-5: checksum over the master frame.
    pub fn checksum(self) -> u8 {
        self.0 & 0x3f
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.msequence_type() {
            t @ 0..=2 => write!(f, "Type{t}"),
            _ => f.write_str("TypeReserved"),
        }
    }
}

/// Checksum/status octet (CKS) of a device message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumStatus(u8);

impl ChecksumStatus {
    pub fn new(octet: u8) -> Self {
        Self(octet)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// Bit 7: device has a diagnosis event pending.
    pub fn event_pending(self) -> bool {
        self.0 & 0x80 != 0
    }

    /// Bit 6: process data of this cycle is invalid.
    pub fn pd_invalid(self) -> bool {
        self.0 & 0x40 != 0
    }

    /// Bits 0-5: checksum over the device frame.
    pub fn checksum(self) -> u8 {
        self.0 & 0x3f
    }
}

impl fmt::Display for ChecksumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pd = if self.pd_invalid() {
            "PDinvalid"
        } else {
            "PDvalid"
        };
        if self.event_pending() {
            write!(f, "{pd}, Event")
        } else {
            f.write_str(pd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_octet_decomposition() {
        // Read, Page channel, address 0x03.
        let mc = MSequenceControl::new(0b1010_0011);
        assert_eq!(mc.direction(), Direction::Read);
        assert_eq!(mc.channel(), CommChannel::Page);
        assert_eq!(mc.address(), 0x03);
        assert_eq!(mc.to_string(), "Read Page 0x03");
    }

    #[test]
    fn control_octet_write_process() {
        let mc = MSequenceControl::new(0b0000_0000);
        assert_eq!(mc.direction(), Direction::Write);
        assert_eq!(mc.channel(), CommChannel::Process);
        assert_eq!(mc.address(), 0);
    }

    #[test]
    fn control_octet_isdu_channel() {
        let mc = MSequenceControl::new(0b0111_0001);
        assert_eq!(mc.channel(), CommChannel::Isdu);
        assert_eq!(mc.address(), 0x11);
    }

    #[test]
    fn checksum_type_fields() {
        let ckt = ChecksumType::new(0b1000_0001);
        assert_eq!(ckt.msequence_type(), 2);
        assert_eq!(ckt.checksum(), 0x01);
        assert_eq!(ckt.to_string(), "Type2");

        assert_eq!(ChecksumType::new(0b1100_0000).to_string(), "TypeReserved");
    }

    #[test]
    fn checksum_status_fields() {
        let cks = ChecksumStatus::new(0b1000_0000);
        assert!(cks.event_pending());
        assert!(!cks.pd_invalid());
        assert_eq!(cks.to_string(), "PDvalid, Event");

        let quiet = ChecksumStatus::new(0b0100_1010);
        assert!(!quiet.event_pending());
        assert!(quiet.pd_invalid());
        assert_eq!(quiet.checksum(), 0x0a);
        assert_eq!(quiet.to_string(), "PDinvalid");
    }
}
