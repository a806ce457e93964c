//! End-to-end session behavior with scripted collaborator doubles.

use std::collections::VecDeque;
use std::sync::Arc;

use bytes::Bytes;

use iolyzer::dispatch::{AnalyzerMode, NullCodec};
use iolyzer::model::{
    ChecksumStatus, ChecksumType, CommChannel, DeviceMessage, Direction, IsduTransaction,
    MSequenceControl, MasterMessage, Message, PageTransaction, Span, Transaction,
};
use iolyzer::profile::{DeviceProfile, VariableNames};
use iolyzer::{seed_settings, Analyzer, FramingError, MessageInterpreter, OctetDecoder};

/// Decoder double replaying prepared results octet by octet.
struct ScriptedDecoder {
    script: VecDeque<Result<Option<Message>, FramingError>>,
}

impl ScriptedDecoder {
    fn new(script: Vec<Result<Option<Message>, FramingError>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    fn idle() -> Self {
        Self::new(Vec::new())
    }
}

impl OctetDecoder for ScriptedDecoder {
    fn process_octet(&mut self, _octet: u8, _span: Span) -> Result<Option<Message>, FramingError> {
        self.script.pop_front().unwrap_or(Ok(None))
    }

    fn reset(&mut self) {
        // Replay continues at the next scripted frame.
    }
}

/// Interpreter double with the aggregation behavior the session relies on:
/// page reads classify immediately, ISDU-channel masters accumulate until
/// `isdu_len` messages complete one write to index 0x0012. `reset` drops
/// the accumulation.
struct Joiner {
    isdu_len: usize,
    pending: Vec<Span>,
}

impl Joiner {
    fn new(isdu_len: usize) -> Self {
        Self {
            isdu_len,
            pending: Vec::new(),
        }
    }
}

impl MessageInterpreter for Joiner {
    fn process_message(&mut self, message: &Message) -> Vec<Transaction> {
        let Message::Master(master) = message else {
            return Vec::new();
        };

        match master.control.channel() {
            CommChannel::Page => {
                let value = master.od.as_deref().map_or(0, |od| od[0]);
                vec![Transaction::Page(PageTransaction {
                    direction: master.control.direction(),
                    index: master.control.address(),
                    value,
                    valid: true,
                    span: master.span,
                })]
            }
            CommChannel::Isdu => {
                self.pending.push(master.span);
                if self.pending.len() < self.isdu_len {
                    return Vec::new();
                }
                let span = self
                    .pending
                    .drain(..)
                    .reduce(|joined, next| joined.enclose(next))
                    .unwrap_or(master.span);
                vec![Transaction::Isdu(IsduTransaction {
                    direction: Direction::Write,
                    index: 0x0012,
                    sub_index: None,
                    payload: Some(Bytes::from_static(&[0x4f, 0x4b])),
                    error: None,
                    valid: true,
                    span,
                })]
            }
            _ => Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.pending.clear();
    }
}

fn profile(capability: u8) -> DeviceProfile {
    DeviceProfile::from_json(&format!(
        r#"{{ "msequence_capability": {capability}, "process_data": [ {{}} ] }}"#
    ))
    .unwrap()
}

fn page_read(index: u8, value: u8, span: Span) -> Message {
    // Read flag, page channel, address.
    Message::Master(MasterMessage {
        control: MSequenceControl::new(0x80 | 0x20 | (index & 0x1f)),
        checksum: ChecksumType::new(0x00),
        od: Some(Bytes::copy_from_slice(&[value])),
        pd_out: None,
        span,
    })
}

fn isdu_write_part(span: Span) -> Message {
    Message::Master(MasterMessage {
        control: MSequenceControl::new(0x60 | 0x10),
        checksum: ChecksumType::new(0x40),
        od: Some(Bytes::from_static(&[0x12])),
        pd_out: None,
        span,
    })
}

#[test]
fn round_trip_settings_isdu_and_error_recovery() {
    // Seed announces preoperate code 1 / operate code 4.
    let settings = seed_settings(&profile(0x19), None).unwrap();
    let mut analyzer = Analyzer::new(
        Arc::clone(&settings),
        AnalyzerMode::Isdu,
        VariableNames::default(),
        Arc::new(NullCodec),
        ScriptedDecoder::idle(),
        Joiner::new(2),
    );
    assert_eq!(settings.get().preoperate.od, 8);

    // (1) Observed capability 0x00: preoperate drops to 2 OD octets.
    let records = analyzer.push_message(page_read(0x03, 0x00, Span::micros(0, 10)));
    assert!(records.is_empty(), "page transactions are mute in ISDU mode");
    assert_eq!(settings.get().preoperate.od, 2);

    // (2) Process-data-in length of 16 bits: two octets, operate OD
    // re-derives from the observed operate code 0.
    analyzer.push_message(page_read(0x05, 0x10, Span::micros(10, 20)));
    assert_eq!(settings.get().operate.pd_in, 2);
    assert_eq!(settings.get().operate.od, 1);

    // (3) ISDU write split across two messages: exactly one record spanning
    // first start to last end.
    let mut records = analyzer.push_message(isdu_write_part(Span::micros(20, 30)));
    records.extend(analyzer.push_message(isdu_write_part(Span::micros(40, 50))));
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.kind(), "IsduWrite");
    assert_eq!(record.field("valid"), Some("true"));
    assert_eq!(record.field("index"), Some("0x0012"));
    assert_eq!(record.field("info"), Some("0x0012: Product Name"));
    assert_eq!(record.span(), Span::micros(20, 50));

    // (4) Error marker mid-ISDU: accumulation is dropped, the next ISDU
    // starts cleanly and still yields exactly one record.
    assert!(analyzer.push_message(isdu_write_part(Span::micros(60, 70))).is_empty());
    analyzer.signal_error();

    let mut records = analyzer.push_message(isdu_write_part(Span::micros(80, 90)));
    assert!(records.is_empty(), "first message after reset must not complete an ISDU");
    records.extend(analyzer.push_message(isdu_write_part(Span::micros(100, 110))));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].span(), Span::micros(80, 110));
}

#[test]
fn isdu_joins_of_three_and_four_messages_yield_one_record() {
    for len in [3usize, 4] {
        let settings = seed_settings(&profile(0x00), None).unwrap();
        let mut analyzer = Analyzer::new(
            settings,
            AnalyzerMode::Isdu,
            VariableNames::default(),
            Arc::new(NullCodec),
            ScriptedDecoder::idle(),
            Joiner::new(len),
        );

        let mut records = Vec::new();
        for i in 0..len as u64 {
            let span = Span::micros(i * 10, i * 10 + 5);
            records.extend(analyzer.push_message(isdu_write_part(span)));
        }
        assert_eq!(records.len(), 1, "join of {len} messages");
        assert_eq!(records[0].span(), Span::micros(0, (len as u64 - 1) * 10 + 5));
    }
}

#[test]
fn settings_change_applies_to_the_transaction_that_caused_it() {
    // Interpreter that classifies a device message carrying process data as
    // a page read announcing exactly that input length.
    struct AnnounceThenData;

    impl MessageInterpreter for AnnounceThenData {
        fn process_message(&mut self, message: &Message) -> Vec<Transaction> {
            let Message::Device(device) = message else {
                return Vec::new();
            };
            if device.pd_in.is_none() {
                return Vec::new();
            }
            // Announce a 16-bit input length.
            vec![Transaction::Page(PageTransaction {
                direction: Direction::Read,
                index: 0x05,
                value: 0x10,
                valid: true,
                span: device.span,
            })]
        }

        fn reset(&mut self) {}
    }

    let settings = seed_settings(&profile(0x00), None).unwrap();
    let mut analyzer = Analyzer::new(
        Arc::clone(&settings),
        AnalyzerMode::ProcessData,
        VariableNames::default(),
        Arc::new(NullCodec),
        ScriptedDecoder::idle(),
        AnnounceThenData,
    );
    assert_eq!(settings.get().operate.pd_in, 0);

    // The same message that triggers the reconfiguration carries matching
    // process data: the new length must already apply to it.
    let message = Message::Device(DeviceMessage {
        status: ChecksumStatus::new(0x00),
        od: None,
        pd_in: Some(Bytes::from_static(&[0xbe, 0xef])),
        span: Span::micros(0, 10),
    });
    let records = analyzer.push_message(message);

    assert_eq!(settings.get().operate.pd_in, 2);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), "PDin");
    assert_eq!(records[0].field("pdIn"), Some("beef"));
}

#[test]
fn octet_level_framing_error_leaves_a_gap_and_resumes() {
    let span_a = Span::micros(0, 10);
    let span_b = Span::micros(20, 30);

    let message = |span| {
        Message::Device(DeviceMessage {
            status: ChecksumStatus::new(0x00),
            od: None,
            pd_in: None,
            span,
        })
    };

    let decoder = ScriptedDecoder::new(vec![
        Ok(None),
        Err(FramingError("checksum mismatch".into())),
        Ok(Some(message(span_a))),
        Ok(Some(message(span_b))),
    ]);

    let settings = seed_settings(&profile(0x00), None).unwrap();
    let mut analyzer = Analyzer::new(
        settings,
        AnalyzerMode::MSequence,
        VariableNames::default(),
        Arc::new(NullCodec),
        decoder,
        Joiner::new(2),
    );

    assert!(analyzer.push_octet(0x00, Span::micros(0, 1)).is_empty());
    // The faulty octet produces a gap, not a record.
    assert!(analyzer.push_octet(0xff, Span::micros(1, 2)).is_empty());

    // Traffic resumes with the next complete frames.
    let records = analyzer.push_octet(0x00, span_a);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].span(), span_a);
    let records = analyzer.push_octet(0x00, span_b);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].span(), span_b);
}

#[test]
fn page_mode_emits_page_records_in_classification_order() {
    let settings = seed_settings(&profile(0x00), None).unwrap();
    let mut analyzer = Analyzer::new(
        settings,
        AnalyzerMode::Page,
        VariableNames::default(),
        Arc::new(NullCodec),
        ScriptedDecoder::idle(),
        Joiner::new(2),
    );

    let first = analyzer.push_message(page_read(0x02, 0x20, Span::micros(0, 10)));
    let second = analyzer.push_message(page_read(0x04, 0x11, Span::micros(10, 20)));

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].field("pageInfo"), Some("MinCycleTime = 0x20"));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].field("pageInfo"), Some("RevisionID = 0x11"));
}
