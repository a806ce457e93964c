use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::time::Span;

/// One output row: a record kind, the covered span, and an ordered
/// field-name → display-value mapping.
///
/// Field order is part of the contract: hosts render fields in exactly the
/// order they were pushed. Absent optionals are never pushed, so a record
/// contains no empty placeholder fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    kind: &'static str,
    span: Span,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record of the given kind.
    pub fn new(kind: &'static str, span: Span) -> Self {
        Self {
            kind,
            span,
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Fields<'a>(&'a [(String, String)]);

        impl Serialize for Fields<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (key, value) in self.0 {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }

        let mut record = serializer.serialize_struct("Record", 4)?;
        record.serialize_field("kind", self.kind)?;
        record.serialize_field("start", &self.span.start.as_secs_f64())?;
        record.serialize_field("end", &self.span.end.as_secs_f64())?;
        record.serialize_field("fields", &Fields(&self.fields))?;
        record.end()
    }
}
