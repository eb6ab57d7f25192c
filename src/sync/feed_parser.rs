use crate::catalog::{Classification, ElementSet, UpsertRecord};
use itertools::Itertools;

/// One `{name, line1, line2}` triple as it appeared in a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElementRecord {
    name: String,
    line1: String,
    line2: String,
}

impl RawElementRecord {
    pub fn name(&self) -> &str { &self.name }
    pub fn line1(&self) -> &str { &self.line1 }
    pub fn line2(&self) -> &str { &self.line2 }

    pub fn into_upsert(self, classification: Classification) -> UpsertRecord {
        UpsertRecord::new(self.name, ElementSet::new(self.line1, self.line2), classification)
    }
}

/// Splits raw feed text (LF or CRLF) into name/line1/line2 triples.
///
/// Lines are trimmed. Empty lines at the very end carry no content and are
/// ignored; a trailing group of fewer than three lines is a truncated feed
/// and is dropped without error.
pub fn parse_feed(raw: &str) -> Vec<RawElementRecord> {
    let mut lines = raw.lines().map(str::trim).collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
        .into_iter()
        .tuples()
        .map(|(name, line1, line2)| RawElementRecord {
            name: name.to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        })
        .collect()
}
