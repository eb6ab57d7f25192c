use super::Classification;

/// Store-allocated identity of a tracked object. Never reused.
pub type ObjectId = u64;

/// The two element lines of a TLE, kept as opaque text.
///
/// Nothing in the catalog validates these lines; a malformed set is only
/// noticed when a propagator fails on it.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementSet {
    line1: String,
    line2: String,
}

impl ElementSet {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self { line1: line1.into(), line2: line2.into() }
    }

    pub fn line1(&self) -> &str { &self.line1 }
    pub fn line2(&self) -> &str { &self.line2 }
}

/// A single catalog entry (station, debris fragment, ...).
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TrackedObject {
    /// Stable identity, assigned once on creation.
    id: ObjectId,
    /// Display name, unique within the catalog and used as the upsert key.
    name: String,
    /// Current element set.
    elements: ElementSet,
    /// Label of the feed that last touched this object.
    classification: Classification,
}

impl TrackedObject {
    pub fn new(
        id: ObjectId,
        name: impl Into<String>,
        elements: ElementSet,
        classification: Classification,
    ) -> Self {
        Self { id, name: name.into(), elements, classification }
    }

    pub fn id(&self) -> ObjectId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn elements(&self) -> &ElementSet { &self.elements }
    pub fn classification(&self) -> Classification { self.classification }

    /// Replaces element lines and classification in place, keeping the identity.
    pub(super) fn refresh(&mut self, elements: ElementSet, classification: Classification) {
        self.elements = elements;
        self.classification = classification;
    }
}
