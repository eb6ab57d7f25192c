use strum_macros::{Display, EnumIter, EnumString};

/// Coarse category of a tracked object, taken from the label of the feed it
/// was last synchronised from.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Station,
    Debris,
    Unknown,
}

impl Classification {
    /// Maps a feed label onto a classification, case-insensitively.
    /// Labels outside the known set become [`Classification::Unknown`].
    pub fn from_label(label: &str) -> Self { label.trim().parse().unwrap_or(Classification::Unknown) }
}
