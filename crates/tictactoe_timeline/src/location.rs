//! Human-readable grid locations for move-list annotation.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Language used for location strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// "row 1, column 1"
    #[default]
    English,
    /// "dòng: 1, cột: 1"
    Vietnamese,
}

const ENGLISH: [&str; 9] = [
    "row 1, column 1",
    "row 1, column 2",
    "row 1, column 3",
    "row 2, column 1",
    "row 2, column 2",
    "row 2, column 3",
    "row 3, column 1",
    "row 3, column 2",
    "row 3, column 3",
];

const VIETNAMESE: [&str; 9] = [
    "dòng: 1, cột: 1",
    "dòng: 1, cột: 2",
    "dòng: 1, cột: 3",
    "dòng: 2, cột: 1",
    "dòng: 2, cột: 2",
    "dòng: 2, cột: 3",
    "dòng: 3, cột: 1",
    "dòng: 3, cột: 2",
    "dòng: 3, cột: 3",
];

impl Locale {
    /// Location string for `pos`, 1-indexed row and column.
    pub fn location(self, pos: Position) -> &'static str {
        let table = match self {
            Locale::English => &ENGLISH,
            Locale::Vietnamese => &VIETNAMESE,
        };
        table[pos.to_index()]
    }
}
