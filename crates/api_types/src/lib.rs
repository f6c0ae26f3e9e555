//! Wire types shared by the point-of-sale front ends.
//!
//! These mirror the engine values but stay independent of the engine crate:
//! bet types and sections travel as their canonical codes.

use serde::{Deserialize, Serialize};

pub mod notation {
    use super::*;

    /// Expansion attached to a classification.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    pub enum GeneratorView {
        None,
        Combinations,
        NumericSequence { start: String, end: String },
        PairSequence { start: String, end: String },
        Plus100,
        RangeOffset { count: u8 },
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ClassificationView {
        /// Notation as typed by the operator.
        pub input: String,
        pub is_valid: bool,
        /// Canonical bet-type code (e.g. `CASH3_STRAIGHT`).
        pub bet_type: Option<String>,
        /// Ticket section heading (e.g. `CASH 3`).
        pub section: Option<String>,
        pub generator: GeneratorView,
        pub core_digits: String,
        pub display_label: String,
    }
}

pub mod ticket {
    use super::*;

    /// A play number ready to receive an amount.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LineView {
        pub play_number: String,
        pub bet_type: String,
        pub section: String,
    }

    /// Lines produced by one typed entry.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryView {
        pub input: String,
        pub lines: Vec<LineView>,
        /// `true` when the line cap cut the expansion short.
        pub truncated: bool,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorView {
        pub input: String,
        pub error: String,
    }

    /// Outcome of a batch of entries: accepted ones and refused ones.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpandReport {
        pub entries: Vec<EntryView>,
        pub errors: Vec<ErrorView>,
    }
}

pub mod catalogue {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CatalogueEntry {
        pub code: String,
        pub name: String,
        pub section: String,
        pub digits: usize,
    }
}
