//! Mapping from engine values to the `api_types` wire types.

use api_types::{
    catalogue::CatalogueEntry,
    notation::{ClassificationView, GeneratorView},
    ticket::{EntryView, LineView},
};
use lottery_engine::{BetType, Classification, Generator};

use crate::ticket::Entry;

pub fn generator_view(generator: &Generator) -> GeneratorView {
    match generator {
        Generator::None => GeneratorView::None,
        Generator::Combinations => GeneratorView::Combinations,
        Generator::NumericSequence { start, end } => GeneratorView::NumericSequence {
            start: start.clone(),
            end: end.clone(),
        },
        Generator::PairSequence { start, end } => GeneratorView::PairSequence {
            start: start.clone(),
            end: end.clone(),
        },
        Generator::Plus100 => GeneratorView::Plus100,
        Generator::RangeOffset { count } => GeneratorView::RangeOffset { count: *count },
    }
}

pub fn classification_view(input: &str, classification: &Classification) -> ClassificationView {
    ClassificationView {
        input: input.to_string(),
        is_valid: classification.is_valid,
        bet_type: classification.bet_type.map(|b| b.code().to_string()),
        section: classification.section.map(|s| s.label().to_string()),
        generator: generator_view(&classification.generator),
        core_digits: classification.core_digits.clone(),
        display_label: classification.display_label.clone(),
    }
}

pub fn entry_view(entry: &Entry) -> EntryView {
    EntryView {
        input: entry.input.clone(),
        lines: entry
            .lines
            .iter()
            .map(|line| LineView {
                play_number: line.play_number.clone(),
                bet_type: line.bet_type.code().to_string(),
                section: line.section.label().to_string(),
            })
            .collect(),
        truncated: entry.truncated,
    }
}

pub fn catalogue() -> Vec<CatalogueEntry> {
    BetType::ALL
        .iter()
        .map(|bet_type| CatalogueEntry {
            code: bet_type.code().to_string(),
            name: bet_type.name().to_string(),
            section: bet_type.section().label().to_string(),
            digits: bet_type.digits(),
        })
        .collect()
}
