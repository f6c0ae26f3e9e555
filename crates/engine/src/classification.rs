//! Classification values produced by [`classify`](crate::classify) and the
//! lines produced by [`generate_lines`](crate::generate_lines).

use serde::{Deserialize, Serialize};

use crate::{BetType, Section};

/// Label shown when no notation rule matches.
pub const INVALID_FORMAT_LABEL: &str = "Formato no válido";
/// Label shown for blank input.
pub const EMPTY_INPUT_LABEL: &str = "Ingrese una jugada";
/// Label shown for a bare single digit.
pub const SINGULACION_RANGE_LABEL: &str = "Singulación requiere rango (-1,-2,-3)";

/// Kind of expansion a notation asks for, without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    None,
    Combinations,
    NumericSequence,
    PairSequence,
    Plus100,
    RangeOffset,
}

/// Expansion requested by a notation, with its parameters.
///
/// Sequence bounds are kept as typed (zero-padded digit strings) so that the
/// generator can check their width against the bet type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Generator {
    #[default]
    None,
    Combinations,
    NumericSequence { start: String, end: String },
    PairSequence { start: String, end: String },
    Plus100,
    RangeOffset { count: u8 },
}

impl Generator {
    #[must_use]
    pub const fn kind(&self) -> GeneratorKind {
        match self {
            Self::None => GeneratorKind::None,
            Self::Combinations => GeneratorKind::Combinations,
            Self::NumericSequence { .. } => GeneratorKind::NumericSequence,
            Self::PairSequence { .. } => GeneratorKind::PairSequence,
            Self::Plus100 => GeneratorKind::Plus100,
            Self::RangeOffset { .. } => GeneratorKind::RangeOffset,
        }
    }
}

/// Why an input was not classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Blank or whitespace-only input.
    EmptyInput,
    /// A single digit typed without its Singulación range.
    MissingRange,
    /// No rule matched.
    InvalidFormat,
}

impl Rejection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmptyInput => EMPTY_INPUT_LABEL,
            Self::MissingRange => SINGULACION_RANGE_LABEL,
            Self::InvalidFormat => INVALID_FORMAT_LABEL,
        }
    }
}

/// Outcome of classifying one typed notation.
///
/// Invariants (upheld by the constructors):
/// - `is_valid == false` ⇒ `bet_type`, `section` are `None`, `generator` is
///   [`Generator::None`] and `rejection` is set.
/// - `is_valid == true` ⇒ `core_digits` is all ASCII digits, with the length
///   of `bet_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_valid: bool,
    pub bet_type: Option<BetType>,
    pub section: Option<Section>,
    pub generator: Generator,
    /// Numeric payload with modifiers stripped. For sequences, the start bound.
    pub core_digits: String,
    /// Text echoed to the operator; never used for logic.
    pub display_label: String,
    pub rejection: Option<Rejection>,
}

impl Classification {
    pub(crate) fn valid(
        bet_type: BetType,
        generator: Generator,
        core_digits: &str,
        display_label: &str,
    ) -> Self {
        Self {
            is_valid: true,
            bet_type: Some(bet_type),
            section: Some(bet_type.section()),
            generator,
            core_digits: core_digits.to_string(),
            display_label: display_label.to_string(),
            rejection: None,
        }
    }

    pub(crate) fn rejected(rejection: Rejection) -> Self {
        Self {
            is_valid: false,
            bet_type: None,
            section: None,
            generator: Generator::None,
            core_digits: String::new(),
            display_label: rejection.label().to_string(),
            rejection: Some(rejection),
        }
    }

    #[must_use]
    pub const fn generator_kind(&self) -> GeneratorKind {
        self.generator.kind()
    }
}

/// One concrete play number ready to become a ticket line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedLine {
    pub play_number: String,
}

impl GeneratedLine {
    pub(crate) fn padded(value: u32, width: usize) -> Self {
        Self {
            play_number: format!("{value:0width$}"),
        }
    }
}

impl core::fmt::Display for GeneratedLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.play_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_classification_carries_no_generator() {
        let c = Classification::rejected(Rejection::InvalidFormat);
        assert!(!c.is_valid);
        assert_eq!(c.bet_type, None);
        assert_eq!(c.section, None);
        assert_eq!(c.generator_kind(), GeneratorKind::None);
        assert_eq!(c.display_label, "Formato no válido");
    }

    #[test]
    fn valid_classification_derives_section() {
        let c = Classification::valid(
            BetType::Bolita,
            Generator::RangeOffset { count: 1 },
            "98",
            "Bolita Rango 1",
        );
        assert_eq!(c.section, Some(Section::Cash3));
        assert_eq!(c.generator_kind(), GeneratorKind::RangeOffset);
    }

    #[test]
    fn padded_line_keeps_leading_zeros() {
        assert_eq!(GeneratedLine::padded(7, 3).play_number, "007");
        assert_eq!(GeneratedLine::padded(0, 2).to_string(), "00");
    }

    #[test]
    fn generator_serializes_with_kind_tag() {
        let json = serde_json::to_value(Generator::PairSequence {
            start: "12".to_string(),
            end: "34".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "pair_sequence");
        assert_eq!(json["start"], "12");
    }
}
