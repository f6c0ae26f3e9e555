//! Notation classifier.
//!
//! A cashier types a short string such as `123+`, `45.`, `12d34` or `3-1`.
//! [`classify`] walks an ordered rule table and the first rule that matches
//! decides the bet type and the generator. Order matters: `+` is a suffix of
//! `F+`/`B+` and of the Bolita ranges, and digit-length gates only apply once
//! a modifier has been stripped.

use crate::{BetType, Classification, Generator, Rejection, util::is_digits};

/// How a rule locates the numeric payload inside the trimmed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pattern {
    /// Input ends with the modifier; the payload is what precedes it.
    Suffix(&'static str),
    /// Two payloads around exactly one separator, which may not end the input.
    Between(char),
    /// No modifier; the whole input is the payload.
    Bare,
}

/// Expansion a matching rule attaches to the classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Expansion {
    Single,
    Combinations,
    NumericSequence,
    PairSequence,
    Plus100,
    Offset(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Bet {
        bet_type: BetType,
        expansion: Expansion,
        label: &'static str,
    },
    Reject(Rejection),
}

/// One row of the notation table: a pattern, the digit length every payload
/// must have, and what a match produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rule {
    pub(crate) pattern: Pattern,
    pub(crate) width: usize,
    pub(crate) outcome: Outcome,
}

const fn bet(
    pattern: Pattern,
    width: usize,
    bet_type: BetType,
    expansion: Expansion,
    label: &'static str,
) -> Rule {
    Rule {
        pattern,
        width,
        outcome: Outcome::Bet {
            bet_type,
            expansion,
            label,
        },
    }
}

const fn reject(pattern: Pattern, width: usize, rejection: Rejection) -> Rule {
    Rule {
        pattern,
        width,
        outcome: Outcome::Reject(rejection),
    }
}

use Expansion::{Combinations, NumericSequence, Offset, PairSequence, Plus100, Single};
use Pattern::{Bare, Between, Suffix};

/// Notation rules, evaluated top to bottom, first match wins.
pub(crate) const RULES: &[Rule] = &[
    // Generators.
    bet(Suffix("q"), 3, BetType::Cash3Straight, Combinations, "Cash3 Combinaciones"),
    bet(Suffix("q"), 4, BetType::Play4Straight, Combinations, "Play4 Combinaciones"),
    bet(Suffix("."), 2, BetType::Directo, Combinations, "Directo Combinaciones"),
    bet(Suffix("."), 4, BetType::Pale, Combinations, "Palé Combinaciones"),
    bet(Suffix("."), 6, BetType::Tripleta, Combinations, "Tripleta Combinaciones"),
    bet(Between('d'), 2, BetType::Directo, PairSequence, "Directo Secuencia"),
    bet(Suffix("-10"), 3, BetType::Cash3Straight, Plus100, "Cash3 +100"),
    bet(Between('+'), 3, BetType::Cash3Straight, NumericSequence, "Cash3 Secuencia"),
    // Position modifiers.
    bet(Suffix("F+"), 3, BetType::Cash3FrontBox, Single, "Cash3 Front Box"),
    bet(Suffix("F"), 3, BetType::Cash3FrontStraight, Single, "Cash3 Front Straight"),
    bet(Suffix("F"), 2, BetType::PickTwoFront, Single, "Pick Two Front"),
    bet(Suffix("B+"), 3, BetType::Cash3BackBox, Single, "Cash3 Back Box"),
    bet(Suffix("B"), 3, BetType::Cash3BackStraight, Single, "Cash3 Back Straight"),
    bet(Suffix("B"), 2, BetType::PickTwoBack, Single, "Pick Two Back"),
    // Range modifiers.
    bet(Suffix("+1"), 2, BetType::Bolita, Offset(1), "Bolita Rango 1"),
    bet(Suffix("+2"), 2, BetType::Bolita, Offset(2), "Bolita Rango 2"),
    bet(Suffix("-1"), 1, BetType::Singulacion, Offset(1), "Singulación Rango 1"),
    bet(Suffix("-2"), 1, BetType::Singulacion, Offset(2), "Singulación Rango 2"),
    bet(Suffix("-3"), 1, BetType::Singulacion, Offset(3), "Singulación Rango 3"),
    bet(Suffix("-3"), 2, BetType::PickTwoMiddle, Single, "Pick Two Middle"),
    // Box and straight modifiers.
    bet(Suffix("+"), 3, BetType::Cash3Box, Single, "Cash3 Box"),
    bet(Suffix("+"), 4, BetType::Play4Box, Single, "Play4 Box"),
    bet(Suffix("+"), 5, BetType::Pick5Box, Single, "Pick5 Box"),
    // Shared with Panamá; Play4 Straight is the default reading.
    bet(Suffix("-"), 4, BetType::Play4Straight, Single, "Play4 Straight"),
    bet(Suffix("-"), 5, BetType::Pick5Straight, Single, "Pick5 Straight"),
    // Plain numbers, by length.
    reject(Bare, 1, Rejection::MissingRange),
    // Shared with Pick Two; Directo is the default reading.
    bet(Bare, 2, BetType::Directo, Single, "Directo"),
    bet(Bare, 3, BetType::Cash3Straight, Single, "Cash3 Straight"),
    // Shared with Super Palé; Palé is the default reading.
    bet(Bare, 4, BetType::Pale, Single, "Palé"),
    bet(Bare, 6, BetType::Tripleta, Single, "Tripleta"),
];

impl Rule {
    /// Classification produced by this rule, or `None` if it does not match.
    pub(crate) fn apply(&self, input: &str) -> Option<Classification> {
        match self.pattern {
            Pattern::Suffix(modifier) => {
                let payload = input.strip_suffix(modifier)?;
                if !self.admits(payload) {
                    return None;
                }
                self.produce(payload, None)
            }
            Pattern::Between(separator) => {
                if input.ends_with(separator) {
                    return None;
                }
                let (start, end) = input.split_once(separator)?;
                if end.contains(separator) || !self.admits(start) || !self.admits(end) {
                    return None;
                }
                self.produce(start, Some(end))
            }
            Pattern::Bare => {
                if !self.admits(input) {
                    return None;
                }
                self.produce(input, None)
            }
        }
    }

    fn admits(&self, payload: &str) -> bool {
        payload.len() == self.width && is_digits(payload)
    }

    fn produce(&self, payload: &str, end: Option<&str>) -> Option<Classification> {
        let (bet_type, expansion, label) = match self.outcome {
            Outcome::Reject(rejection) => return Some(Classification::rejected(rejection)),
            Outcome::Bet {
                bet_type,
                expansion,
                label,
            } => (bet_type, expansion, label),
        };

        let generator = match expansion {
            Expansion::Single => Generator::None,
            Expansion::Combinations => Generator::Combinations,
            Expansion::Plus100 => Generator::Plus100,
            Expansion::Offset(count) => Generator::RangeOffset { count },
            Expansion::NumericSequence => Generator::NumericSequence {
                start: payload.to_string(),
                end: end?.to_string(),
            },
            Expansion::PairSequence => Generator::PairSequence {
                start: payload.to_string(),
                end: end?.to_string(),
            },
        };
        Some(Classification::valid(bet_type, generator, payload, label))
    }
}

/// Classifies a typed notation.
///
/// Leading and trailing whitespace is ignored. Never fails: input that no
/// rule accepts comes back with `is_valid == false` and a label for the
/// operator.
///
/// ```rust
/// use lottery_engine::{BetType, GeneratorKind, classify};
///
/// let c = classify("123+");
/// assert_eq!(c.bet_type, Some(BetType::Cash3Box));
///
/// let c = classify("98+2");
/// assert_eq!(c.bet_type, Some(BetType::Bolita));
/// assert_eq!(c.generator_kind(), GeneratorKind::RangeOffset);
///
/// assert!(!classify("12345678").is_valid);
/// ```
#[must_use]
pub fn classify(raw: &str) -> Classification {
    let input = raw.trim();
    if input.is_empty() {
        return Classification::rejected(Rejection::EmptyInput);
    }

    RULES
        .iter()
        .find_map(|rule| rule.apply(input))
        .unwrap_or_else(|| Classification::rejected(Rejection::InvalidFormat))
}
