//! Line generator.
//!
//! Expands a valid [`Classification`] into the play numbers that become
//! separate ticket lines. Every generator yields at least one line, every line
//! has the digit length of the bet type, and no play number repeats.

use crate::{Classification, GeneratedLine, GenerationFault, Generator, util::is_digits};

/// Upper bound on the lines a single notation can expand to (`6!`, the
/// combinations of a Tripleta).
pub const MAX_GENERATED_LINES: usize = 720;

type ResultGeneration<T> = Result<T, GenerationFault>;

/// Expands a classification into concrete play numbers.
///
/// - `None`: the core digits, unchanged.
/// - `Combinations`: every distinct ordering of the core digits, ascending.
/// - `NumericSequence` / `PairSequence`: every number between the bounds,
///   inclusive, ascending. An end bound lower than the start bound is an
///   [`GenerationFault::InvertedRange`].
/// - `Plus100`: the number and the number plus 100, wrapping past 999.
/// - `RangeOffset`: the number and the next `count` numbers, wrapping past the
///   largest value of its length.
///
/// The output is deterministic: the same classification always yields the
/// same lines in the same order.
///
/// ```rust
/// use lottery_engine::{classify, generate_lines};
///
/// let lines = generate_lines(&classify("98+2")).unwrap();
/// let numbers: Vec<_> = lines.iter().map(|l| l.play_number.as_str()).collect();
/// assert_eq!(numbers, ["98", "99", "00"]);
/// ```
pub fn generate_lines(classification: &Classification) -> ResultGeneration<Vec<GeneratedLine>> {
    if !classification.is_valid {
        return Err(GenerationFault::PreconditionViolation(format!(
            "cannot expand an invalid classification ({})",
            classification.display_label
        )));
    }
    let bet_type = classification.bet_type.ok_or_else(|| {
        GenerationFault::PreconditionViolation("valid classification without bet type".to_string())
    })?;
    let width = bet_type.digits();
    let core = classification.core_digits.as_str();
    let base = parse_payload(core, width, "core digits")?;

    match &classification.generator {
        Generator::None => Ok(vec![GeneratedLine {
            play_number: core.to_string(),
        }]),
        Generator::Combinations => Ok(permutations(core)),
        Generator::NumericSequence { start, end } | Generator::PairSequence { start, end } => {
            sequence(start, end, width)
        }
        Generator::Plus100 => {
            if width != 3 {
                return Err(GenerationFault::PreconditionViolation(format!(
                    "+100 needs a 3 digit number, {bet_type} has {width}"
                )));
            }
            Ok(vec![
                GeneratedLine::padded(base, width),
                GeneratedLine::padded((base + 100) % 1000, width),
            ])
        }
        Generator::RangeOffset { count } => offsets(base, *count, width),
    }
}

fn parse_payload(value: &str, width: usize, label: &str) -> ResultGeneration<u32> {
    if value.len() != width || !is_digits(value) {
        return Err(GenerationFault::PreconditionViolation(format!(
            "{label} \"{value}\" must be {width} digits"
        )));
    }
    value.parse().map_err(|_| {
        GenerationFault::PreconditionViolation(format!("{label} \"{value}\" is not a number"))
    })
}

/// Distinct orderings of `digits`, in ascending order.
fn permutations(digits: &str) -> Vec<GeneratedLine> {
    let mut current: Vec<u8> = digits.bytes().collect();
    current.sort_unstable();

    let mut lines = Vec::new();
    loop {
        lines.push(GeneratedLine {
            play_number: current.iter().map(|&b| char::from(b)).collect(),
        });
        if !next_permutation(&mut current) {
            break;
        }
    }
    lines
}

/// Rearranges `digits` into the next greater ordering. Returns `false` once
/// the last ordering has been reached. Repeated digits are only visited once.
fn next_permutation(digits: &mut [u8]) -> bool {
    let Some(pivot) = digits.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    let pivot_value = digits[pivot];
    let Some(successor) = digits.iter().rposition(|&d| d > pivot_value) else {
        return false;
    };
    digits.swap(pivot, successor);
    digits[pivot + 1..].reverse();
    true
}

fn sequence(start: &str, end: &str, width: usize) -> ResultGeneration<Vec<GeneratedLine>> {
    let first = parse_payload(start, width, "sequence start")?;
    let last = parse_payload(end, width, "sequence end")?;
    if last < first {
        return Err(GenerationFault::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((first..=last)
        .map(|value| GeneratedLine::padded(value, width))
        .collect())
}

fn offsets(base: u32, count: u8, width: usize) -> ResultGeneration<Vec<GeneratedLine>> {
    let modulus = 10u32.pow(width as u32);
    if u32::from(count) >= modulus {
        return Err(GenerationFault::PreconditionViolation(format!(
            "range of {count} does not fit in {width} digit numbers"
        )));
    }
    Ok((0..=u32::from(count))
        .map(|step| GeneratedLine::padded((base + step) % modulus, width))
        .collect())
}
