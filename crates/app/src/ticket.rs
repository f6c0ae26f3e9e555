//! Ticket-entry workflow.
//!
//! Turns what the operator types into pending ticket lines: classify, check
//! the draw, expand, then apply the configured line cap. No line is produced
//! when any step fails.

use lottery_engine::{
    BetType, Classification, MAX_GENERATED_LINES, Section, classify, generate_lines,
    is_compatible,
};

use crate::{
    error::{AppError, Result},
    settings::{Overflow, Ticket},
};

/// Cap on the lines one entry may add to a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePolicy {
    max_lines: usize,
    overflow: Overflow,
}

impl LinePolicy {
    /// `max_lines` is clamped to `1..=MAX_GENERATED_LINES`.
    pub fn new(max_lines: usize, overflow: Overflow) -> Self {
        Self {
            max_lines: max_lines.clamp(1, MAX_GENERATED_LINES),
            overflow,
        }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
}

impl From<Ticket> for LinePolicy {
    fn from(ticket: Ticket) -> Self {
        Self::new(ticket.max_lines, ticket.overflow)
    }
}

/// A play number waiting for an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLine {
    pub play_number: String,
    pub bet_type: BetType,
    pub section: Section,
}

/// Result of one accepted entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub input: String,
    pub classification: Classification,
    pub lines: Vec<PendingLine>,
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TicketEntry {
    policy: LinePolicy,
}

impl TicketEntry {
    pub fn new(policy: LinePolicy) -> Self {
        Self { policy }
    }

    /// Processes one typed notation, optionally checked against a draw.
    pub fn enter(&self, raw: &str, draw: Option<&str>) -> Result<Entry> {
        let input = raw.trim().to_string();
        let classification = classify(&input);

        let Some(bet_type) = classification.bet_type.filter(|_| classification.is_valid) else {
            tracing::warn!("rejected notation {input:?}: {}", classification.display_label);
            return Err(AppError::Rejected {
                input,
                label: classification.display_label,
            });
        };

        if let Some(draw) = draw
            && !is_compatible(bet_type, draw)
        {
            tracing::warn!("{} not sold on draw {draw:?}", bet_type.code());
            return Err(AppError::IncompatibleDraw {
                bet_type: bet_type.code().to_string(),
                draw: draw.to_string(),
            });
        }

        let mut generated = generate_lines(&classification)?;
        tracing::debug!(
            "{input:?} classified as {} ({:?}), {} line(s)",
            bet_type.code(),
            classification.generator_kind(),
            generated.len()
        );

        let mut truncated = false;
        if generated.len() > self.policy.max_lines {
            match self.policy.overflow {
                Overflow::Reject => {
                    tracing::warn!(
                        "{input:?} expands to {} lines, cap is {}",
                        generated.len(),
                        self.policy.max_lines
                    );
                    return Err(AppError::TooManyLines {
                        input,
                        lines: generated.len(),
                        cap: self.policy.max_lines,
                    });
                }
                Overflow::Truncate => {
                    tracing::warn!(
                        "{input:?} truncated from {} to {} lines",
                        generated.len(),
                        self.policy.max_lines
                    );
                    generated.truncate(self.policy.max_lines);
                    truncated = true;
                }
            }
        }

        let section = bet_type.section();
        let lines = generated
            .into_iter()
            .map(|line| PendingLine {
                play_number: line.play_number,
                bet_type,
                section,
            })
            .collect();

        Ok(Entry {
            input,
            classification,
            lines,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use lottery_engine::GenerationFault;

    use super::*;

    fn entry(max_lines: usize, overflow: Overflow) -> TicketEntry {
        TicketEntry::new(LinePolicy::new(max_lines, overflow))
    }

    fn numbers(entry: &Entry) -> Vec<&str> {
        entry.lines.iter().map(|l| l.play_number.as_str()).collect()
    }

    #[test]
    fn accepted_entry_routes_lines_to_section() {
        let accepted = entry(720, Overflow::Reject).enter(" 98+2 ", None).unwrap();
        assert_eq!(accepted.input, "98+2");
        assert_eq!(numbers(&accepted), ["98", "99", "00"]);
        assert!(accepted.lines.iter().all(|l| l.bet_type == BetType::Bolita));
        assert!(accepted.lines.iter().all(|l| l.section == Section::Cash3));
        assert!(!accepted.truncated);
    }

    #[test]
    fn invalid_notation_is_rejected_with_its_label() {
        let err = entry(720, Overflow::Reject).enter("7", None).unwrap_err();
        match err {
            AppError::Rejected { input, label } => {
                assert_eq!(input, "7");
                assert_eq!(label, "Singulación requiere rango (-1,-2,-3)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn incompatible_draw_is_rejected() {
        let err = entry(720, Overflow::Reject)
            .enter("123+", Some("LOTEKA"))
            .unwrap_err();
        assert!(matches!(err, AppError::IncompatibleDraw { .. }));

        let ok = entry(720, Overflow::Reject)
            .enter("123+", Some("NEW YORK NIGHT"))
            .unwrap();
        assert_eq!(numbers(&ok), ["123"]);
    }

    #[test]
    fn generation_faults_propagate() {
        let err = entry(720, Overflow::Reject).enter("999+124", None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Generation(GenerationFault::InvertedRange { .. })
        ));
    }

    #[test]
    fn cap_rejects_by_default() {
        let err = entry(5, Overflow::Reject).enter("123q", None).unwrap_err();
        match err {
            AppError::TooManyLines { lines, cap, .. } => {
                assert_eq!(lines, 6);
                assert_eq!(cap, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cap_can_truncate_keeping_order() {
        let accepted = entry(2, Overflow::Truncate).enter("123q", None).unwrap();
        assert_eq!(numbers(&accepted), ["123", "132"]);
        assert!(accepted.truncated);
    }

    #[test]
    fn policy_is_clamped() {
        assert_eq!(LinePolicy::new(0, Overflow::Reject).max_lines(), 1);
        assert_eq!(
            LinePolicy::new(10_000, Overflow::Reject).max_lines(),
            MAX_GENERATED_LINES
        );
        let full = entry(10_000, Overflow::Reject).enter("123456.", None).unwrap();
        assert_eq!(full.lines.len(), MAX_GENERATED_LINES);
    }
}
