//! The module contains the errors the engine can return.
//!
//! Notation that does not match any rule is **not** an error: [`classify`]
//! reports it as data through [`Classification::rejection`]. The errors here
//! are:
//!
//! - [`GenerationFault`] returned by [`generate_lines`] when a classification
//!   cannot be expanded.
//! - [`CatalogueError`] returned when a bet-type code is not recognised.
//!
//!  [`classify`]: crate::classify
//!  [`generate_lines`]: crate::generate_lines
//!  [`Classification::rejection`]: crate::Classification::rejection
use thiserror::Error;

/// Faults raised while expanding a classification into lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFault {
    /// A sequence generator whose end bound is lower than its start bound.
    #[error("inverted range: {end} is lower than {start}")]
    InvertedRange { start: String, end: String },
    /// The caller asked to expand a classification that is not valid, or
    /// whose payload is inconsistent with its bet type.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// Bet-type catalogue errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("\"{0}\" is not a known bet type")]
    UnknownBetType(String),
}
