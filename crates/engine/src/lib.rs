//! Bet-notation engine for the lottery point of sale.
//!
//! Cashiers enter bets in a dense shorthand (`123+`, `45.`, `12d34`, `778q`,
//! `3-1`, ...). The engine turns one typed entry into ticket lines in two
//! pure steps:
//!
//! 1. [`classify`] recognises the notation and returns a [`Classification`]
//!    (bet type, ticket section, generator and numeric payload). Unknown
//!    notation is reported as data, never as an error.
//! 2. [`generate_lines`] expands the classification into the concrete
//!    [`GeneratedLine`]s, one per play number.
//!
//! ```rust
//! use lottery_engine::{BetType, classify, generate_lines};
//!
//! let classification = classify("123+125");
//! assert_eq!(classification.bet_type, Some(BetType::Cash3Straight));
//!
//! let lines = generate_lines(&classification).unwrap();
//! assert_eq!(lines.len(), 3);
//! ```
//!
//! Neither step keeps state, performs I/O, or prices a bet; pricing, limits
//! and persistence belong to the caller.

pub use catalogue::{BetType, Section};
pub use classification::{
    Classification, EMPTY_INPUT_LABEL, GeneratedLine, Generator, GeneratorKind,
    INVALID_FORMAT_LABEL, Rejection, SINGULACION_RANGE_LABEL,
};
pub use classifier::classify;
pub use compat::{DrawCategory, is_compatible};
pub use error::{CatalogueError, GenerationFault};
pub use generator::{MAX_GENERATED_LINES, generate_lines};

mod catalogue;
mod classification;
mod classifier;
mod compat;
mod error;
mod generator;
mod util;
