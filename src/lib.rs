//! # bingo_series_gen
//!
//! Card generation and validation for 90-ball bingo.
//!
//! A *series* is six cards that together hold every number from 1 to 90
//! exactly once. Each card shows fifteen numbers on three rows, five per row,
//! and every number sits in the column its range belongs to. This crate
//! builds such series from an injected random source and checks cards and
//! series for structural damage.
//!
//! ## How it works
//!
//! 1. Shuffle 1..=90 with a Fisher-Yates shuffle driven by the caller's RNG.
//! 2. Deal the shuffled order into six blocks of fifteen.
//! 3. Arrange each block on its card. If some range lands more than three
//!    numbers on one card the partition cannot be laid out; reshuffle and try
//!    again, up to a configurable cap.
//! 4. Re-validate every card and the series as a whole before returning.
//!
//! ## Column layout
//!
//! Nine ranges (1–10, 11–20, …, 81–90) share five visual columns: range `k`
//! is shown in column `k % 5`, in the low lane for ranges 0–4 and the high
//! lane for ranges 5–8. A row is therefore ten slots wide, and a valid card
//! has fifteen numbers and fifteen blanks. See [`card_engine::pool`].
//!
//! ## Quick start
//!
//! ```rust
//! use bingo_series_gen::{generate, validate, validate_series, SeriesRequest};
//!
//! // Reproducible series from a seed:
//! let series = generate(SeriesRequest::seeded(1, 42)).unwrap();
//! assert!(validate_series(&series).is_ok());
//!
//! for card in &series.cards {
//!     assert!(validate(card).is_ok());
//!     println!("{card}");
//! }
//! ```
//!
//! With your own RNG:
//!
//! ```rust
//! use bingo_series_gen::generate_series;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let series = generate_series(12, &mut rng).unwrap();
//! assert_eq!(series.cards.len(), 6);
//! ```

pub mod card_engine;
pub mod record_adapter;

// Convenience re-exports so callers can use `bingo_series_gen::generate_series`
// directly without reaching into `card_engine::`.
pub use card_engine::{
    arrange, deal_series, generate, generate_series, generate_series_with, validate,
    validate_series, Card, Cell, EngineError, GeneratorConfig, Grid, Invariant, Result, Series,
    SeriesRequest, ValidationResult, Violation,
};
pub use record_adapter::{card_from_json, card_to_json, from_record, series_to_rows, to_record, CardRecord};

#[cfg(test)]
mod tests;
