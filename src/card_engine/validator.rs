//! Structural checks for cards and series.
//!
//! Validation re-derives everything from the grid itself, so it works the
//! same for freshly generated cards and for cards loaded back from storage.
//! An invalid card is a normal outcome: both entry points return a
//! [`ValidationResult`] listing every [`Violation`] found, never an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card_engine::{
    error::{EngineError, Result},
    models::{Card, Series},
    pool::{self, CARDS_PER_SERIES, NUMBERS_PER_CARD, NUMBERS_PER_ROW, POOL_SIZE},
};

/// The structural rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Invariant {
    /// Exactly 15 numbers per card.
    NumberCount,
    /// No number twice on a card.
    Uniqueness,
    /// Numbers lie in 1..=90.
    Range,
    /// Numbers sit in the slot their range maps to.
    ColumnPlacement,
    /// Five numbers per row, card number 1..=6, series number ≥ 1.
    Bounds,
    /// The six cards of a series cover 1..=90 exactly once.
    Partition,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Invariant::NumberCount     => "number count",
            Invariant::Uniqueness      => "uniqueness",
            Invariant::Range           => "range",
            Invariant::ColumnPlacement => "column placement",
            Invariant::Bounds          => "bounds",
            Invariant::Partition       => "partition",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    NumberCount { found: usize },
    Duplicate { number: u8, occurrences: usize },
    OutOfRange { number: u8, row: usize, slot: usize },
    WrongColumn { number: u8, row: usize, slot: usize, expected_slot: usize },
    RowCount { row: usize, found: usize },
    CardNumberOutOfBounds { card_number: u8 },
    InvalidSeriesNumber,
    // Series-level
    CardCount { found: usize },
    DuplicateCardNumber { card_number: u8 },
    ForeignCard { card_number: u8, series: u32 },
    MissingNumber { number: u8 },
    RepeatedNumber { number: u8, occurrences: usize },
}

impl Violation {
    pub fn invariant(&self) -> Invariant {
        match self {
            Violation::NumberCount { .. } => Invariant::NumberCount,
            Violation::Duplicate { .. } => Invariant::Uniqueness,
            Violation::OutOfRange { .. } => Invariant::Range,
            Violation::WrongColumn { .. } => Invariant::ColumnPlacement,
            Violation::RowCount { .. }
            | Violation::CardNumberOutOfBounds { .. }
            | Violation::InvalidSeriesNumber => Invariant::Bounds,
            Violation::CardCount { .. }
            | Violation::DuplicateCardNumber { .. }
            | Violation::ForeignCard { .. }
            | Violation::MissingNumber { .. }
            | Violation::RepeatedNumber { .. } => Invariant::Partition,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NumberCount { found } =>
                write!(f, "card holds {} numbers, expected {}", found, NUMBERS_PER_CARD),
            Violation::Duplicate { number, occurrences } =>
                write!(f, "{} appears {} times", number, occurrences),
            Violation::OutOfRange { number, row, slot } =>
                write!(f, "{} at row {} slot {} is outside 1..={}", number, row, slot, POOL_SIZE),
            Violation::WrongColumn { number, row, slot, expected_slot } =>
                write!(f, "{} at row {} slot {} belongs in slot {}", number, row, slot, expected_slot),
            Violation::RowCount { row, found } =>
                write!(f, "row {} holds {} numbers, expected {}", row, found, NUMBERS_PER_ROW),
            Violation::CardNumberOutOfBounds { card_number } =>
                write!(f, "card number {} is outside 1..={}", card_number, CARDS_PER_SERIES),
            Violation::InvalidSeriesNumber =>
                write!(f, "series number must be at least 1"),
            Violation::CardCount { found } =>
                write!(f, "series holds {} cards, expected {}", found, CARDS_PER_SERIES),
            Violation::DuplicateCardNumber { card_number } =>
                write!(f, "card number {} is used more than once", card_number),
            Violation::ForeignCard { card_number, series } =>
                write!(f, "card {} belongs to series {}", card_number, series),
            Violation::MissingNumber { number } =>
                write!(f, "{} is on no card", number),
            Violation::RepeatedNumber { number, occurrences } =>
                write!(f, "{} is on {} cards", number, occurrences),
        }
    }
}

/// Outcome of a validation pass. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when some violation breaks `invariant`.
    pub fn breaks(&self, invariant: Invariant) -> bool {
        self.violations.iter().any(|v| v.invariant() == invariant)
    }

    /// `Ok(())` when valid, otherwise `ValidationFailure` carrying `self`.
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(EngineError::ValidationFailure(self))
        }
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn extend(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "ok");
        }
        let parts: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check one card on its own.
pub fn validate(card: &Card) -> ValidationResult {
    let mut result = ValidationResult::default();

    if card.series == 0 {
        result.push(Violation::InvalidSeriesNumber);
    }
    if card.card_number == 0 || card.card_number as usize > CARDS_PER_SERIES {
        result.push(Violation::CardNumberOutOfBounds { card_number: card.card_number });
    }

    let mut occurrences: BTreeMap<u8, usize> = BTreeMap::new();
    let mut found = 0usize;

    for (row, slot, number) in card.grid.numbered_cells() {
        found += 1;
        *occurrences.entry(number).or_default() += 1;

        let Some(expected_slot) = pool::expected_slot(number) else {
            result.push(Violation::OutOfRange { number, row, slot });
            continue;
        };
        if slot != expected_slot {
            result.push(Violation::WrongColumn { number, row, slot, expected_slot });
        }
    }

    if found != NUMBERS_PER_CARD {
        result.push(Violation::NumberCount { found });
    }

    for (&number, &count) in &occurrences {
        if count > 1 {
            result.push(Violation::Duplicate { number, occurrences: count });
        }
    }

    for (row, cells) in card.grid.rows.iter().enumerate() {
        let in_row = cells.iter().filter(|c| !c.is_blank()).count();
        if in_row != NUMBERS_PER_ROW {
            result.push(Violation::RowCount { row, found: in_row });
        }
    }

    result
}

/// Check the cross-card partition of a series.
///
/// Per-card structure is left to [`validate`]; this only looks at how the
/// cards fit together.
pub fn validate_series(series: &Series) -> ValidationResult {
    let mut result = ValidationResult::default();

    if series.series_number == 0 {
        result.push(Violation::InvalidSeriesNumber);
    }
    if series.cards.len() != CARDS_PER_SERIES {
        result.push(Violation::CardCount { found: series.cards.len() });
    }

    let mut card_numbers: BTreeMap<u8, usize> = BTreeMap::new();
    let mut counts = [0usize; POOL_SIZE as usize + 1];

    for card in &series.cards {
        *card_numbers.entry(card.card_number).or_default() += 1;
        if card.series != series.series_number {
            result.push(Violation::ForeignCard {
                card_number: card.card_number,
                series: card.series,
            });
        }
        for n in card.numbers() {
            if pool::in_pool(n) {
                counts[n as usize] += 1;
            }
        }
    }

    for (&card_number, &count) in &card_numbers {
        if count > 1 {
            result.push(Violation::DuplicateCardNumber { card_number });
        }
    }

    for number in 1..=POOL_SIZE {
        match counts[number as usize] {
            0 => result.push(Violation::MissingNumber { number }),
            1 => {}
            occurrences => result.push(Violation::RepeatedNumber { number, occurrences }),
        }
    }

    result
}
