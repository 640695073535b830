//! The number pool and the fixed column mapping shared by the arranger and
//! the validator.
//!
//! ## Layout
//!
//! Numbers 1..=90 fall into nine logical columns of ten (`(n - 1) / 10`).
//! A card shows five visual columns; logical column `k` lives in visual
//! column `k % 5`. Each visual column has a *low* lane (logical 0..=4) and a
//! *high* lane (logical 5..=8), so a grid row has ten slots:
//!
//! | Slot | Visual column | Lane | Numbers |
//! |------|---------------|------|---------|
//! | 0    | 0             | low  | 1–10    |
//! | 1    | 0             | high | 51–60   |
//! | 2    | 1             | low  | 11–20   |
//! | 3    | 1             | high | 61–70   |
//! | 4    | 2             | low  | 21–30   |
//! | 5    | 2             | high | 71–80   |
//! | 6    | 3             | low  | 31–40   |
//! | 7    | 3             | high | 81–90   |
//! | 8    | 4             | low  | 41–50   |
//! | 9    | 4             | high | (never) |

/// Highest number in the pool.
pub const POOL_SIZE: u8 = 90;
/// Numbers per logical column.
pub const NUMBERS_PER_COLUMN: u8 = 10;
/// Logical columns (number ranges).
pub const LOGICAL_COLUMNS: usize = 9;
/// Columns a card displays.
pub const VISUAL_COLUMNS: usize = 5;
/// Lanes per visual column.
pub const LANES: usize = 2;
/// Slots per grid row.
pub const GRID_WIDTH: usize = VISUAL_COLUMNS * LANES;
/// Rows per card.
pub const ROWS: usize = 3;
/// Numbers per row of a well-formed card.
pub const NUMBERS_PER_ROW: usize = 5;
/// Numbers per card.
pub const NUMBERS_PER_CARD: usize = ROWS * NUMBERS_PER_ROW;
/// Cards per series.
pub const CARDS_PER_SERIES: usize = 6;

/// Half of a visual column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Low,
    High,
}

impl Lane {
    fn index(self) -> usize {
        match self {
            Lane::Low => 0,
            Lane::High => 1,
        }
    }
}

/// True for 1..=90.
pub fn in_pool(n: u8) -> bool {
    (1..=POOL_SIZE).contains(&n)
}

/// The ordered pool 1..=90.
pub fn all_numbers() -> Vec<u8> {
    (1..=POOL_SIZE).collect()
}

/// Logical column of `n`; `None` outside the pool.
pub fn column(n: u8) -> Option<usize> {
    in_pool(n).then(|| ((n - 1) / NUMBERS_PER_COLUMN) as usize)
}

/// Visual column hosting logical column `logical`.
pub const fn visual_column(logical: usize) -> usize {
    logical % VISUAL_COLUMNS
}

/// Lane hosting logical column `logical`.
pub const fn lane(logical: usize) -> Lane {
    if logical < VISUAL_COLUMNS {
        Lane::Low
    } else {
        Lane::High
    }
}

/// Grid slot (0..10) hosting logical column `logical`.
pub fn slot_of(logical: usize) -> usize {
    visual_column(logical) * LANES + lane(logical).index()
}

/// Inverse of [`slot_of`]; `None` for the slot no range maps to.
pub fn logical_at(slot: usize) -> Option<usize> {
    if slot >= GRID_WIDTH {
        return None;
    }
    let logical = (slot % LANES) * VISUAL_COLUMNS + slot / LANES;
    (logical < LOGICAL_COLUMNS).then_some(logical)
}

/// The only slot number `n` may occupy; `None` outside the pool.
pub fn expected_slot(n: u8) -> Option<usize> {
    column(n).map(slot_of)
}
