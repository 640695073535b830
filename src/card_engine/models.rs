use std::fmt;
use serde::{Deserialize, Serialize};

use crate::card_engine::{
    config::GeneratorConfig,
    pool::{GRID_WIDTH, ROWS},
    render,
};

// ---------------------------------------------------------------------------
// Grid primitives
// ---------------------------------------------------------------------------

/// One grid cell: a number or an explicit blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Blank,
    Number(u8),
}

impl Cell {
    pub fn number(self) -> Option<u8> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{:>2}", n),
            Cell::Blank => write!(f, "  "),
        }
    }
}

/// 3 rows × 10 slots (5 visual columns, two lanes each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: [[Cell; GRID_WIDTH]; ROWS],
}

impl Grid {
    /// All-blank grid.
    pub fn blank() -> Self {
        Grid { rows: [[Cell::Blank; GRID_WIDTH]; ROWS] }
    }

    /// Build from raw rows where `0` means blank.
    pub fn from_raw(raw: [[u8; GRID_WIDTH]; ROWS]) -> Self {
        let mut grid = Grid::blank();
        for (row, cells) in raw.iter().enumerate() {
            for (slot, &n) in cells.iter().enumerate() {
                if n != 0 {
                    grid.rows[row][slot] = Cell::Number(n);
                }
            }
        }
        grid
    }

    pub fn get(&self, row: usize, slot: usize) -> Cell {
        self.rows[row][slot]
    }

    pub fn set(&mut self, row: usize, slot: usize, cell: Cell) {
        self.rows[row][slot] = cell;
    }

    /// Every numbered cell as `(row, slot, number)`, row-major.
    pub fn numbered_cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(slot, cell)| cell.number().map(|n| (row, slot, n)))
        })
    }

    /// Numbers in row-major order.
    pub fn numbers(&self) -> Vec<u8> {
        self.numbered_cells().map(|(_, _, n)| n).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::blank()
    }
}

// ---------------------------------------------------------------------------
// Cards and series
// ---------------------------------------------------------------------------

/// One ticket. `series` is the owning series' number, not a pointer to it,
/// so a card can be stored and reloaded on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub series: u32,
    pub card_number: u8,
    pub grid: Grid,
}

impl Card {
    pub fn numbers(&self) -> Vec<u8> {
        self.grid.numbers()
    }

    pub fn contains(&self, n: u8) -> bool {
        self.grid.numbered_cells().any(|(_, _, x)| x == n)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render::render_card(self))
    }
}

/// Six cards partitioning 1..=90.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub series_number: u32,
    pub cards: Vec<Card>,
}

impl Series {
    pub fn card(&self, card_number: u8) -> Option<&Card> {
        self.cards.iter().find(|c| c.card_number == card_number)
    }

    /// Which card holds `n`, if any.
    pub fn card_holding(&self, n: u8) -> Option<&Card> {
        self.cards.iter().find(|c| c.contains(n))
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub series_number: u32,
    /// `Some(seed)` reproduces the exact same series; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub config: GeneratorConfig,
}

impl SeriesRequest {
    /// Entropy-seeded request with the default configuration.
    pub fn new(series_number: u32) -> Self {
        SeriesRequest {
            series_number,
            rng_seed: None,
            config: GeneratorConfig::default(),
        }
    }

    pub fn seeded(series_number: u32, seed: u64) -> Self {
        SeriesRequest {
            rng_seed: Some(seed),
            ..SeriesRequest::new(series_number)
        }
    }
}
