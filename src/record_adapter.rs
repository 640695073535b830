use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::card_engine::{
    error::{EngineError, Result},
    models::{Card, Grid, Series},
    pool::{GRID_WIDTH, ROWS},
};

/// A card as the application stores it: rows of numbers where `0` is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub series: u32,
    pub card_number: u8,
    pub numbers: Vec<Vec<u8>>,
}

/// Flatten a card into its storage shape.
pub fn to_record(card: &Card) -> CardRecord {
    CardRecord {
        series: card.series,
        card_number: card.card_number,
        numbers: card
            .grid
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.number().unwrap_or(0)).collect())
            .collect(),
    }
}

/// Rebuild a card from storage.
///
/// Only the shape (3 rows of 10) is checked here; run
/// [`validate`](crate::card_engine::validate) on the result to check the
/// card's structure.
pub fn from_record(record: &CardRecord) -> Result<Card> {
    if record.numbers.len() != ROWS {
        return Err(EngineError::invalid(format!(
            "stored card has {} rows, expected {}",
            record.numbers.len(),
            ROWS
        )));
    }

    let mut raw = [[0u8; GRID_WIDTH]; ROWS];
    for (row, (dst, src)) in raw.iter_mut().zip(&record.numbers).enumerate() {
        if src.len() != GRID_WIDTH {
            return Err(EngineError::invalid(format!(
                "stored row {} has {} cells, expected {}",
                row,
                src.len(),
                GRID_WIDTH
            )));
        }
        dst.copy_from_slice(src);
    }

    Ok(Card {
        series: record.series,
        card_number: record.card_number,
        grid: Grid::from_raw(raw),
    })
}

pub fn card_to_json(card: &Card) -> Result<String> {
    Ok(serde_json::to_string(&to_record(card))?)
}

pub fn card_from_json(text: &str) -> Result<Card> {
    let record: CardRecord = serde_json::from_str(text)?;
    from_record(&record)
}

/// One insert-ready row per card: grid as JSON text, no marks yet.
pub fn series_to_rows(series: &Series) -> Result<Vec<Value>> {
    series
        .cards
        .iter()
        .map(|card| -> Result<Value> {
            let record = to_record(card);
            Ok(json!({
                "series": record.series,
                "card_number": record.card_number,
                "numbers": serde_json::to_string(&record.numbers)?,
                "marked_numbers": "[]",
            }))
        })
        .collect()
}
