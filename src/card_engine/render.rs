//! Plain-text rendering of cards for logs, terminals and support tooling.
//!
//! Each of the five boxed columns shows its low and high lane side by side,
//! blanks as spaces:
//!
//! ```text
//! Card 1 (Series 1)
//! ┌───────┬───────┬───────┬───────┬───────┐
//! │  1    │ 11 61 │       │ 31    │ 41    │
//! ├───────┼───────┼───────┼───────┼───────┤
//! ...
//! ```

use crate::card_engine::{
    models::Card,
    pool::{LANES, VISUAL_COLUMNS},
};

const CELL_WIDTH: usize = 7;

fn border(left: &str, mid: &str, right: &str) -> String {
    let segment = "─".repeat(CELL_WIDTH);
    let inner = vec![segment; VISUAL_COLUMNS].join(mid);
    format!("{left}{inner}{right}\n")
}

/// Boxed table headed `Card {n} (Series {s})`.
pub fn render_card(card: &Card) -> String {
    let mut out = format!("Card {} (Series {})\n", card.card_number, card.series);
    out.push_str(&border("┌", "┬", "┐"));

    for (i, row) in card.grid.rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&border("├", "┼", "┤"));
        }
        out.push('│');
        for pair in row.chunks(LANES) {
            out.push_str(&format!(" {} {} │", pair[0], pair[1]));
        }
        out.push('\n');
    }

    out.push_str(&border("└", "┴", "┘"));
    out
}
