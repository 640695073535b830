//! Places one card's fifteen numbers on the 3-row grid.
//!
//! Each number goes to the slot its range maps to (see [`pool`]). Rows are
//! balanced to five numbers each: ranges with the most numbers are placed
//! first, each into the rows with the most room left, and inside a range the
//! numbers run ascending from the top row down. As long as no range holds
//! more than three numbers this always fills every row exactly.
//!
//! [`pool`]: crate::card_engine::pool

use crate::card_engine::{
    error::{EngineError, Result},
    models::{Card, Cell, Grid},
    pool::{self, CARDS_PER_SERIES, LOGICAL_COLUMNS, NUMBERS_PER_CARD, NUMBERS_PER_ROW, ROWS},
};

/// Arrange `numbers` into card `card_number` of series `series_number`.
///
/// Fails with `InvalidArgument` for malformed input and with
/// `StructuralConflict` when a range holds more numbers than there are rows.
pub fn arrange(numbers: &[u8], card_number: u8, series_number: u32) -> Result<Card> {
    check_input(numbers, card_number, series_number)?;

    let mut columns: [Vec<u8>; LOGICAL_COLUMNS] = Default::default();
    for &n in numbers {
        if let Some(column) = pool::column(n) {
            columns[column].push(n);
        }
    }

    if let Some((column, members)) = columns.iter().enumerate().find(|(_, m)| m.len() > ROWS) {
        return Err(EngineError::StructuralConflict {
            card_number,
            column,
            count: members.len(),
        });
    }

    let mut order: Vec<usize> = (0..LOGICAL_COLUMNS).filter(|&c| !columns[c].is_empty()).collect();
    order.sort_by_key(|&c| (std::cmp::Reverse(columns[c].len()), c));

    let mut room = [NUMBERS_PER_ROW; ROWS];
    let mut grid = Grid::blank();

    for column in order {
        let members = &mut columns[column];
        members.sort_unstable();

        let mut rows: Vec<usize> = (0..ROWS).collect();
        rows.sort_by_key(|&r| (std::cmp::Reverse(room[r]), r));
        let mut chosen = rows[..members.len()].to_vec();
        chosen.sort_unstable();

        let slot = pool::slot_of(column);
        for (&row, &n) in chosen.iter().zip(members.iter()) {
            if room[row] == 0 {
                // Unreachable with every range capped at ROWS numbers.
                return Err(EngineError::StructuralConflict {
                    card_number,
                    column,
                    count: members.len(),
                });
            }
            room[row] -= 1;
            grid.set(row, slot, Cell::Number(n));
        }
    }

    Ok(Card { series: series_number, card_number, grid })
}

fn check_input(numbers: &[u8], card_number: u8, series_number: u32) -> Result<()> {
    if series_number == 0 {
        return Err(EngineError::invalid("series number must be at least 1"));
    }
    if numbers.len() != NUMBERS_PER_CARD {
        return Err(EngineError::invalid(format!(
            "a card takes {} numbers, got {}",
            NUMBERS_PER_CARD,
            numbers.len()
        )));
    }
    if card_number == 0 || card_number as usize > CARDS_PER_SERIES {
        return Err(EngineError::invalid(format!(
            "card number {} is outside 1..={}",
            card_number, CARDS_PER_SERIES
        )));
    }
    let mut seen = [false; pool::POOL_SIZE as usize + 1];
    for &n in numbers {
        if !pool::in_pool(n) {
            return Err(EngineError::invalid(format!("{} is outside 1..={}", n, pool::POOL_SIZE)));
        }
        if std::mem::replace(&mut seen[n as usize], true) {
            return Err(EngineError::invalid(format!("{} appears twice", n)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_engine::validator::validate;

    const CARD_ONE: [u8; 15] = [1, 2, 11, 12, 21, 22, 31, 32, 41, 42, 51, 52, 61, 71, 81];

    #[test]
    fn places_numbers_in_their_slots_with_five_per_row() {
        let card = arrange(&CARD_ONE, 1, 7).unwrap();
        assert_eq!(card.series, 7);
        assert_eq!(card.card_number, 1);
        for (_, slot, n) in card.grid.numbered_cells() {
            assert_eq!(Some(slot), pool::expected_slot(n), "{n} in wrong slot");
        }
        for row in &card.grid.rows {
            assert_eq!(row.iter().filter(|c| !c.is_blank()).count(), 5);
        }
        assert!(validate(&card).is_ok());
    }

    #[test]
    fn golden_layout() {
        let card = arrange(&CARD_ONE, 1, 1).unwrap();
        let expected = Grid::from_raw([
            [1, 0, 11, 61, 0, 0, 31, 0, 41, 0],
            [2, 51, 0, 0, 21, 71, 32, 0, 0, 0],
            [0, 52, 12, 0, 22, 0, 0, 81, 42, 0],
        ]);
        assert_eq!(card.grid, expected);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut reversed = CARD_ONE;
        reversed.reverse();
        assert_eq!(arrange(&CARD_ONE, 2, 1).unwrap(), arrange(&reversed, 2, 1).unwrap());
    }

    #[test]
    fn full_columns_fill_all_three_rows() {
        // Five ranges with three numbers each.
        let numbers = [1, 2, 3, 11, 12, 13, 21, 22, 23, 31, 32, 33, 41, 42, 43];
        let card = arrange(&numbers, 3, 1).unwrap();
        for slot in [0, 2, 4, 6, 8] {
            assert!((0..3).all(|r| !card.grid.get(r, slot).is_blank()));
        }
        assert_eq!(card.grid.get(0, 0), Cell::Number(1));
        assert_eq!(card.grid.get(2, 0), Cell::Number(3));
        assert!(validate(&card).is_ok());
    }

    #[test]
    fn overfull_column_is_a_structural_conflict() {
        let numbers = [1, 2, 3, 4, 11, 12, 21, 22, 31, 32, 41, 42, 51, 61, 71];
        let err = arrange(&numbers, 4, 1).unwrap_err();
        assert!(
            matches!(err, EngineError::StructuralConflict { card_number: 4, column: 0, count: 4 }),
            "got {err:?}"
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(arrange(&CARD_ONE[..14], 1, 1), Err(EngineError::InvalidArgument { .. })));
        assert!(matches!(arrange(&CARD_ONE, 0, 1), Err(EngineError::InvalidArgument { .. })));
        assert!(matches!(arrange(&CARD_ONE, 7, 1), Err(EngineError::InvalidArgument { .. })));
        assert!(matches!(arrange(&CARD_ONE, 1, 0), Err(EngineError::InvalidArgument { .. })));

        let mut with_91 = CARD_ONE;
        with_91[14] = 91;
        assert!(matches!(arrange(&with_91, 1, 1), Err(EngineError::InvalidArgument { .. })));

        let mut with_dup = CARD_ONE;
        with_dup[14] = 1;
        assert!(matches!(arrange(&with_dup, 1, 1), Err(EngineError::InvalidArgument { .. })));
    }
}
