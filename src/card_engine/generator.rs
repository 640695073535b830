use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

use crate::card_engine::{
    arranger::arrange,
    config::GeneratorConfig,
    error::{EngineError, Result},
    models::{Series, SeriesRequest},
    pool::{self, CARDS_PER_SERIES, NUMBERS_PER_CARD, POOL_SIZE},
    shuffle::shuffle,
    validator::{validate, validate_series, ValidationResult},
};

/// Generate series `series_number` with the default configuration.
pub fn generate_series<R: Rng + ?Sized>(series_number: u32, rng: &mut R) -> Result<Series> {
    generate_series_with(series_number, rng, &GeneratorConfig::default())
}

/// Shuffle, deal and arrange until a partition fits, up to
/// `config.max_attempts` times. The result has passed [`validate`] and
/// [`validate_series`].
pub fn generate_series_with<R: Rng + ?Sized>(
    series_number: u32,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Series> {
    if series_number == 0 {
        return Err(EngineError::invalid("series number must be at least 1"));
    }
    config.validate()?;

    let numbers = pool::all_numbers();

    for attempt in 1..=config.max_attempts {
        let order = shuffle(&numbers, rng);
        match deal_series(&order, series_number) {
            Ok(series) => {
                self_check(&series)?;
                info!(series_number, attempts = attempt, "series generated");
                return Ok(series);
            }
            Err(EngineError::StructuralConflict { card_number, column, count }) => {
                debug!(
                    series_number,
                    attempt, card_number, column, count, "partition not arrangeable, reshuffling"
                );
            }
            Err(e) => return Err(e),
        }
    }

    warn!(series_number, attempts = config.max_attempts, "series generation exhausted");
    Err(EngineError::GenerationExhausted { attempts: config.max_attempts })
}

/// Entry point for callers that do not hold an RNG: seeds a ChaCha8 stream
/// from `request.rng_seed`, or from entropy when it is `None`.
pub fn generate(request: SeriesRequest) -> Result<Series> {
    let mut rng = match request.rng_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None       => ChaCha8Rng::from_entropy(),
    };
    generate_series_with(request.series_number, &mut rng, &request.config)
}

/// Deal a full 90-number order into six cards of fifteen, in order, and
/// arrange each one. No retry and no self-check; a partition that cannot
/// be arranged surfaces as `StructuralConflict`.
pub fn deal_series(order: &[u8], series_number: u32) -> Result<Series> {
    if order.len() != POOL_SIZE as usize {
        return Err(EngineError::invalid(format!(
            "a series deals {} numbers, got {}",
            POOL_SIZE,
            order.len()
        )));
    }

    let cards = order
        .chunks(NUMBERS_PER_CARD)
        .zip(1..=CARDS_PER_SERIES as u8)
        .map(|(block, card_number)| arrange(block, card_number, series_number))
        .collect::<Result<Vec<_>>>()?;

    Ok(Series { series_number, cards })
}

fn self_check(series: &Series) -> Result<()> {
    let mut result = ValidationResult::default();
    for card in &series.cards {
        result.extend(validate(card));
    }
    result.extend(validate_series(series));

    if !result.is_ok() {
        error!(series_number = series.series_number, %result, "generated series failed self-check");
    }
    result.into_result()
}
