//! Core card engine — number pool, shuffling, arrangement and validation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `pool`      | The 1..=90 pool, its nine ranges and the fixed slot mapping |
//! | `models`    | Shared types: cells, grids, cards, series, requests |
//! | `shuffle`   | Fisher-Yates shuffle over an injected RNG |
//! | `arranger`  | Places one card's fifteen numbers on the grid |
//! | `generator` | `generate_series()` — shuffle, deal, arrange, retry, self-check |
//! | `validator` | Card and series structural checks |
//! | `config`    | Generator settings (retry cap) |
//! | `error`     | `EngineError` and the crate `Result` alias |
//! | `render`    | Boxed plain-text rendering of a card |

pub mod arranger;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod pool;
pub mod render;
pub mod shuffle;
pub mod validator;

// Re-export the public API surface so callers can use
// `card_engine::generate_series` without reaching into sub-modules.
pub use arranger::arrange;
pub use config::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
pub use error::{EngineError, Result};
pub use generator::{deal_series, generate, generate_series, generate_series_with};
pub use models::{Card, Cell, Grid, Series, SeriesRequest};
pub use validator::{validate, validate_series, Invariant, ValidationResult, Violation};
