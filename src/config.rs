use std::ops::Range;

use crate::error::{AppError, Result};

/// Variation records emitted after the primary keyword. A non-empty query
/// therefore always yields a batch of exactly `1 + VARIATIONS_PER_BATCH`.
pub const VARIATIONS_PER_BATCH: usize = 7;

/// Base monthly search volume drawn once per generation run and shared by
/// every record in the batch, so variations stay metrics-comparable.
pub const BASE_VOLUME: Range<u32> = 5_000..20_000;

/// Multiplicative jitter on search volume.
pub const VOLUME_JITTER: Range<f64> = 0.5..1.0;

/// Multiplicative jitter on difficulty, applied before the 0–100 clamp.
pub const DIFFICULTY_JITTER: Range<f64> = 0.7..1.3;

/// Multiplicative jitter on CPC.
pub const CPC_JITTER: Range<f64> = 0.8..1.2;

/// Google Shopping result count as a multiple of search volume.
pub const SHOPPING_RESULTS_JITTER: Range<f64> = 2.0..5.0;

/// MercadoLibre result count as a fraction of the Google Shopping count.
pub const MARKETPLACE_RESULTS_JITTER: Range<f64> = 0.3..0.7;

/// Each word beyond the first cuts expected volume by this fraction.
pub const VOLUME_WORD_PENALTY: f64 = 0.3;

/// Floor on the volume multiplier for very long keywords.
pub const VOLUME_MULTIPLIER_FLOOR: f64 = 0.1;

/// Difficulty skeleton: BASE + PER_CHAR * chars + PER_WORD * words, capped
/// at CEILING before jitter.
pub const DIFFICULTY_BASE: u32 = 30;
pub const DIFFICULTY_PER_CHAR: u32 = 2;
pub const DIFFICULTY_PER_WORD: u32 = 10;
pub const DIFFICULTY_CEILING: u32 = 90;

/// CPC skeleton in USD: BASE + (difficulty / 100) * DIFFICULTY_WEIGHT.
pub const CPC_BASE: f64 = 1.5;
pub const CPC_DIFFICULTY_WEIGHT: f64 = 3.0;

/// Trend index band for the primary keyword.
pub const PRIMARY_TREND: Range<u8> = 80..120;

/// Trend index band for variation records.
pub const VARIATION_TREND: Range<u8> = 60..120;

/// Related-keyword suggestions attached to each record, at most.
pub const RELATED_KEYWORDS_MAX: usize = 4;

/// Competition tier cutoffs over difficulty.
pub mod difficulty_thresholds {
    pub const LOW_MAX: u8 = 40;
    pub const MEDIUM_MAX: u8 = 70;
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub api_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .map_err(|_| {
                    AppError::Config("API_PORT must be a valid port number".to_string())
                })?,
        })
    }
}
