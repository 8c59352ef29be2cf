use rand::Rng;

use crate::config::{
    CPC_BASE, CPC_DIFFICULTY_WEIGHT, CPC_JITTER, DIFFICULTY_BASE, DIFFICULTY_CEILING,
    DIFFICULTY_JITTER, DIFFICULTY_PER_CHAR, DIFFICULTY_PER_WORD, MARKETPLACE_RESULTS_JITTER,
    SHOPPING_RESULTS_JITTER, VOLUME_JITTER, VOLUME_MULTIPLIER_FLOOR, VOLUME_WORD_PENALTY,
};
use crate::types::{CompetitionTier, KeywordMetrics};

/// Derives the full synthetic metric set for one keyword string.
///
/// The skeleton is formulaic; all variance comes from five independent
/// bounded uniform draws on `rng`, so a caller that fixes the source gets
/// reproducible output.
pub fn compute_metrics<R: Rng>(keyword: &str, base_volume: u32, rng: &mut R) -> KeywordMetrics {
    let word_count = keyword.split_whitespace().count() as u32;
    let char_count = keyword.chars().count() as u32;

    // Longer tails trade volume for lower competition.
    let search_volume = (base_volume as f64
        * volume_multiplier(word_count)
        * rng.gen_range(VOLUME_JITTER))
    .floor() as u32;

    let base_difficulty = (DIFFICULTY_BASE
        + DIFFICULTY_PER_CHAR * char_count
        + DIFFICULTY_PER_WORD * word_count)
        .min(DIFFICULTY_CEILING);
    // Jitter can push past the ceiling (90 * 1.3), hence the clamp.
    let difficulty = (base_difficulty as f64 * rng.gen_range(DIFFICULTY_JITTER))
        .floor()
        .clamp(0.0, 100.0) as u8;

    let base_cpc = CPC_BASE + (difficulty as f64 / 100.0) * CPC_DIFFICULTY_WEIGHT;
    let cpc = round2(base_cpc * rng.gen_range(CPC_JITTER));

    let competition = CompetitionTier::from_difficulty(difficulty);

    let google_shopping_results =
        (search_volume as f64 * rng.gen_range(SHOPPING_RESULTS_JITTER)).floor() as u32;
    let mercadolibre_results =
        (google_shopping_results as f64 * rng.gen_range(MARKETPLACE_RESULTS_JITTER)).floor() as u32;

    KeywordMetrics {
        search_volume,
        difficulty,
        cpc,
        competition,
        google_shopping_results,
        mercadolibre_results,
    }
}

/// `max(FLOOR, 1 - (words - 1) * PENALTY)` — one word keeps full volume,
/// each extra word cuts it by 30%, floored at 0.1.
pub fn volume_multiplier(word_count: u32) -> f64 {
    (1.0 - word_count.saturating_sub(1) as f64 * VOLUME_WORD_PENALTY).max(VOLUME_MULTIPLIER_FLOOR)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
