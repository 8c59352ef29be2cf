//! Keyword intelligence engine: category classification, variation
//! generation, synthetic metric derivation, opportunity scoring, and
//! related-term suggestion behind a single assembler.

mod classifier;
mod metrics;
mod related;
pub mod scorer;
mod variations;

use std::ops::Range;

use rand::Rng;

use crate::config::{BASE_VOLUME, PRIMARY_TREND, VARIATIONS_PER_BATCH, VARIATION_TREND};
use crate::types::{Category, KeywordRecord};

use classifier::CategoryClassifier;
use related::RelatedSuggester;
use variations::VariationGenerator;

/// Fixed starter queries surfaced by the dashboard search box.
const POPULAR_SUGGESTIONS: [&str; 8] = [
    "auriculares bluetooth",
    "smartphone samsung",
    "laptop gamer",
    "zapatillas nike",
    "reloj inteligente",
    "tablet android",
    "smart tv 55",
    "cámara digital",
];

/// Expands one free-text product query into an ordered batch of keyword
/// records: the normalized query first, then shuffled variations, all
/// sharing one base volume so metrics stay comparable within a run.
///
/// All lookup tables are immutable after construction; the engine holds no
/// per-call state, so one instance can serve concurrent callers.
pub struct KeywordEngine {
    classifier: CategoryClassifier,
    variations: VariationGenerator,
    suggester: RelatedSuggester,
}

impl KeywordEngine {
    pub fn new() -> Self {
        Self {
            classifier: CategoryClassifier::new(),
            variations: VariationGenerator::new(),
            suggester: RelatedSuggester::new(),
        }
    }

    /// Generates a batch with an ambient random source. See
    /// [`Self::generate_with`] for the injectable seam.
    pub fn generate(&self, query: &str) -> Vec<KeywordRecord> {
        self.generate_with(query, &mut rand::thread_rng())
    }

    /// Generates a batch drawing every random value from `rng`.
    ///
    /// A blank query yields an empty batch; any other input yields exactly
    /// `1 + VARIATIONS_PER_BATCH` records with the normalized query first.
    pub fn generate_with<R: Rng>(&self, query: &str, rng: &mut R) -> Vec<KeywordRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let category = self.classifier.classify(&query);
        let base_volume = rng.gen_range(BASE_VOLUME);

        let mut records = Vec::with_capacity(1 + VARIATIONS_PER_BATCH);
        records.push(self.build_record(&query, category, base_volume, PRIMARY_TREND, rng));

        for variation in self.variations.select(&query, category, rng) {
            records.push(self.build_record(&variation, category, base_volume, VARIATION_TREND, rng));
        }

        records
    }

    fn build_record<R: Rng>(
        &self,
        keyword: &str,
        category: Category,
        base_volume: u32,
        trend_band: Range<u8>,
        rng: &mut R,
    ) -> KeywordRecord {
        let m = metrics::compute_metrics(keyword, base_volume, rng);
        KeywordRecord {
            keyword: keyword.to_string(),
            search_volume: m.search_volume,
            difficulty: m.difficulty,
            cpc: m.cpc,
            competition: m.competition,
            trend: trend_points(trend_band, rng),
            related_keywords: self.suggester.related(keyword, category),
            google_shopping_results: m.google_shopping_results,
            mercadolibre_results: m.mercadolibre_results,
        }
    }

    pub fn popular_suggestions(&self) -> &'static [&'static str] {
        &POPULAR_SUGGESTIONS
    }

    pub fn rule_count(&self) -> usize {
        self.classifier.rule_count()
    }
}

impl Default for KeywordEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn trend_points<R: Rng>(band: Range<u8>, rng: &mut R) -> [u8; 7] {
    std::array::from_fn(|_| rng.gen_range(band.clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::types::CompetitionTier;

    #[test]
    fn blank_queries_yield_empty_batches() {
        let engine = KeywordEngine::new();
        assert!(engine.generate("").is_empty());
        assert!(engine.generate("   ").is_empty());
        assert!(engine.generate("\t\n").is_empty());
    }

    #[test]
    fn batch_is_eight_records_with_the_query_first() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(3);
        let batch = engine.generate_with("auriculares bluetooth", &mut rng);
        assert_eq!(batch.len(), 8);
        assert_eq!(batch[0].keyword, "auriculares bluetooth");
    }

    #[test]
    fn query_is_normalized_before_anything_else() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(3);
        let batch = engine.generate_with("  AURICULARES Gaming ", &mut rng);
        assert_eq!(batch[0].keyword, "auriculares gaming");
        // Normalization happens before classification, so the audio table
        // still applies and related terms are audio terms.
        assert_eq!(batch[0].related_keywords[0], "auriculares gaming sonido");
    }

    #[test]
    fn keywords_are_unique_within_a_batch() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(11);
        let batch = engine.generate_with("zapatillas", &mut rng);
        let mut keywords: Vec<&str> = batch.iter().map(|r| r.keyword.as_str()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), 8);
    }

    #[test]
    fn tiers_always_match_the_difficulty_thresholds() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(42);
        for query in ["auriculares", "laptop gamer", "xyz123", "reloj inteligente gps"] {
            for record in engine.generate_with(query, &mut rng) {
                assert!(record.difficulty <= 100);
                let expected = CompetitionTier::from_difficulty(record.difficulty);
                assert_eq!(record.competition, expected, "keyword={}", record.keyword);
            }
        }
    }

    #[test]
    fn opportunity_scores_stay_in_range() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        for record in engine.generate_with("celular libre", &mut rng) {
            assert!(record.opportunity_score() <= 100);
        }
    }

    #[test]
    fn primary_record_uses_the_higher_trend_band() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(5);
        let batch = engine.generate_with("notebook", &mut rng);
        for point in batch[0].trend {
            assert!((80..120).contains(&point), "primary trend point {point}");
        }
        for record in &batch[1..] {
            for point in record.trend {
                assert!((60..120).contains(&point), "variation trend point {point}");
            }
        }
    }

    #[test]
    fn every_record_carries_related_keywords() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(21);
        // Known category: 4 related terms per record, each prefixed with
        // that record's own keyword.
        for record in engine.generate_with("reloj", &mut rng) {
            assert_eq!(record.related_keywords.len(), 4);
            for related in &record.related_keywords {
                assert!(related.starts_with(&record.keyword));
            }
        }
        // Unknown category: the 3-term generic fallback.
        for record in engine.generate_with("xyz123", &mut rng) {
            assert_eq!(record.related_keywords.len(), 3);
        }
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        let engine = KeywordEngine::new();
        let a = engine.generate_with("laptop gamer", &mut StdRng::seed_from_u64(99));
        let b = engine.generate_with("laptop gamer", &mut StdRng::seed_from_u64(99));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.keyword, y.keyword);
            assert_eq!(x.search_volume, y.search_volume);
            assert_eq!(x.difficulty, y.difficulty);
            assert_eq!(x.trend, y.trend);
        }
    }

    #[test]
    fn popular_suggestions_are_stable() {
        let engine = KeywordEngine::new();
        let suggestions = engine.popular_suggestions();
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0], "auriculares bluetooth");
    }
}
