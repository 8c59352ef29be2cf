use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Product category resolved from a search query. `General` is the fallback
/// when no classifier rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Audio,
    Mobile,
    Computing,
    Footwear,
    Watches,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Audio => "audio",
            Category::Mobile => "mobile",
            Category::Computing => "computing",
            Category::Footwear => "footwear",
            Category::Watches => "watches",
            Category::General => "general",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Competition tier
// ---------------------------------------------------------------------------

/// Coarse competitiveness bucket, a pure function of difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionTier {
    /// difficulty < 40
    Low,
    /// difficulty 40–69
    Medium,
    /// difficulty >= 70
    High,
}

impl CompetitionTier {
    pub fn from_difficulty(difficulty: u8) -> Self {
        use crate::config::difficulty_thresholds::*;
        if difficulty < LOW_MAX {
            CompetitionTier::Low
        } else if difficulty < MEDIUM_MAX {
            CompetitionTier::Medium
        } else {
            CompetitionTier::High
        }
    }
}

impl std::fmt::Display for CompetitionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompetitionTier::Low => "low",
            CompetitionTier::Medium => "medium",
            CompetitionTier::High => "high",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Synthetic metric set produced for one keyword string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMetrics {
    /// Estimated monthly searches.
    pub search_volume: u32,
    /// Ranking competitiveness, 0–100.
    pub difficulty: u8,
    /// Cost per click in USD, 2-decimal precision.
    pub cpc: f64,
    pub competition: CompetitionTier,
    pub google_shopping_results: u32,
    pub mercadolibre_results: u32,
}

// ---------------------------------------------------------------------------
// KeywordRecord
// ---------------------------------------------------------------------------

/// One complete analysis result. Created fresh on every generation run and
/// never mutated afterwards; regenerating the same query may produce
/// different numeric values under the same structural bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Normalized keyword text, unique within one run.
    pub keyword: String,
    pub search_volume: u32,
    pub difficulty: u8,
    pub cpc: f64,
    pub competition: CompetitionTier,
    /// Seven relative daily index points. Display ordering only.
    pub trend: [u8; 7],
    /// Up to four category-derived related terms.
    pub related_keywords: Vec<String>,
    pub google_shopping_results: u32,
    pub mercadolibre_results: u32,
}

impl KeywordRecord {
    /// Blended 0–100 attractiveness metric. Recomputed on demand so it can
    /// never drift from the stored volume/difficulty pair.
    pub fn opportunity_score(&self) -> u8 {
        crate::engine::scorer::opportunity_score(self.search_volume, self.difficulty)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_at_40_and_70() {
        assert_eq!(CompetitionTier::from_difficulty(0), CompetitionTier::Low);
        assert_eq!(CompetitionTier::from_difficulty(39), CompetitionTier::Low);
        assert_eq!(CompetitionTier::from_difficulty(40), CompetitionTier::Medium);
        assert_eq!(CompetitionTier::from_difficulty(69), CompetitionTier::Medium);
        assert_eq!(CompetitionTier::from_difficulty(70), CompetitionTier::High);
        assert_eq!(CompetitionTier::from_difficulty(100), CompetitionTier::High);
    }

    #[test]
    fn opportunity_score_recomputes_from_stored_fields() {
        let record = KeywordRecord {
            keyword: "auriculares".to_string(),
            search_volume: 5_000,
            difficulty: 60,
            cpc: 2.10,
            competition: CompetitionTier::Medium,
            trend: [80; 7],
            related_keywords: vec![],
            google_shopping_results: 12_000,
            mercadolibre_results: 4_000,
        };
        // volume_score = 50, raw = 50 - 60 + 50 = 40
        assert_eq!(record.opportunity_score(), 40);
    }
}
