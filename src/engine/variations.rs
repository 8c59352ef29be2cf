use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::VARIATIONS_PER_BATCH;
use crate::types::Category;

/// Modifiers appended to every base keyword regardless of category.
const GENERIC_MODIFIERS: [&str; 8] = [
    "barato",
    "precio",
    "oferta",
    "original",
    "nuevo",
    "mercadolibre",
    "argentina",
    "envío gratis",
];

/// Builds the candidate pool of keyword variations for a base keyword and
/// selects a bounded random subset. Textually identical strings arising from
/// overlapping modifier tables are kept as-is; downstream only needs
/// non-empty keyword text.
pub struct VariationGenerator {
    category_modifiers: Vec<(Category, &'static [&'static str])>,
}

impl VariationGenerator {
    pub fn new() -> Self {
        Self {
            category_modifiers: vec![
                (
                    Category::Audio,
                    &[
                        "inalámbricos",
                        "bluetooth",
                        "cancelación ruido",
                        "gaming",
                        "deportivos",
                        "profesionales",
                        "alta calidad",
                        "batería larga",
                    ],
                ),
                (
                    Category::Mobile,
                    &[
                        "libre",
                        "5g",
                        "dual sim",
                        "cámara",
                        "128gb",
                        "pantalla",
                        "android",
                        "desbloqueado",
                    ],
                ),
                (
                    Category::Computing,
                    &[
                        "gamer", "ssd", "16gb ram", "intel", "amd", "nvidia", "ultrabook",
                        "trabajo",
                    ],
                ),
                (
                    Category::Footwear,
                    &[
                        "running",
                        "deportivas",
                        "hombre",
                        "mujer",
                        "originales",
                        "air",
                        "boost",
                        "casual",
                    ],
                ),
                (
                    Category::Watches,
                    &[
                        "deportivo",
                        "fitness",
                        "gps",
                        "sumergible",
                        "android",
                        "ios",
                        "salud",
                        "pantalla",
                    ],
                ),
            ],
        }
    }

    /// Full candidate pool: the 8 generic modifiers first, then the
    /// category-specific table. `General` has no table, so its pool is the
    /// generic entries only.
    pub fn pool(&self, base_keyword: &str, category: Category) -> Vec<String> {
        let mut pool: Vec<String> = GENERIC_MODIFIERS
            .iter()
            .map(|modifier| format!("{base_keyword} {modifier}"))
            .collect();

        if let Some((_, modifiers)) = self
            .category_modifiers
            .iter()
            .find(|(c, _)| *c == category)
        {
            pool.extend(modifiers.iter().map(|modifier| format!("{base_keyword} {modifier}")));
        }

        pool
    }

    /// Uniformly shuffles the pool and keeps the first
    /// `VARIATIONS_PER_BATCH` entries (all of them if the pool is smaller).
    pub fn select<R: Rng>(
        &self,
        base_keyword: &str,
        category: Category,
        rng: &mut R,
    ) -> Vec<String> {
        let mut pool = self.pool(base_keyword, category);
        pool.shuffle(rng);
        pool.truncate(VARIATIONS_PER_BATCH);
        pool
    }
}

impl Default for VariationGenerator {
    fn default() -> Self {
        Self::new()
    }
}
