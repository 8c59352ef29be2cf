use crate::config::RELATED_KEYWORDS_MAX;
use crate::types::Category;

/// Fallback terms for queries with no category table.
const GENERIC_RELATED: [&str; 3] = ["producto", "calidad", "precio"];

/// Produces a short list of semantically related terms for a keyword by
/// appending the first few entries of its category's term table.
pub struct RelatedSuggester {
    category_terms: Vec<(Category, &'static [&'static str])>,
}

impl RelatedSuggester {
    pub fn new() -> Self {
        Self {
            category_terms: vec![
                (
                    Category::Audio,
                    &["sonido", "música", "audio", "micrófono", "bass", "hi-fi"],
                ),
                (
                    Category::Mobile,
                    &["celular", "smartphone", "android", "ios", "móvil", "teléfono"],
                ),
                (
                    Category::Computing,
                    &["laptop", "notebook", "pc", "computadora", "gaming", "trabajo"],
                ),
                (
                    Category::Footwear,
                    &["zapatos", "calzado", "deportivas", "running", "casual", "urbano"],
                ),
                (
                    Category::Watches,
                    &["reloj", "smartwatch", "fitness", "deportivo", "salud", "gps"],
                ),
            ],
        }
    }

    /// Up to `RELATED_KEYWORDS_MAX` strings of the form "{base} {term}", in
    /// table order. The generic fallback has only 3 terms.
    pub fn related(&self, base_keyword: &str, category: Category) -> Vec<String> {
        let terms: &[&str] = self
            .category_terms
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, terms)| *terms)
            .unwrap_or(&GENERIC_RELATED);

        terms
            .iter()
            .take(RELATED_KEYWORDS_MAX)
            .map(|term| format!("{base_keyword} {term}"))
            .collect()
    }
}

impl Default for RelatedSuggester {
    fn default() -> Self {
        Self::new()
    }
}
