use crate::types::Category;

/// One classification rule: the query belongs to `category` if any term
/// appears in it as a substring.
struct CategoryRule {
    terms: &'static [&'static str],
    category: Category,
}

/// Maps a normalized query to a product category by testing term sets in
/// declaration order. First match wins, so a query hitting several rules
/// always resolves to the same category.
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl CategoryClassifier {
    pub fn new() -> Self {
        Self {
            rules: vec![
                CategoryRule {
                    terms: &["auriculares", "headphones", "audífonos", "cascos"],
                    category: Category::Audio,
                },
                CategoryRule {
                    terms: &["smartphone", "celular", "teléfono", "móvil"],
                    category: Category::Mobile,
                },
                CategoryRule {
                    terms: &["laptop", "notebook", "computadora"],
                    category: Category::Computing,
                },
                CategoryRule {
                    terms: &["zapatillas", "zapatos", "tenis", "calzado"],
                    category: Category::Footwear,
                },
                CategoryRule {
                    terms: &["reloj", "smartwatch", "watch"],
                    category: Category::Watches,
                },
            ],
        }
    }

    /// Expects a trimmed, lowercased query. Never fails: queries matching no
    /// rule classify as `General`.
    pub fn classify(&self, query: &str) -> Category {
        for rule in &self.rules {
            if rule.terms.iter().any(|term| query.contains(term)) {
                return rule.category;
            }
        }
        Category::General
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_terms_resolve_their_category() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("auriculares bluetooth sony"), Category::Audio);
        assert_eq!(classifier.classify("zapatillas running nike"), Category::Footwear);
        assert_eq!(classifier.classify("laptop gamer asus"), Category::Computing);
        assert_eq!(classifier.classify("celular samsung 128gb"), Category::Mobile);
        assert_eq!(classifier.classify("reloj inteligente"), Category::Watches);
    }

    #[test]
    fn unmatched_query_falls_back_to_general() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("xyz123"), Category::General);
        assert_eq!(classifier.classify("tablet android"), Category::General);
    }

    #[test]
    fn first_matching_rule_wins() {
        let classifier = CategoryClassifier::new();
        // Matches both the audio and mobile rules; audio is declared first.
        assert_eq!(classifier.classify("auriculares para celular"), Category::Audio);
    }

    #[test]
    fn term_matches_inside_longer_words() {
        let classifier = CategoryClassifier::new();
        // "watch" is a substring of "smartwatch"; both map to Watches.
        assert_eq!(classifier.classify("apple watch series 9"), Category::Watches);
    }
}
