//! Multi-pattern keyword extraction.
//!
//! One Aho-Corasick automaton over the whole keyword dictionary gives a
//! single pass over the document regardless of dictionary size. Matches are
//! reported as the keyword *as stored in the taxonomy*, never the literal
//! text slice, so downstream lookups stay in taxonomy form.

use aho_corasick::AhoCorasick;
use lexitag_core::errors::ExtractError;
use lexitag_core::types::collections::BTreeSet;
use lexitag_core::Taxonomy;

/// Stateless keyword finder compiled from a taxonomy's dictionary.
#[derive(Debug)]
pub struct KeywordExtractor {
    /// `None` when the dictionary is empty; nothing can ever match.
    automaton: Option<AhoCorasick>,
    /// Stored keyword forms, index-aligned with the automaton's patterns.
    keywords: Vec<String>,
    case_sensitive: bool,
}

impl KeywordExtractor {
    /// Compile the extractor for a taxonomy.
    ///
    /// Case-insensitive mode folds the dictionary here and the text in
    /// [`extract`](Self::extract), so extraction shares the taxonomy's one
    /// folding rule with synonym lookup and detail comparison.
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Result<Self, ExtractError> {
        let case_sensitive = taxonomy.is_case_sensitive();

        let mut keywords: Vec<String> = taxonomy.keywords().iter().cloned().collect();
        // Stable pattern order keeps automaton construction reproducible.
        keywords.sort();

        let patterns: Vec<String> = if case_sensitive {
            keywords.clone()
        } else {
            keywords.iter().map(|k| k.to_lowercase()).collect()
        };

        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::new(&patterns).map_err(|e| ExtractError::AutomatonBuild {
                    message: e.to_string(),
                })?,
            )
        };

        Ok(Self {
            automaton,
            keywords,
            case_sensitive,
        })
    }

    /// Every distinct dictionary keyword occurring as a substring of `text`.
    ///
    /// All overlapping occurrences are reported; the set collapses
    /// duplicates and iterates in a deterministic order.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let Some(automaton) = &self.automaton else {
            return found;
        };

        let haystack = if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        for mat in automaton.find_overlapping_iter(&haystack) {
            found.insert(self.keywords[mat.pattern().as_usize()].clone());
        }
        found
    }

    /// Number of patterns in the compiled automaton.
    pub fn pattern_count(&self) -> usize {
        self.keywords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexitag_core::TaxonomyBuilder;

    #[test]
    fn finds_single_occurrence() {
        let taxonomy = TaxonomyBuilder::new()
            .add_keywords(["vitamin c", "fiber"])
            .build();
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy).unwrap();

        let found = extractor.extract("oranges are rich in vitamin c");
        assert_eq!(found.len(), 1);
        assert!(found.contains("vitamin c"));
    }

    #[test]
    fn reports_stored_form_not_text_form() {
        let taxonomy = TaxonomyBuilder::new().add_keyword("vitamin c").build();
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy).unwrap();

        let found = extractor.extract("Packed with VITAMIN C!");
        assert!(found.contains("vitamin c"));
    }

    #[test]
    fn overlapping_keywords_are_all_reported() {
        let taxonomy = TaxonomyBuilder::new()
            .add_keywords(["green tea", "tea"])
            .build();
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy).unwrap();

        let found = extractor.extract("a cup of green tea");
        assert!(found.contains("green tea"));
        assert!(found.contains("tea"));
    }

    #[test]
    fn case_sensitive_mode_distinguishes() {
        let taxonomy = TaxonomyBuilder::new()
            .case_sensitive()
            .add_keyword("Foo")
            .build();
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy).unwrap();

        assert!(extractor.extract("Foo bar").contains("Foo"));
        assert!(extractor.extract("foo bar").is_empty());
    }

    #[test]
    fn empty_dictionary_extracts_nothing() {
        let taxonomy = TaxonomyBuilder::new().build();
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy).unwrap();
        assert!(extractor.extract("any text at all").is_empty());
    }
}
