//! The taxonomy model — immutable categories, details, keywords, and aliases.
//!
//! A [`Taxonomy`] is built once via [`TaxonomyBuilder`] and then shared
//! read-only across however many worker threads the engine runs. Lookup
//! indexes (folded when case-insensitive) are precomputed at construction so
//! token classification is a pure function over the finished object.

pub mod builder;

pub use builder::TaxonomyBuilder;

use crate::types::collections::{FxHashMap, FxHashSet};

/// Reserved catch-all detail implicitly present in every category.
pub const NOT_CLASSIFIED: &str = "[NOT_CLASSIFIED]";

/// Immutable classification vocabulary: categories with their detail sets,
/// the flat keyword dictionary, and the alias map.
///
/// All accessors are read-only; nothing mutates a `Taxonomy` after
/// [`TaxonomyBuilder::build`] hands it out.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: FxHashMap<String, FxHashSet<String>>,
    keywords: FxHashSet<String>,
    synonyms: FxHashMap<String, String>,
    case_sensitive: bool,
    /// Folded keyword forms for O(1) membership tests.
    keyword_index: FxHashSet<String>,
    /// Folded detail token -> sorted list of owning categories (stored form).
    detail_index: FxHashMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Assemble a taxonomy and precompute its lookup indexes.
    /// Callers go through [`TaxonomyBuilder`]; the builder enforces the
    /// construction rules (whitespace stripping, alias guards, the implicit
    /// [`NOT_CLASSIFIED`] detail) before this runs.
    pub(crate) fn from_parts(
        categories: FxHashMap<String, FxHashSet<String>>,
        keywords: FxHashSet<String>,
        synonyms: FxHashMap<String, String>,
        case_sensitive: bool,
    ) -> Self {
        let fold = |s: &str| -> String {
            if case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };

        let keyword_index = keywords.iter().map(|k| fold(k)).collect();

        let mut detail_index: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for (category, details) in &categories {
            for detail in details {
                detail_index
                    .entry(fold(detail))
                    .or_default()
                    .push(category.clone());
            }
        }
        // Sorted owner lists make the classifier's election rule deterministic.
        for owners in detail_index.values_mut() {
            owners.sort();
            owners.dedup();
        }

        Self {
            categories,
            keywords,
            synonyms,
            case_sensitive,
            keyword_index,
            detail_index,
        }
    }

    /// Fold a token according to the taxonomy's case mode.
    pub fn fold(&self, token: &str) -> String {
        if self.case_sensitive {
            token.to_string()
        } else {
            token.to_lowercase()
        }
    }

    /// Iterate over the category names.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// The detail set of a category (stored form), if the category exists.
    pub fn details_of(&self, category: &str) -> Option<&FxHashSet<String>> {
        self.categories.get(category)
    }

    /// The flat keyword dictionary, as stored.
    pub fn keywords(&self) -> &FxHashSet<String> {
        &self.keywords
    }

    /// The alias map (alias -> canonical), as stored.
    pub fn synonyms(&self) -> &FxHashMap<String, String> {
        &self.synonyms
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether a token is a member of the keyword dictionary, under the
    /// taxonomy's case mode.
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keyword_index.contains(&self.fold(token))
    }

    /// Every category whose detail set contains the token, sorted
    /// lexicographically. Empty when no category owns the token.
    pub fn categories_with_detail(&self, token: &str) -> &[String] {
        self.detail_index
            .get(&self.fold(token))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
