//! Fluent builder for assembling a [`Taxonomy`].
//!
//! The builder is the only place the construction rules live: category and
//! detail names are whitespace-stripped at insert time, every category
//! receives the implicit [`NOT_CLASSIFIED`] detail, and alias inserts that
//! could close a resolution cycle are refused. Keywords and aliases are
//! stored verbatim: both are matched against extracted text, where spaces
//! matter.

use tracing::warn;

use crate::types::collections::{FxHashMap, FxHashSet};

use super::{Taxonomy, NOT_CLASSIFIED};

/// Strip all whitespace from a taxonomy key.
fn flush_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Builder for [`Taxonomy`]. Insert order does not matter; conflicting
/// inserts are logged and skipped rather than erroring.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    categories: FxHashMap<String, FxHashSet<String>>,
    keywords: FxHashSet<String>,
    synonyms: FxHashMap<String, String>,
    case_sensitive: bool,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category. Every category starts with the reserved
    /// [`NOT_CLASSIFIED`] detail.
    pub fn add_category(mut self, name: &str) -> Self {
        self.insert_category(name);
        self
    }

    /// Register several categories at once.
    pub fn add_categories<'a, I: IntoIterator<Item = &'a str>>(mut self, names: I) -> Self {
        for name in names {
            self.insert_category(name);
        }
        self
    }

    /// Register a detail under a category, creating the category when it
    /// does not exist yet.
    pub fn add_detail(mut self, category: &str, detail: &str) -> Self {
        self.insert_detail(category, detail);
        self
    }

    /// Register several details under one category.
    pub fn add_details<'a, I: IntoIterator<Item = &'a str>>(
        mut self,
        category: &str,
        details: I,
    ) -> Self {
        for detail in details {
            self.insert_detail(category, detail);
        }
        self
    }

    /// Register a keyword. Stored verbatim, duplicates collapse.
    pub fn add_keyword(mut self, keyword: &str) -> Self {
        self.keywords.insert(keyword.to_string());
        self
    }

    /// Register several keywords.
    pub fn add_keywords<'a, I: IntoIterator<Item = &'a str>>(mut self, keywords: I) -> Self {
        for keyword in keywords {
            self.keywords.insert(keyword.to_string());
        }
        self
    }

    /// Register an alias that resolves to `canonical`.
    ///
    /// Inserts that would let resolution loop are refused: self-aliases,
    /// re-pointing an existing alias, and closing a two-step cycle where
    /// `canonical` already aliases to `alias`.
    pub fn add_synonym(mut self, canonical: &str, alias: &str) -> Self {
        self.insert_synonym(canonical, alias);
        self
    }

    /// Register several aliases for one canonical form.
    pub fn add_synonyms<'a, I: IntoIterator<Item = &'a str>>(
        mut self,
        canonical: &str,
        aliases: I,
    ) -> Self {
        for alias in aliases {
            self.insert_synonym(canonical, alias);
        }
        self
    }

    /// Fold case in every lookup: extraction, alias resolution, and
    /// category/detail comparison. This is the default.
    pub fn ignore_case(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Treat differently-cased tokens as distinct everywhere.
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    /// Finish construction and compute the lookup indexes.
    pub fn build(self) -> Taxonomy {
        Taxonomy::from_parts(
            self.categories,
            self.keywords,
            self.synonyms,
            self.case_sensitive,
        )
    }

    fn insert_category(&mut self, name: &str) {
        let name = flush_spaces(name);
        self.categories.entry(name).or_insert_with(new_detail_set);
    }

    fn insert_detail(&mut self, category: &str, detail: &str) {
        let category = flush_spaces(category);
        let detail = flush_spaces(detail);
        self.categories
            .entry(category)
            .or_insert_with(new_detail_set)
            .insert(detail);
    }

    fn insert_synonym(&mut self, canonical: &str, alias: &str) {
        let canonical = canonical.to_string();
        let alias = alias.to_string();

        if alias == canonical {
            warn!(alias = %alias, "skipping self-alias");
            return;
        }
        if self.synonyms.get(&canonical) == Some(&alias) {
            warn!(
                alias = %alias,
                canonical = %canonical,
                "skipping alias that would close a two-step cycle"
            );
            return;
        }
        if self.synonyms.contains_key(&alias) {
            warn!(alias = %alias, "skipping already-registered alias");
            return;
        }
        self.synonyms.insert(alias, canonical);
    }
}

fn new_detail_set() -> FxHashSet<String> {
    let mut set = FxHashSet::default();
    set.insert(NOT_CLASSIFIED.to_string());
    set
}
