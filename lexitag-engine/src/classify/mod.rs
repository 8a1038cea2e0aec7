//! Per-token classification and per-document category election.
//!
//! Classification is a pure function over the taxonomy's precomputed
//! indexes. The stateful part, electing a category and detail across a
//! document's token stream, lives in [`DocumentClassifier`].

use lexitag_core::types::collections::{BTreeSet, SmallVec4};
use lexitag_core::Taxonomy;

/// What a single resolved token is, independent of any document state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    /// Member of the keyword dictionary.
    Keyword,
    /// A detail owned by these categories (sorted lexicographically).
    Detail(SmallVec4<String>),
    /// Matches nothing in the taxonomy.
    Unclassified,
}

/// Classify one token. Keyword membership wins; the detail test only runs
/// for non-keywords.
pub fn classify_token(taxonomy: &Taxonomy, token: &str) -> TokenClass {
    if taxonomy.is_keyword(token) {
        return TokenClass::Keyword;
    }
    let found = taxonomy.categories_with_detail(token);
    if found.is_empty() {
        TokenClass::Unclassified
    } else {
        TokenClass::Detail(found.iter().cloned().collect())
    }
}

/// The outcome of classifying one document's resolved token set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentClassification {
    /// Elected category, if any detail-bearing token was seen.
    pub category: Option<String>,
    /// Last detail-bearing token wins.
    pub detail: Option<String>,
    /// Every token flagged as a keyword.
    pub keywords: BTreeSet<String>,
}

impl DocumentClassification {
    /// Whether this document contributes anything to the aggregation store.
    pub fn is_aggregatable(&self) -> bool {
        self.category.is_some() && !self.keywords.is_empty()
    }
}

/// Runs the election loop over a document's resolved tokens.
#[derive(Debug)]
pub struct DocumentClassifier<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> DocumentClassifier<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Classify a resolved token set.
    ///
    /// Election rule: a detail-bearing token always overwrites `detail`;
    /// the current `category` survives only when the token's owner set
    /// confirms it, otherwise the lexicographically smallest owner is
    /// elected. Tokens iterate in the set's sorted order, so the outcome is
    /// deterministic for a given taxonomy and token set.
    pub fn classify(&self, tokens: &BTreeSet<String>) -> DocumentClassification {
        let mut result = DocumentClassification::default();

        for token in tokens {
            match classify_token(self.taxonomy, token) {
                TokenClass::Keyword => {
                    result.keywords.insert(token.clone());
                }
                TokenClass::Detail(found) => {
                    result.detail = Some(token.clone());
                    let confirmed = result
                        .category
                        .as_ref()
                        .is_some_and(|current| found.iter().any(|c| c == current));
                    if !confirmed {
                        result.category = Some(found[0].clone());
                    }
                }
                TokenClass::Unclassified => {}
            }
        }

        result
    }
}
