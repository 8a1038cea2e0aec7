//! Document classification driver.
//!
//! Orchestrates the per-document pipeline (extract, resolve, classify,
//! aggregate) across the merged document list in parallel. The store is
//! the only shared mutable state; everything else is read-only.

use rayon::prelude::*;
use tracing::{debug, warn};

use lexitag_core::errors::ClusterError;
use lexitag_core::types::collections::BTreeSet;
use lexitag_core::{Taxonomy, NOT_CLASSIFIED};

use crate::classify::{DocumentClassification, DocumentClassifier};
use crate::extract::KeywordExtractor;
use crate::store::AggregationStore;
use crate::synonyms::SynonymResolver;

/// The classification engine: one taxonomy, one store, many documents.
///
/// Created at run start; the store is read after [`build`](Self::build)
/// completes and is never cleared during the engine's lifetime.
#[derive(Debug)]
pub struct ClusterEngine {
    taxonomy: Taxonomy,
    extractor: KeywordExtractor,
    resolver: SynonymResolver,
    store: AggregationStore<String>,
}

impl ClusterEngine {
    /// Compile the extractor and resolver for a finished taxonomy.
    pub fn new(taxonomy: Taxonomy) -> Result<Self, ClusterError> {
        let extractor = KeywordExtractor::from_taxonomy(&taxonomy)?;
        let resolver = SynonymResolver::from_taxonomy(&taxonomy);
        Ok(Self {
            taxonomy,
            extractor,
            resolver,
            store: AggregationStore::new(),
        })
    }

    /// Classify every document and aggregate the results into the store.
    ///
    /// Documents run in parallel; within one document the pipeline is
    /// strictly sequential. Re-running with the same inputs reproduces the
    /// same store contents.
    pub fn build(&self, documents: &[String]) {
        documents.par_iter().for_each(|document| {
            let classification = self.classify_document(document);
            self.aggregate(&classification);
        });
    }

    /// Run one document through extract -> resolve -> classify.
    ///
    /// A cyclic alias voids the whole document: its resolved set becomes
    /// empty and processing continues with the next document. The only
    /// externally observable effect is that the document contributes
    /// nothing to the store.
    fn classify_document(&self, document: &str) -> DocumentClassification {
        let extracted = self.extractor.extract(document);

        let resolved = match self.resolver.canonicalize_all(&extracted) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(token = %e.token, "cyclic alias chain; voiding document");
                BTreeSet::new()
            }
        };

        let classification = DocumentClassifier::new(&self.taxonomy).classify(&resolved);
        debug!(
            category = ?classification.category,
            detail = ?classification.detail,
            keyword_count = classification.keywords.len(),
            "document classified"
        );
        classification
    }

    /// Write a document's keywords under its elected buckets.
    ///
    /// Every keyword lands under `(category, NOT_CLASSIFIED, keyword)` so
    /// it stays reachable through the catch-all detail, and additionally
    /// under `(category, detail, keyword)` when a detail was elected.
    fn aggregate(&self, classification: &DocumentClassification) {
        let Some(category) = classification.category.as_deref() else {
            return;
        };
        if classification.keywords.is_empty() {
            return;
        }

        for keyword in &classification.keywords {
            if let Some(detail) = classification.detail.as_deref() {
                self.store.put(category, detail, keyword, keyword.clone());
            }
            self.store
                .put(category, NOT_CLASSIFIED, keyword, keyword.clone());
        }
    }

    /// Typed retrieval: apply `map` to the stored raw value at the key.
    /// A missing entry is a normal `None`, never an error.
    pub fn retrieve<T>(
        &self,
        category: &str,
        detail: &str,
        keyword: &str,
        map: impl FnOnce(&str) -> T,
    ) -> Option<T> {
        self.store
            .map_get(category, detail, keyword, |raw| map(raw))
    }

    /// The populated aggregation store.
    pub fn store(&self) -> &AggregationStore<String> {
        &self.store
    }

    /// The taxonomy this engine classifies against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }
}
