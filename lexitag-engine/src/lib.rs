//! Classification engine for the Lexitag taxonomy model.
//!
//! The per-document pipeline is strictly sequential (extract, resolve,
//! classify, aggregate) while documents themselves run in parallel. Only
//! the aggregation store is shared across workers; the taxonomy is shared
//! read-only.

pub mod classify;
pub mod extract;
pub mod pipeline;
pub mod store;
pub mod synonyms;

pub use classify::{DocumentClassification, DocumentClassifier, TokenClass};
pub use extract::KeywordExtractor;
pub use pipeline::ClusterEngine;
pub use store::{AggregationStore, BucketKey};
pub use synonyms::SynonymResolver;
