//! Alias chain resolution with bounded-iteration cycle detection.
//!
//! A token is rewritten through the alias map until no mapping applies. A
//! finite acyclic chain can take at most one hop per map entry, so a chain
//! still unresolved after `map.len()` hops proves a cycle and resolution
//! fails with [`CyclicAliasError`] rather than hanging.

use lexitag_core::errors::CyclicAliasError;
use lexitag_core::types::collections::{BTreeSet, FxHashMap};
use lexitag_core::Taxonomy;

/// Canonicalizes tokens through a taxonomy's alias map.
///
/// In case-insensitive mode the alias keys are folded once at construction
/// and the lookup key is folded per hop; canonical values keep their stored
/// form, so resolution never rewrites a token's case on its own.
#[derive(Debug)]
pub struct SynonymResolver {
    map: FxHashMap<String, String>,
    case_sensitive: bool,
}

impl SynonymResolver {
    /// Snapshot the taxonomy's alias map, with alias keys folded under its
    /// case mode.
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        let case_sensitive = taxonomy.is_case_sensitive();
        let map = taxonomy
            .synonyms()
            .iter()
            .map(|(alias, canonical)| {
                let key = if case_sensitive {
                    alias.clone()
                } else {
                    alias.to_lowercase()
                };
                (key, canonical.clone())
            })
            .collect();

        Self {
            map,
            case_sensitive,
        }
    }

    fn fold(&self, token: &str) -> String {
        if self.case_sensitive {
            token.to_string()
        } else {
            token.to_lowercase()
        }
    }

    /// Resolve one token to its canonical form. A token with no mapping
    /// resolves to itself, unchanged; a mapped token resolves to the
    /// canonical as stored in the taxonomy.
    pub fn canonicalize(&self, token: &str) -> Result<String, CyclicAliasError> {
        let bound = self.map.len();
        let mut cursor = token.to_string();

        let mut hops = 0usize;
        while let Some(next) = self.map.get(&self.fold(&cursor)) {
            hops += 1;
            if hops > bound {
                return Err(CyclicAliasError::new(token, bound));
            }
            cursor = next.clone();
        }
        Ok(cursor)
    }

    /// Rewrite a whole extracted token set, failing on the first member
    /// whose chain is cyclic.
    pub fn canonicalize_all(
        &self,
        tokens: &BTreeSet<String>,
    ) -> Result<BTreeSet<String>, CyclicAliasError> {
        tokens.iter().map(|t| self.canonicalize(t)).collect()
    }
}
