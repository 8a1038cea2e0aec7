//! Property tests for synonym resolution: termination on arbitrary alias
//! maps, and correct tail resolution on constructed acyclic chains.

use proptest::prelude::*;

use lexitag_core::TaxonomyBuilder;
use lexitag_engine::SynonymResolver;

/// Short lowercase tokens so collisions (and thus chains) actually happen.
fn token() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

proptest! {
    /// Resolution always terminates: Ok or CyclicAliasError, never a hang.
    /// The builder's guards reduce but do not eliminate cycle risk, so the
    /// resolver's bound is what this property leans on.
    #[test]
    fn resolution_always_terminates(
        pairs in prop::collection::vec((token(), token()), 0..24),
        probe in token(),
    ) {
        let mut builder = TaxonomyBuilder::new();
        for (canonical, alias) in &pairs {
            builder = builder.add_synonym(canonical, alias);
        }
        let resolver = SynonymResolver::from_taxonomy(&builder.build());

        match resolver.canonicalize(&probe) {
            Ok(canonical) => prop_assert!(!canonical.is_empty()),
            Err(e) => prop_assert_eq!(e.token, probe),
        }
    }

    /// A straight-line chain t0 <- t1 <- ... <- tN resolves every link to t0.
    #[test]
    fn acyclic_chain_resolves_to_head(links in prop::collection::vec("[e-z]{4,8}", 2..10)) {
        let mut distinct = links.clone();
        distinct.sort();
        distinct.dedup();
        prop_assume!(distinct.len() == links.len());

        let mut builder = TaxonomyBuilder::new();
        for window in links.windows(2) {
            // window[1] aliases to window[0]: each link points one step
            // closer to the head.
            builder = builder.add_synonym(&window[0], &window[1]);
        }
        let resolver = SynonymResolver::from_taxonomy(&builder.build());

        for link in &links {
            prop_assert_eq!(resolver.canonicalize(link).unwrap(), links[0].clone());
        }
    }
}
