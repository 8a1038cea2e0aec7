//! Tests for the taxonomy model and its builder.

use lexitag_core::{Taxonomy, TaxonomyBuilder, NOT_CLASSIFIED};

fn sample() -> Taxonomy {
    TaxonomyBuilder::new()
        .add_categories(["fruit", "vegetable"])
        .add_details("fruit", ["citrus", "berry"])
        .add_detail("vegetable", "root")
        .add_keywords(["vitamin c", "fiber"])
        .add_synonym("citrus", "agrume")
        .build()
}

#[test]
fn every_category_contains_the_reserved_detail() {
    let taxonomy = sample();
    for category in ["fruit", "vegetable"] {
        let details = taxonomy.details_of(category).unwrap();
        assert!(
            details.contains(NOT_CLASSIFIED),
            "{category} is missing the catch-all detail"
        );
    }
}

#[test]
fn category_names_cover_all_registered() {
    let taxonomy = sample();
    let mut names: Vec<&str> = taxonomy.category_names().collect();
    names.sort();
    assert_eq!(names, ["fruit", "vegetable"]);
}

#[test]
fn category_and_detail_keys_are_whitespace_stripped() {
    let taxonomy = TaxonomyBuilder::new()
        .add_detail("leafy greens", "baby spinach")
        .build();
    let details = taxonomy.details_of("leafygreens").unwrap();
    assert!(details.contains("babyspinach"));
}

#[test]
fn keywords_and_aliases_are_stored_verbatim() {
    let taxonomy = TaxonomyBuilder::new()
        .add_keyword("vitamin c")
        .add_synonym("citrus", "citrus fruit")
        .build();
    assert!(taxonomy.keywords().contains("vitamin c"));
    assert_eq!(
        taxonomy.synonyms().get("citrus fruit").map(String::as_str),
        Some("citrus")
    );
}

#[test]
fn detail_lookup_folds_case_by_default() {
    let taxonomy = sample();
    assert_eq!(taxonomy.categories_with_detail("CITRUS"), &["fruit"]);
}

#[test]
fn detail_lookup_is_exact_when_case_sensitive() {
    let taxonomy = TaxonomyBuilder::new()
        .case_sensitive()
        .add_detail("fruit", "Citrus")
        .build();
    assert_eq!(taxonomy.categories_with_detail("Citrus"), &["fruit"]);
    assert!(taxonomy.categories_with_detail("citrus").is_empty());
}

#[test]
fn shared_detail_reports_all_owners_sorted() {
    let taxonomy = TaxonomyBuilder::new()
        .add_detail("vegetable", "organic")
        .add_detail("fruit", "organic")
        .build();
    assert_eq!(
        taxonomy.categories_with_detail("organic"),
        &["fruit", "vegetable"]
    );
}

#[test]
fn duplicate_category_insert_keeps_existing_details() {
    let taxonomy = TaxonomyBuilder::new()
        .add_detail("fruit", "citrus")
        .add_category("fruit")
        .build();
    assert!(taxonomy.details_of("fruit").unwrap().contains("citrus"));
}

#[test]
fn taxonomy_is_shareable_across_threads() {
    let taxonomy = std::sync::Arc::new(sample());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let taxonomy = std::sync::Arc::clone(&taxonomy);
            std::thread::spawn(move || {
                assert!(taxonomy.is_keyword("vitamin c"));
                assert_eq!(taxonomy.categories_with_detail("citrus"), &["fruit"]);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
