mod common;

use loftloot::{FacetKind, SnippetField};

#[test]
fn test_short_queries_suggest_nothing() {
    let cat = common::catalogue();
    let exec = cat.executor();
    for query in ["", "l", "é", " "] {
        let result = exec.autocomplete(query, false);
        assert!(result.filters.is_empty(), "{:?}", query);
        assert!(result.products.is_empty(), "{:?}", query);
        assert_eq!(result.total_products, 0);
    }
}

#[test]
fn test_lio_suggests_lion_o_only() {
    let cat = common::catalogue();
    let result = cat.executor().autocomplete("lio", false);
    assert!(result.filters.is_empty());
    assert_eq!(result.total_products, 1);
    assert_eq!(result.products[0].product.name, "Lion-O");
}

#[test]
fn test_facet_and_product_suggestions_together() {
    let cat = common::catalogue();
    let result = cat.executor().autocomplete("thunder", false);

    assert_eq!(result.filters.len(), 1);
    assert_eq!(result.filters[0].label, "Thundercats");
    assert_eq!(result.filters[0].kind, FacetKind::Collection);

    let ids: Vec<i64> = result.products.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(
        result.products[1].snippet.as_ref().map(|s| s.text.as_str()),
        Some("Brand: Thundercats")
    );

    let in_stock = cat.executor().autocomplete("thunder", true);
    let ids: Vec<i64> = in_stock.products.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(in_stock.filters, result.filters);
}

#[test]
fn test_era_and_type_suggestions() {
    let cat = common::catalogue();

    let result = cat.executor().autocomplete("199", false);
    assert_eq!(result.filters.len(), 1);
    assert_eq!(result.filters[0].kind, FacetKind::Era);
    assert_eq!(result.filters[0].value, "1990s");
    assert_eq!(
        result.products[0].snippet.as_ref().unwrap().field,
        SnippetField::Year
    );

    let result = cat.executor().autocomplete("playsets", false);
    assert_eq!(result.filters[0].label, "Playsets");
    assert_eq!(result.filters[0].value, "Playset");
    assert_eq!(result.filters[0].score, 10);
}

#[test]
fn test_description_snippet_is_plain_text() {
    let cat = common::catalogue();
    let result = cat.executor().autocomplete("omens", false);
    let snippet = result.products[0].snippet.as_ref().unwrap();
    assert_eq!(snippet.field, SnippetField::Description);
    assert!(!snippet.text.contains('<'));
    assert!(snippet.text.contains("Sword of Omens"));
    assert!(snippet.text.starts_with("..."));
}

#[test]
fn test_filter_suggestions_are_capped() {
    let cat = common::catalogue();
    // eight labels contain an "e", none start with one
    let result = cat.executor().autocomplete(" e ", false);
    let labels: Vec<&str> = result.filters.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Gargoyles",
            "Masters of the Universe",
            "Other",
            "Pokémon",
            "Thundercats",
            "Action Figures"
        ]
    );
}

#[test]
fn test_result_serializes_camel_case() {
    let cat = common::catalogue();
    let value = serde_json::to_value(cat.executor().autocomplete("panthro", false)).unwrap();
    assert_eq!(value["totalProducts"], 1);
    assert_eq!(value["products"][0]["fullSlug"], "thundercats/1985-ljn-panthro");
    assert_eq!(value["products"][0]["score"], 20);
    assert!(value["products"][0]["snippet"].is_null());
}
