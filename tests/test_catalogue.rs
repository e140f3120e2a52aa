mod common;

use loftloot::{
    Catalogue, CatalogueError, CatalogueSettings, FacetKind, RawProduct, SearchFilters,
};
use serde_json::json;

#[test]
fn test_lion_o_is_enriched() {
    let cat = common::catalogue();
    let lion_o = cat.get(1).unwrap();

    assert_eq!(lion_o.decade, "1980s");
    assert_eq!(lion_o.collection_slug, "thundercats");
    assert_eq!(lion_o.item_slug, "1985-ljn-lion-o");
    assert_eq!(lion_o.full_slug, "thundercats/1985-ljn-lion-o");
    assert!(!lion_o.is_sold);
    assert_eq!(lion_o.schema_condition, "https://schema.org/UsedCondition");

    assert_eq!(lion_o.media.len(), 2);
    assert!(!lion_o.media[0].is_video);
    assert!(lion_o.media[1].is_video);
    assert_eq!(lion_o.media[1].video_id.as_deref(), Some("abc123XYZ_-"));
    assert_eq!(lion_o.main_image.as_deref(), Some("/img/lion-o.jpg"));
}

#[test]
fn test_missing_fields_get_defaults() {
    let cat = common::catalogue();
    let tin = cat.get(7).unwrap();
    assert_eq!(tin.collection, "Other");
    assert_eq!(tin.decade, "Unknown");
    assert_eq!(tin.full_slug, "other/vintage-mystery-tin");
    assert!(tin.search.years.is_empty());
    assert!(tin.main_image.is_none());
    assert_eq!(tin.image_color, "cbd5e1");

    let plush = cat.get(5).unwrap();
    assert_eq!(plush.schema_condition, "https://schema.org/NewCondition");
    assert_eq!(plush.collection_slug, "pokemon");
}

#[test]
fn test_enrichment_is_idempotent() {
    let raw = common::raw_products();
    let first = Catalogue::build(&raw).unwrap();
    let second = Catalogue::build(&raw).unwrap();
    assert_eq!(first.products(), second.products());

    // re-enriching from the enriched output's own raw fields changes nothing
    let reparsed: Vec<RawProduct> = serde_json::from_value(
        serde_json::to_value(first.products()).unwrap(),
    )
    .unwrap();
    let third = Catalogue::build(&reparsed).unwrap();
    assert_eq!(first.products(), third.products());
}

#[test]
fn test_facet_lists_are_ordered() {
    let cat = common::catalogue();
    assert_eq!(
        cat.collections(),
        &[
            "Gargoyles",
            "Masters of the Universe",
            "Pokémon",
            "Thundercats",
            "TMNT",
            "Other"
        ]
    );
    assert_eq!(cat.decades(), &["1980s", "1990s", "Unknown"]);
    assert_eq!(cat.types(), &["Action Figure", "Playset", "Plush", "Vehicle"]);

    let bounds = cat.price_bounds().unwrap();
    assert_eq!((bounds.min, bounds.max), (5.0, 150.0));
}

#[test]
fn test_related_products_rank_by_similarity() {
    let cat = common::catalogue();
    let related = common::ids(cat.related(1));
    // Panthro shares everything, the tin shares nothing
    assert_eq!(related, vec![3, 4, 6, 5]);
    assert!(cat.related(1).iter().all(|p| !p.is_sold));
    assert!(!related.contains(&1));
}

#[test]
fn test_related_limit_follows_settings() {
    let mut settings = CatalogueSettings::default();
    settings.related.default_limit = 2;
    let cat = common::catalogue_with(settings);
    assert_eq!(common::ids(cat.related(1)), vec![3, 4]);
}

#[test]
fn test_available_facets_ignore_own_selection() {
    let cat = common::catalogue();
    let filters = SearchFilters::in_stock_only().with_decade("1980s");
    let available = cat.executor().available_facets(&filters);

    assert_eq!(available.collections, vec!["Thundercats", "TMNT"]);
    assert_eq!(available.decades, vec!["1980s", "1990s", "Unknown"]);
    assert_eq!(available.types, vec!["Action Figure"]);
    assert!(!available.contains(FacetKind::Collection, "Masters of the Universe"));
}

#[test]
fn test_public_url_prefixes_local_images() {
    let settings = CatalogueSettings {
        public_url: "https://cdn.example.com".to_string(),
        ..Default::default()
    };
    let cat = common::catalogue_with(settings);
    let lion_o = cat.get(1).unwrap();
    assert_eq!(
        lion_o.main_image.as_deref(),
        Some("https://cdn.example.com/img/lion-o.jpg")
    );
    assert_eq!(
        lion_o.media[1].thumbnail,
        "https://img.youtube.com/vi/abc123XYZ_-/hqdefault.jpg"
    );
}

#[test]
fn test_invalid_records_fail_the_build() {
    let missing_price = json!([{"id": 1, "name": "A"}]);
    let err = Catalogue::from_json_str(&missing_price.to_string(), CatalogueSettings::default())
        .unwrap_err();
    assert!(matches!(err, CatalogueError::MissingField { ref field, .. } if field == "price"));

    let negative = json!([{"id": 1, "name": "A", "price": -1}]);
    let err = Catalogue::from_json_str(&negative.to_string(), CatalogueSettings::default())
        .unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidProduct { id: 1, .. }));

    let err = Catalogue::from_json_str("{not json", CatalogueSettings::default()).unwrap_err();
    assert!(matches!(err, CatalogueError::Json(_)));
}

#[test]
fn test_huge_release_year_fails_the_build() {
    let products = json!([
        {"id": 1, "name": "X", "releaseDate": 2147483647, "price": 1, "stock": 1}
    ]);
    let err = Catalogue::from_json_str(&products.to_string(), CatalogueSettings::default())
        .unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidProduct { id: 1, .. }));
    assert_eq!(err.code(), "invalid_product");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, common::fixture_products().to_string()).unwrap();

    let cat = Catalogue::load(&path, CatalogueSettings::default()).unwrap();
    assert_eq!(cat.len(), 8);

    let err = Catalogue::load(dir.path().join("missing.json"), CatalogueSettings::default())
        .unwrap_err();
    assert!(matches!(err, CatalogueError::Io(_)));
}

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = CatalogueSettings::default();
    settings.hits_per_page = 24;
    settings.autocomplete.max_products = 8;
    settings.save(&path).unwrap();

    let loaded = CatalogueSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);

    std::fs::write(&path, r#"{"hitsPerPage": 0}"#).unwrap();
    assert!(matches!(
        CatalogueSettings::load(&path),
        Err(CatalogueError::Config(_))
    ));
}

#[test]
fn test_catalogue_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Catalogue>();

    let cat = std::sync::Arc::new(common::catalogue());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cat = cat.clone();
            std::thread::spawn(move || cat.executor().search("thunder", &SearchFilters::default()).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
