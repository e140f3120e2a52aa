use super::QueryExecutor;
use crate::query::filter::SearchFilters;
use crate::types::{AvailableFacets, FacetKind};
use std::collections::HashSet;

impl<'a> QueryExecutor<'a> {
    /// Facet values that would still return products if chosen.
    ///
    /// Each facet ignores its own selection but honours the other two and
    /// the stock flag, so switching between values of one facet is never
    /// greyed out by that facet's current value. Output keeps catalogue
    /// facet order.
    pub fn available_facets(&self, filters: &SearchFilters) -> AvailableFacets {
        let mut collections = HashSet::new();
        let mut decades = HashSet::new();
        let mut types = HashSet::new();

        for product in self.catalogue.products() {
            if filters.admits_except(product, FacetKind::Collection) {
                collections.insert(product.collection.as_str());
            }
            if filters.admits_except(product, FacetKind::Era) {
                decades.insert(product.decade.as_str());
            }
            if filters.admits_except(product, FacetKind::Type) {
                if let Some(t) = product.product_type.as_deref() {
                    types.insert(t);
                }
            }
        }

        let keep = |all: &[String], found: &HashSet<&str>| -> Vec<String> {
            all.iter()
                .filter(|v| found.contains(v.as_str()))
                .cloned()
                .collect()
        };

        AvailableFacets {
            collections: keep(self.catalogue.collections(), &collections),
            decades: keep(self.catalogue.decades(), &decades),
            types: keep(self.catalogue.types(), &types),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalogue::settings::CatalogueSettings;
    use crate::catalogue::Catalogue;
    use crate::query::filter::SearchFilters;
    use crate::types::FacetKind;
    use serde_json::json;

    fn catalogue() -> Catalogue {
        let products = json!([
            {"id": 1, "name": "Lion-O", "collection": "Thundercats", "type": "Action Figure",
             "releaseDate": 1985, "price": 45, "stock": 2},
            {"id": 2, "name": "Cats Lair", "collection": "Thundercats", "type": "Playset",
             "releaseDate": 1986, "price": 150, "stock": 0},
            {"id": 3, "name": "Pikachu", "collection": "Pokémon", "type": "Plush",
             "releaseDate": 1999, "price": 20, "stock": 1},
            {"id": 4, "name": "Goliath", "collection": "Gargoyles", "type": "Action Figure",
             "releaseDate": 1995, "price": 18, "stock": 3}
        ]);
        Catalogue::from_json_str(&products.to_string(), CatalogueSettings::default()).unwrap()
    }

    #[test]
    fn test_no_selection_everything_available() {
        let cat = catalogue();
        let available = cat.executor().available_facets(&SearchFilters::default());
        assert_eq!(available.collections, cat.collections());
        assert_eq!(available.decades, cat.decades());
        assert_eq!(available.types, cat.types());
    }

    #[test]
    fn test_own_selection_is_ignored() {
        let cat = catalogue();
        let filters = SearchFilters::default().with_collection("Thundercats");
        let available = cat.executor().available_facets(&filters);

        // other collections stay selectable
        assert_eq!(available.collections.len(), 3);
        assert_eq!(available.decades, vec!["1980s"]);
        assert_eq!(available.types, vec!["Action Figure", "Playset"]);
    }

    #[test]
    fn test_stock_and_other_facets_respected() {
        let cat = catalogue();
        let filters = SearchFilters::in_stock_only().with_decade("1980s");
        let available = cat.executor().available_facets(&filters);

        assert_eq!(available.collections, vec!["Thundercats"]);
        assert_eq!(available.types, vec!["Action Figure"]);
        assert!(available.contains(FacetKind::Era, "1990s"));
        assert!(!available.contains(FacetKind::Type, "Playset"));
    }
}
