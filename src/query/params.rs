use crate::query::executor::SortStrategy;
use crate::query::filter::{FacetSelection, SearchFilters};
use url::form_urlencoded;

/// Shop state carried in a URL query string:
/// `?q=lion&decade=1980s&type=Action+Figure&sort=price-low&stock=1`.
///
/// Unknown keys are ignored. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SortStrategy,
}

fn stock_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "in"
    )
}

impl SearchParams {
    /// Parse with [`SortStrategy::default`] as the fallback sort.
    pub fn parse(query_string: &str) -> Self {
        Self::parse_with_default(query_string, SortStrategy::default())
    }

    /// Parse, falling back to `default_sort` when `sort` is absent or unknown.
    pub fn parse_with_default(query_string: &str, default_sort: SortStrategy) -> Self {
        let input = query_string.strip_prefix('?').unwrap_or(query_string);

        let mut params = SearchParams {
            sort: default_sort,
            ..Default::default()
        };
        let mut sort_key: Option<String> = None;

        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            match key.as_ref() {
                "q" => params.query = value.into_owned(),
                "collection" => params.filters.collection = FacetSelection::from(value.into_owned()),
                "decade" => params.filters.decade = FacetSelection::from(value.into_owned()),
                "type" => params.filters.product_type = FacetSelection::from(value.into_owned()),
                "sort" => sort_key = Some(value.into_owned()),
                "stock" => params.filters.show_in_stock_only = stock_flag(&value),
                _ => {}
            }
        }

        params.sort = SortStrategy::from_key_or(sort_key.as_deref(), default_sort);
        params
    }

    /// Inverse of [`parse`](Self::parse). Default values are omitted, so an
    /// untouched shop serializes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            out.append_pair("q", &self.query);
        }
        for (key, selection) in [
            ("collection", &self.filters.collection),
            ("decade", &self.filters.decade),
            ("type", &self.filters.product_type),
        ] {
            if !selection.is_all() {
                out.append_pair(key, selection.as_str());
            }
        }
        if self.sort != SortStrategy::default() {
            out.append_pair("sort", self.sort.key());
        }
        if self.filters.show_in_stock_only {
            out.append_pair("stock", "1");
        }
        out.finish()
    }
}
