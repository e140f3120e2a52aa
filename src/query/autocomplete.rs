use crate::query::executor::QueryExecutor;
use crate::query::highlighter::{Highlighter, Snippet};
use crate::query::parser::QueryParser;
use crate::tokenizer::normalize;
use crate::types::{EnrichedProduct, FacetKind};
use indexmap::IndexMap;
use serde::Serialize;

/// Label scores for facet suggestions.
pub const FACET_PREFIX_SCORE: u32 = 10;
pub const FACET_CONTAINS_SCORE: u32 = 5;

/// A facet value offered as a one-click filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetSuggestion {
    pub label: String,
    pub kind: FacetKind,
    pub value: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductSuggestion<'a> {
    #[serde(flatten)]
    pub product: &'a EnrichedProduct,
    pub score: u32,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResult<'a> {
    pub filters: Vec<FacetSuggestion>,
    pub products: Vec<ProductSuggestion<'a>>,
    pub total_products: usize,
}

impl AutocompleteResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.products.is_empty()
    }
}

fn label_score(label: &str, normalized_query: &str) -> Option<u32> {
    let label = normalize(label);
    if label.starts_with(normalized_query) {
        Some(FACET_PREFIX_SCORE)
    } else if label.contains(normalized_query) {
        Some(FACET_CONTAINS_SCORE)
    } else {
        None
    }
}

impl<'a> QueryExecutor<'a> {
    /// Type-ahead suggestions for a partial query.
    ///
    /// Returns facet values whose label contains the whole query, and the best
    /// matching products (same matching and scoring as search) each with a
    /// snippet. Only `show_in_stock_only` narrows the products; facet
    /// selections do not apply here.
    pub fn autocomplete(&self, query: &str, show_in_stock_only: bool) -> AutocompleteResult<'a> {
        let t0 = std::time::Instant::now();
        let settings = &self.catalogue.settings().autocomplete;

        if query.chars().count() < settings.min_query_length {
            return AutocompleteResult::default();
        }
        let parsed = QueryParser::parse(query);
        if parsed.is_empty() {
            return AutocompleteResult::default();
        }
        let q = parsed.normalized.as_str();

        let filters = self.facet_suggestions(q, settings.max_filters);

        let highlighter = Highlighter::new(settings.snippet_before, settings.snippet_after);
        let hits = self.scan(&parsed, |p| !show_in_stock_only || p.in_stock());
        let total_products = hits.len();
        let products = hits
            .into_iter()
            .take(settings.max_products)
            .map(|hit| ProductSuggestion {
                snippet: highlighter.snippet(hit.product, q),
                product: hit.product,
                score: hit.score,
            })
            .collect();

        tracing::debug!(
            query = %q,
            filters = filters.len(),
            total_products,
            elapsed_us = t0.elapsed().as_micros() as u64,
            "[AUTOCOMPLETE]"
        );

        AutocompleteResult {
            filters,
            products,
            total_products,
        }
    }

    fn facet_suggestions(&self, normalized_query: &str, cap: usize) -> Vec<FacetSuggestion> {
        let catalogue = self.catalogue;
        let settings = catalogue.settings();

        // plain ordinal order here, so the default collection is not pinned last
        let mut collections: Vec<&str> =
            catalogue.collections().iter().map(String::as_str).collect();
        collections.sort_unstable();

        let candidates = collections
            .into_iter()
            .map(|c| (c, FacetKind::Collection, c))
            .chain(
                catalogue
                    .types()
                    .iter()
                    .map(|t| (settings.type_plural(t), FacetKind::Type, t.as_str())),
            )
            .chain(
                catalogue
                    .decades()
                    .iter()
                    .map(|d| (d.as_str(), FacetKind::Era, d.as_str())),
            );

        // last candidate wins a (label, kind) collision but keeps the first slot
        let mut unique: IndexMap<(String, FacetKind), FacetSuggestion> = IndexMap::new();
        for (label, kind, value) in candidates {
            if let Some(score) = label_score(label, normalized_query) {
                unique.insert(
                    (label.to_string(), kind),
                    FacetSuggestion {
                        label: label.to_string(),
                        kind,
                        value: value.to_string(),
                        score,
                    },
                );
            }
        }

        let mut suggestions: Vec<FacetSuggestion> = unique.into_values().collect();
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(cap);
        suggestions
    }
}
