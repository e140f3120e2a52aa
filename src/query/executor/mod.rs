use crate::catalogue::Catalogue;
use crate::query::filter::SearchFilters;
use crate::query::parser::{ParsedQuery, QueryParser};
use crate::types::{EnrichedProduct, ScoredProduct, SearchPage};

mod facets;
pub mod relevance;
pub mod sorting;

pub use sorting::{apply_sort, partition_in_stock, Comparator, SortStrategy};

/// Read-only query surface over a [`Catalogue`].
///
/// Cheap to create; every call scans the catalogue and returns fresh
/// vectors borrowing from it.
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'a> {
    pub(crate) catalogue: &'a Catalogue,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        QueryExecutor { catalogue }
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Products matching every query token and admitted by `admit`.
    ///
    /// With tokens present the result is ordered by score, ties in catalogue
    /// order. With no tokens every admitted product passes, unscored, in
    /// catalogue order.
    pub(crate) fn scan<F>(&self, query: &ParsedQuery, admit: F) -> Vec<ScoredProduct<'a>>
    where
        F: Fn(&EnrichedProduct) -> bool,
    {
        let products = self.catalogue.products().iter();

        if query.is_empty() {
            return products
                .filter(|p| admit(*p))
                .map(ScoredProduct::unscored)
                .collect();
        }

        let mut hits: Vec<ScoredProduct<'a>> = products
            .filter_map(|p| {
                relevance::match_and_score(&p.search, &query.tokens)
                    .map(|score| ScoredProduct { product: p, score })
            })
            .filter(|hit| admit(hit.product))
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }

    /// Free-text search narrowed by structured filters.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<ScoredProduct<'a>> {
        let t0 = std::time::Instant::now();
        let parsed = QueryParser::parse(query);
        let hits = self.scan(&parsed, |p| filters.admits(p));
        tracing::debug!(
            query = %parsed.normalized,
            tokens = parsed.tokens.len(),
            hits = hits.len(),
            elapsed_us = t0.elapsed().as_micros() as u64,
            "[SEARCH]"
        );
        hits
    }

    /// [`search`](Self::search) followed by `sort` and the in-stock partition.
    pub fn search_sorted(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortStrategy,
    ) -> Vec<ScoredProduct<'a>> {
        let mut hits = self.search(query, filters);
        apply_sort(&mut hits, sort);
        hits
    }

    /// The first `pages` pages of a sorted search, for "load more" browsing.
    pub fn browse(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortStrategy,
        pages: usize,
    ) -> SearchPage<'a> {
        let visible = self
            .catalogue
            .settings()
            .hits_per_page
            .saturating_mul(pages.max(1));
        paginate(self.search_sorted(query, filters, sort), visible)
    }
}

/// Keep the first `visible` hits and report whether more remain.
pub fn paginate(mut hits: Vec<ScoredProduct<'_>>, visible: usize) -> SearchPage<'_> {
    let total = hits.len();
    hits.truncate(visible);
    SearchPage {
        has_more: visible < total,
        hits,
        total,
    }
}
