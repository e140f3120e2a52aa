use crate::error::{CatalogueError, Result};
use crate::types::{EnrichedProduct, ScoredProduct};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub type Comparator = fn(&EnrichedProduct, &EnrichedProduct) -> Ordering;

/// Named result orderings offered to shoppers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortStrategy {
    #[default]
    Latest,
    NameAsc,
    NameDesc,
    PriceLow,
    PriceHigh,
    /// Keep the engine's order (score, then catalogue order).
    Relevance,
}

struct StrategyEntry {
    strategy: SortStrategy,
    key: &'static str,
    label: &'static str,
    comparator: Option<Comparator>,
}

fn by_price(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_desc(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    by_price(b, a)
}

/// Byte order of the folded name, with the raw name as tiebreak. Folding
/// makes case and accents sort together; there is no locale collation.
fn by_name(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    a.search
        .name
        .cmp(&b.search.name)
        .then_with(|| a.name.cmp(&b.name))
}

fn by_name_desc(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    by_name(b, a)
}

fn by_id_desc(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    b.id.cmp(&a.id)
}

static STRATEGIES: &[StrategyEntry] = &[
    StrategyEntry {
        strategy: SortStrategy::Latest,
        key: "latest",
        label: "Latest",
        comparator: Some(by_id_desc),
    },
    StrategyEntry {
        strategy: SortStrategy::NameAsc,
        key: "name-asc",
        label: "Name: A - Z",
        comparator: Some(by_name),
    },
    StrategyEntry {
        strategy: SortStrategy::NameDesc,
        key: "name-desc",
        label: "Name: Z - A",
        comparator: Some(by_name_desc),
    },
    StrategyEntry {
        strategy: SortStrategy::PriceLow,
        key: "price-low",
        label: "Price: Low to High",
        comparator: Some(by_price),
    },
    StrategyEntry {
        strategy: SortStrategy::PriceHigh,
        key: "price-high",
        label: "Price: High to Low",
        comparator: Some(by_price_desc),
    },
    StrategyEntry {
        strategy: SortStrategy::Relevance,
        key: "relevance",
        label: "Best Match",
        comparator: None,
    },
];

impl SortStrategy {
    pub const ALL: [SortStrategy; 6] = [
        SortStrategy::Latest,
        SortStrategy::NameAsc,
        SortStrategy::NameDesc,
        SortStrategy::PriceLow,
        SortStrategy::PriceHigh,
        SortStrategy::Relevance,
    ];

    fn entry(&self) -> &'static StrategyEntry {
        // every variant has exactly one row in STRATEGIES
        STRATEGIES
            .iter()
            .find(|e| e.strategy == *self)
            .unwrap_or(&STRATEGIES[0])
    }

    /// URL key, e.g. `"price-low"`.
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    /// Menu label, e.g. `"Price: Low to High"`.
    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    /// `None` means "keep incoming order".
    pub fn comparator(&self) -> Option<Comparator> {
        self.entry().comparator
    }

    /// Parse a URL key, falling back to `default` for anything unknown.
    pub fn from_key_or(key: Option<&str>, default: SortStrategy) -> SortStrategy {
        match key {
            None | Some("") => default,
            Some(k) => k.parse().unwrap_or_else(|_| {
                tracing::warn!(key = k, fallback = default.key(), "Unknown sort key");
                default
            }),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        STRATEGIES
            .iter()
            .find(|e| e.key == s)
            .map(|e| e.strategy)
            .ok_or_else(|| CatalogueError::InvalidQuery(format!("Unknown sort key: {}", s)))
    }
}

impl TryFrom<String> for SortStrategy {
    type Error = CatalogueError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SortStrategy> for String {
    fn from(value: SortStrategy) -> Self {
        value.key().to_string()
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Order hits by `strategy`, then move every in-stock product ahead of every
/// sold one. Both steps are stable.
pub fn apply_sort(hits: &mut Vec<ScoredProduct<'_>>, strategy: SortStrategy) {
    if let Some(cmp) = strategy.comparator() {
        hits.sort_by(|a, b| cmp(a.product, b.product));
    }
    partition_in_stock(hits);
}

/// Stable partition: in-stock first, sold last, relative order kept.
pub fn partition_in_stock(hits: &mut Vec<ScoredProduct<'_>>) {
    let (mut available, sold): (Vec<_>, Vec<_>) =
        std::mem::take(hits).into_iter().partition(|h| !h.product.is_sold);
    available.extend(sold);
    *hits = available;
}
