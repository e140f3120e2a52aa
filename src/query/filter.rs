use crate::types::{EnrichedProduct, FacetKind};
use serde::{Deserialize, Serialize};

/// Wire value meaning "no constraint" for a facet.
pub const ALL: &str = "All";

/// Selection on a single facet: everything, or exactly one value.
///
/// Serializes as a plain string, with `"All"` standing for [`FacetSelection::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetSelection {
    #[default]
    All,
    Only(String),
}

impl FacetSelection {
    pub fn only(value: impl Into<String>) -> Self {
        FacetSelection::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetSelection::All => ALL,
            FacetSelection::Only(v) => v,
        }
    }
}

impl From<String> for FacetSelection {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            FacetSelection::All
        } else {
            FacetSelection::Only(value)
        }
    }
}

impl From<&str> for FacetSelection {
    fn from(value: &str) -> Self {
        FacetSelection::from(value.to_string())
    }
}

impl From<FacetSelection> for String {
    fn from(value: FacetSelection) -> Self {
        match value {
            FacetSelection::All => ALL.to_string(),
            FacetSelection::Only(v) => v,
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Structured filters applied after text matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub collection: FacetSelection,
    pub decade: FacetSelection,
    #[serde(rename = "type")]
    pub product_type: FacetSelection,
    pub price_range: Option<PriceRange>,
    pub show_in_stock_only: bool,
}

impl SearchFilters {
    pub fn in_stock_only() -> Self {
        SearchFilters {
            show_in_stock_only: true,
            ..Default::default()
        }
    }

    pub fn with_collection(mut self, collection: impl Into<FacetSelection>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_decade(mut self, decade: impl Into<FacetSelection>) -> Self {
        self.decade = decade.into();
        self
    }

    pub fn with_type(mut self, product_type: impl Into<FacetSelection>) -> Self {
        self.product_type = product_type.into();
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn selection(&self, kind: FacetKind) -> &FacetSelection {
        match kind {
            FacetKind::Collection => &self.collection,
            FacetKind::Era => &self.decade,
            FacetKind::Type => &self.product_type,
        }
    }

    fn facet_value(product: &EnrichedProduct, kind: FacetKind) -> Option<&str> {
        match kind {
            FacetKind::Collection => Some(product.collection.as_str()),
            FacetKind::Era => Some(product.decade.as_str()),
            FacetKind::Type => product.product_type.as_deref(),
        }
    }

    fn admits_stock(&self, product: &EnrichedProduct) -> bool {
        !(self.show_in_stock_only && product.is_sold)
    }

    fn admits_facet(&self, product: &EnrichedProduct, kind: FacetKind) -> bool {
        self.selection(kind)
            .matches(Self::facet_value(product, kind))
    }

    /// Full admission check: stock, all three facets, and price.
    pub fn admits(&self, product: &EnrichedProduct) -> bool {
        self.admits_stock(product)
            && self.admits_facet(product, FacetKind::Collection)
            && self.admits_facet(product, FacetKind::Era)
            && self.admits_facet(product, FacetKind::Type)
            && self
                .price_range
                .map_or(true, |range| range.contains(product.price))
    }

    /// Admission used for facet availability: stock plus every facet except
    /// `ignored`. Price is not considered.
    pub fn admits_except(&self, product: &EnrichedProduct, ignored: FacetKind) -> bool {
        self.admits_stock(product)
            && [FacetKind::Collection, FacetKind::Era, FacetKind::Type]
                .into_iter()
                .filter(|k| *k != ignored)
                .all(|k| self.admits_facet(product, k))
    }

    /// Whether any constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.collection.is_all()
            && self.decade.is_all()
            && self.product_type.is_all()
            && self.price_range.is_none()
            && !self.show_in_stock_only
    }
}
