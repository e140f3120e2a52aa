use serde::{Deserialize, Serialize};

/// Stable product identifier from the catalogue file.
pub type ProductId = i64;

/// One record of the static product file, exactly as authored.
///
/// Only `id` is required by the parser. `name` and `price` are checked
/// during enrichment so a bad record fails the whole build with a
/// descriptive error instead of a serde message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: ProductId,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub manufacturer: Option<String>,
    pub collection: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub release_date: Option<i32>,
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub links: Vec<MarketplaceLink>,
    pub demographic: Option<String>,
    pub condition: Option<String>,
    pub image_color: Option<String>,
}

/// Where a product can actually be bought.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketplaceLink {
    pub platform: String,
    pub url: String,
}

/// An image or embedded video derived from one entry of `images`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub original: String,
    pub thumbnail: String,
    pub is_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Normalized copies of the searchable fields. Never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFields {
    pub name: String,
    pub brand: String,
    pub manufacturer: String,
    pub collection: String,
    pub product_type: String,
    pub description: String,
    pub years: Vec<String>,
}

/// A product with every derived field computed. Immutable once the
/// [`Catalogue`](crate::Catalogue) is built.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: Option<String>,
    pub manufacturer: Option<String>,
    pub collection: String,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub release_date: Option<i32>,
    pub price: f64,
    pub stock: i64,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub links: Vec<MarketplaceLink>,
    pub demographic: Option<String>,
    pub condition: Option<String>,
    pub image_color: String,

    pub collection_slug: String,
    pub item_slug: String,
    pub full_slug: String,
    pub decade: String,
    pub is_sold: bool,
    pub media: Vec<MediaItem>,
    pub main_image: Option<String>,
    pub schema_condition: String,
    pub related_ids: Vec<ProductId>,

    #[serde(skip)]
    pub search: SearchFields,
}

impl EnrichedProduct {
    pub fn in_stock(&self) -> bool {
        !self.is_sold
    }

    /// Release year as used for slugs and year tokens. A zero year is
    /// treated the same as a missing one.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.filter(|y| *y != 0)
    }
}

/// A product paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProduct<'a> {
    #[serde(flatten)]
    pub product: &'a EnrichedProduct,
    pub score: u32,
}

impl<'a> ScoredProduct<'a> {
    pub fn unscored(product: &'a EnrichedProduct) -> Self {
        ScoredProduct { product, score: 0 }
    }
}

/// A filterable dimension of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetKind {
    Collection,
    Era,
    Type,
}

impl FacetKind {
    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::Collection => "Collection",
            FacetKind::Era => "Era",
            FacetKind::Type => "Type",
        }
    }
}

/// Facet values still reachable under the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailableFacets {
    pub collections: Vec<String>,
    pub decades: Vec<String>,
    pub types: Vec<String>,
}

impl AvailableFacets {
    pub fn contains(&self, kind: FacetKind, value: &str) -> bool {
        let values = match kind {
            FacetKind::Collection => &self.collections,
            FacetKind::Era => &self.decades,
            FacetKind::Type => &self.types,
        };
        values.iter().any(|v| v == value)
    }
}

/// One page of an ordered result list ("load more" pagination).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<'a> {
    pub hits: Vec<ScoredProduct<'a>>,
    pub total: usize,
    pub has_more: bool,
}
