//! The catalogue snapshot: enriched products plus every lookup the query
//! engine and the router need.
//!
//! A [`Catalogue`] is built once from the raw product file and is read-only
//! afterwards. Filtering, sorting and search all produce new views that
//! borrow from it.

pub mod enrich;
pub mod related;
pub mod routes;
pub mod settings;

use crate::error::{CatalogueError, Result};
use crate::query::filter::PriceRange;
use crate::query::QueryExecutor;
use crate::types::{EnrichedProduct, ProductId, RawProduct};
use indexmap::IndexMap;
use settings::CatalogueSettings;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

pub use routes::Route;

#[derive(Debug, Clone)]
pub struct Catalogue {
    products: Vec<EnrichedProduct>,
    by_id: HashMap<ProductId, usize>,
    by_slug: HashMap<String, usize>,
    collection_names: IndexMap<String, String>,
    collections: Vec<String>,
    decades: Vec<String>,
    types: Vec<String>,
    price_bounds: Option<PriceRange>,
    settings: CatalogueSettings,
}

impl Catalogue {
    /// Build a catalogue with default settings.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed record ([`CatalogueError::MissingField`],
    /// [`CatalogueError::InvalidProduct`]) or a repeated id
    /// ([`CatalogueError::DuplicateId`]). No partial catalogue is returned.
    pub fn build(raw: &[RawProduct]) -> Result<Self> {
        Self::build_with_settings(raw, CatalogueSettings::default())
    }

    pub fn build_with_settings(raw: &[RawProduct], settings: CatalogueSettings) -> Result<Self> {
        let t0 = std::time::Instant::now();

        let mut by_id = HashMap::with_capacity(raw.len());
        let mut products = Vec::with_capacity(raw.len());
        for (position, record) in raw.iter().enumerate() {
            if by_id.insert(record.id, position).is_some() {
                return Err(CatalogueError::DuplicateId(record.id));
            }
            products.push(enrich::enrich_product(position, record, &settings)?);
        }

        related::assign_related(&mut products, &settings.related);

        let mut by_slug: HashMap<String, usize> = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if let Some(&existing) = by_slug.get(&product.full_slug) {
                tracing::warn!(
                    slug = %product.full_slug,
                    kept = products[existing].id,
                    dropped = product.id,
                    "Duplicate product slug; later product is unreachable by route"
                );
                continue;
            }
            by_slug.insert(product.full_slug.clone(), idx);
        }

        let mut collection_names = IndexMap::new();
        for product in &products {
            collection_names
                .entry(product.collection_slug.clone())
                .or_insert_with(|| product.collection.clone());
        }

        let collections = sorted_collections(&products, &settings.default_collection);
        let decades: Vec<String> = products
            .iter()
            .map(|p| p.decade.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let types: Vec<String> = products
            .iter()
            .filter_map(|p| p.product_type.clone())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let price_bounds = products
            .iter()
            .map(|p| p.price)
            .fold(None::<PriceRange>, |acc, price| {
                Some(match acc {
                    None => PriceRange::new(price, price),
                    Some(r) => PriceRange::new(r.min.min(price), r.max.max(price)),
                })
            });

        tracing::info!(
            products = products.len(),
            collections = collections.len(),
            decades = decades.len(),
            types = types.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Catalogue built"
        );

        Ok(Catalogue {
            products,
            by_id,
            by_slug,
            collection_names,
            collections,
            decades,
            types,
            price_bounds,
            settings,
        })
    }

    /// Parse a JSON array of products and build the catalogue.
    pub fn from_json_str(json: &str, settings: CatalogueSettings) -> Result<Self> {
        let raw: Vec<RawProduct> = serde_json::from_str(json)?;
        Self::build_with_settings(&raw, settings)
    }

    /// Read and build the catalogue from a product file.
    pub fn load<P: AsRef<Path>>(path: P, settings: CatalogueSettings) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading product file");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content, settings)
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&EnrichedProduct> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// Look up a product by `collectionSlug/itemSlug`.
    pub fn by_slug(&self, full_slug: &str) -> Option<&EnrichedProduct> {
        self.by_slug.get(full_slug).map(|&idx| &self.products[idx])
    }

    /// Display name of a collection given its slug.
    pub fn collection_name(&self, collection_slug: &str) -> Option<&str> {
        self.collection_names
            .get(collection_slug)
            .map(String::as_str)
    }

    /// Collection slugs paired with display names, in first-seen order.
    pub fn collection_slugs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.collection_names
            .iter()
            .map(|(slug, name)| (slug.as_str(), name.as_str()))
    }

    /// Distinct collections, alphabetical, with the default collection last.
    pub fn collections(&self) -> &[String] {
        &self.collections
    }

    pub fn decades(&self) -> &[String] {
        &self.decades
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Cheapest and dearest price across the whole catalogue.
    pub fn price_bounds(&self) -> Option<PriceRange> {
        self.price_bounds
    }

    pub fn settings(&self) -> &CatalogueSettings {
        &self.settings
    }

    /// Related products of `id`, in ranked order.
    pub fn related(&self, id: ProductId) -> Vec<&EnrichedProduct> {
        self.get(id)
            .map(|p| p.related_ids.iter().filter_map(|r| self.get(*r)).collect())
            .unwrap_or_default()
    }

    pub fn executor(&self) -> QueryExecutor<'_> {
        QueryExecutor::new(self)
    }
}

fn sorted_collections(products: &[EnrichedProduct], default_collection: &str) -> Vec<String> {
    let mut collections: Vec<String> = products
        .iter()
        .map(|p| p.collection.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    collections.sort_by(|a, b| {
        let a_default = a == default_collection;
        let b_default = b == default_collection;
        a_default
            .cmp(&b_default)
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b))
    });
    collections
}
