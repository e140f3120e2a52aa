//! # Loftloot
//!
//! In-memory catalogue index and query engine for a vintage-toy storefront.
//! Turns the static product file into enriched, slugged, cross-linked
//! products and answers search, facet, autocomplete and routing questions
//! over them.
//!
//! The engine is synchronous and read-only after build. Every query borrows
//! from the [`Catalogue`] and allocates fresh output.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use loftloot::{Catalogue, CatalogueSettings, SearchFilters, SortStrategy};
//!
//! # fn main() -> loftloot::Result<()> {
//! let catalogue = Catalogue::load("products.json", CatalogueSettings::default())?;
//!
//! let hits = catalogue.executor().search_sorted(
//!     "thundercats 80s",
//!     &SearchFilters::in_stock_only(),
//!     SortStrategy::PriceLow,
//! );
//! for hit in &hits {
//!     println!("{} ({})", hit.product.name, hit.product.full_slug);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Type-ahead
//!
//! ```rust,no_run
//! use loftloot::{Catalogue, CatalogueSettings};
//!
//! # fn main() -> loftloot::Result<()> {
//! let catalogue = Catalogue::load("products.json", CatalogueSettings::default())?;
//! let suggestions = catalogue.executor().autocomplete("lio", false);
//! println!("{} products match", suggestions.total_products);
//! # Ok(())
//! # }
//! ```

pub mod catalogue;
pub mod error;
pub mod query;
pub mod tokenizer;
pub mod types;

pub use catalogue::settings::{AutocompleteSettings, CatalogueSettings, RelatedSettings, TypeLabel};
pub use catalogue::{Catalogue, Route};
pub use error::{CatalogueError, Result};
pub use query::{
    AutocompleteResult, FacetSelection, FacetSuggestion, PriceRange, ProductSuggestion,
    QueryExecutor, QueryParser, SearchFilters, SearchParams, Snippet, SnippetField, SortStrategy,
};
pub use types::*;
