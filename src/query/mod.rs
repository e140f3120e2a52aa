pub mod autocomplete;
pub mod executor;
pub mod filter;
pub mod highlighter;
pub mod params;
pub mod parser;

pub use autocomplete::{AutocompleteResult, FacetSuggestion, ProductSuggestion};
pub use executor::{QueryExecutor, SortStrategy};
pub use filter::{FacetSelection, PriceRange, SearchFilters};
pub use highlighter::{Highlighter, Snippet, SnippetField};
pub use params::SearchParams;
pub use parser::{ParsedQuery, QueryParser};
