use crate::query::executor::SortStrategy;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_hits_per_page() -> usize {
    12
}

fn default_collection() -> String {
    "Other".to_string()
}

fn default_image_color() -> String {
    "cbd5e1".to_string()
}

/// Display names for a product type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeLabel {
    pub shorthand: String,
    pub plural: String,
}

impl TypeLabel {
    fn new(shorthand: &str, plural: &str) -> Self {
        TypeLabel {
            shorthand: shorthand.to_string(),
            plural: plural.to_string(),
        }
    }
}

fn default_type_labels() -> IndexMap<String, TypeLabel> {
    [
        ("Action Figure", TypeLabel::new("Figures", "Action Figures")),
        ("Playset", TypeLabel::new("Playsets", "Playsets")),
        ("Vehicle", TypeLabel::new("Vehicles", "Vehicles")),
        ("Plush", TypeLabel::new("Plush", "Plush Toys")),
        ("Art Toy", TypeLabel::new("Art Toys", "Art Toys")),
        ("Home Decor", TypeLabel::new("Decor", "Home Decor")),
        ("Electronics", TypeLabel::new("Electronics", "Electronics")),
        ("Board Game", TypeLabel::new("Board Games", "Board Games")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// How many related products to keep per product.
///
/// The list grows when the catalogue has many close matches: at least
/// `strong_count` candidates scoring `strong_score` or more raise the limit
/// to `expanded_limit`, and more than `super_count` candidates scoring
/// `super_score` or more raise it to that count, capped at `max_limit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedSettings {
    pub default_limit: usize,
    pub expanded_limit: usize,
    pub max_limit: usize,
    pub strong_score: u32,
    pub strong_count: usize,
    pub super_score: u32,
    pub super_count: usize,
}

impl Default for RelatedSettings {
    fn default() -> Self {
        RelatedSettings {
            default_limit: 5,
            expanded_limit: 10,
            max_limit: 20,
            strong_score: 10,
            strong_count: 5,
            super_score: 18,
            super_count: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteSettings {
    pub min_query_length: usize,
    pub max_filters: usize,
    pub max_products: usize,
    /// Characters of description kept before a snippet match.
    pub snippet_before: usize,
    /// Characters of description kept after a snippet match.
    pub snippet_after: usize,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        AutocompleteSettings {
            min_query_length: 2,
            max_filters: 6,
            max_products: 5,
            snippet_before: 20,
            snippet_after: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogueSettings {
    pub related: RelatedSettings,
    pub autocomplete: AutocompleteSettings,

    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: usize,

    pub default_sort: SortStrategy,

    /// Collection assigned to products that have none.
    #[serde(default = "default_collection")]
    pub default_collection: String,

    /// Prefix for site-relative image paths.
    pub public_url: String,

    #[serde(default = "default_image_color")]
    pub default_image_color: String,

    pub type_labels: IndexMap<String, TypeLabel>,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        CatalogueSettings {
            related: RelatedSettings::default(),
            autocomplete: AutocompleteSettings::default(),
            hits_per_page: default_hits_per_page(),
            default_sort: SortStrategy::default(),
            default_collection: default_collection(),
            public_url: String::new(),
            default_image_color: default_image_color(),
            type_labels: default_type_labels(),
        }
    }
}

impl CatalogueSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: CatalogueSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::CatalogueError;

        if self.hits_per_page == 0 {
            return Err(CatalogueError::Config(
                "hitsPerPage must be at least 1".to_string(),
            ));
        }
        let related = &self.related;
        if related.default_limit > related.expanded_limit
            || related.expanded_limit > related.max_limit
        {
            return Err(CatalogueError::Config(format!(
                "related limits must satisfy defaultLimit <= expandedLimit <= maxLimit (got {}, {}, {})",
                related.default_limit, related.expanded_limit, related.max_limit
            )));
        }
        if self.default_collection.trim().is_empty() {
            return Err(CatalogueError::Config(
                "defaultCollection must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Plural display label for a type, falling back to the type itself.
    pub fn type_plural<'a>(&'a self, product_type: &'a str) -> &'a str {
        self.type_labels
            .get(product_type)
            .map(|l| l.plural.as_str())
            .unwrap_or(product_type)
    }
}
