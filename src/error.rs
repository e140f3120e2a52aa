use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogueError {
    #[error("Product at position {position} (id {id:?}) is missing required field: {field}")]
    MissingField {
        position: usize,
        id: Option<i64>,
        field: String,
    },

    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: i64, reason: String },

    #[error("Duplicate product id: {0}")]
    DuplicateId(i64),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

impl From<std::io::Error> for CatalogueError {
    fn from(e: std::io::Error) -> Self {
        CatalogueError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(e: serde_json::Error) -> Self {
        CatalogueError::Json(e.to_string())
    }
}

impl CatalogueError {
    /// Data errors come from the catalogue file itself; everything else is
    /// an environment or caller problem.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CatalogueError::MissingField { .. }
                | CatalogueError::InvalidProduct { .. }
                | CatalogueError::DuplicateId(_)
                | CatalogueError::Json(_)
        )
    }

    /// Short machine-readable code, mirrored in CLI error output.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogueError::MissingField { .. } => "missing_field",
            CatalogueError::InvalidProduct { .. } => "invalid_product",
            CatalogueError::DuplicateId(_) => "duplicate_id",
            CatalogueError::InvalidQuery(_) => "invalid_query",
            CatalogueError::Io(_) => "io_error",
            CatalogueError::Json(_) => "json_error",
            CatalogueError::Config(_) => "config_error",
        }
    }
}
