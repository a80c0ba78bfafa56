use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Versions manifest not found")]
    NotFound,

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Versions manifest lists no versions")]
    Empty,
}
