use thiserror::Error;

/// Failures inside the page controllers. None of them reach the visitor:
/// callers log and fall back to defaults or no-ops.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("preference storage unavailable")]
    StorageUnavailable,
    #[error("preference storage rejected write of {key}")]
    StorageWrite { key: String },
}
