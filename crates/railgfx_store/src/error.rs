use thiserror::Error;

/// Errors surfaced by the configuration store.
///
/// A missing configuration on read is not an error; see
/// [`crate::GraphicsStore::read`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("registry key '{path}' is not accessible")]
    RootKeyMissing { path: String },

    #[error("no registry value name starts with '{prefix}'")]
    ValueNameMissing { prefix: String },

    #[error("{0} is not a valid graphics preset ordinal")]
    InvalidPreset(u32),

    #[error("failed to encode registry value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("registry access failed: {0}")]
    Io(#[from] std::io::Error),
}
