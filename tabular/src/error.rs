use thiserror::Error;

/// Errors from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabularError {
    /// Column resolution was asked for a data source with no registry.
    /// This is a caller/configuration bug, not a recoverable condition.
    #[error("no column metadata registered for data source: {key}")]
    UnknownDataSource {
        /// The key that failed to resolve.
        key: String,
    },
}

impl TabularError {
    pub fn unknown_data_source(key: impl Into<String>) -> Self {
        Self::UnknownDataSource { key: key.into() }
    }
}
