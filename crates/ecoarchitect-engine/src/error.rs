//! Error types for the engine binary.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error so `main` can propagate
/// with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ecoarchitect_core::ConfigError,
    },

    /// The configured catalog could not be loaded.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: ecoarchitect_catalog::CatalogError,
    },

    /// A session operation the engine depends on failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: ecoarchitect_core::SessionError,
    },

    /// The countdown runner stopped without a score.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: ecoarchitect_core::RunnerError,
    },

    /// The score report could not be serialized.
    #[error("report error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
