//! Error types for the `ecoarchitect-catalog` crate.
//!
//! Only loading an authored catalog can fail; the standard catalog and all
//! lookups are infallible.

use ecoarchitect_types::{AgentType, HabitatType};

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for the expected shape.
    #[error("failed to parse catalog JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Two habitat definitions share a type.
    #[error("duplicate habitat definition: {0}")]
    DuplicateHabitat(HabitatType),

    /// Two agent definitions share a type.
    #[error("duplicate agent definition: {0}")]
    DuplicateAgent(AgentType),

    /// Two scenarios share an id.
    #[error("duplicate scenario id: {0}")]
    DuplicateScenario(String),

    /// A synergy pairs an agent type with itself.
    #[error("synergy pairs {0} with itself")]
    SelfSynergy(AgentType),
}
