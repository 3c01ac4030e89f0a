use thiserror::Error;

/// Failures while building a lookup table from external data.
#[derive(Debug, Error)]
pub enum TableError {
    /// Table file could not be read
    #[error("Failed to read table file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Table file is not a `region: [subdivision, ...]` mapping
    #[error("Invalid table YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The same region appears twice
    #[error("Duplicate region '{0}' in lookup table")]
    DuplicateRegion(String),

    #[error("Region name must not be empty")]
    EmptyRegionName,

    /// An empty name would collide with the placeholder's empty value
    #[error("Region '{region}' lists an empty subdivision name")]
    EmptySubdivision { region: String },

    #[error("Lookup table has no regions")]
    EmptyTable,
}
