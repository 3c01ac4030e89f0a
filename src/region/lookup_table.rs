use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::region::{data::NIGERIAN_LGAS, error::TableError};

static BUILTIN: LazyLock<RegionLookupTable> = LazyLock::new(|| {
    let table = RegionLookupTable::from_static(NIGERIAN_LGAS);
    debug!(regions = table.len(), "builtin region table initialised");
    table
});

/// A top-level division and its subdivisions in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub subdivisions: Vec<String>,
}

/// Read-only mapping from region name to its ordered subdivision list.
///
/// Lookups are exact and case-sensitive. A missing key is reported as
/// `None`, never as an error. There is no way to mutate a table once it
/// has been built.
#[derive(Debug, Clone)]
pub struct RegionLookupTable {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl RegionLookupTable {
    /// The process-wide builtin table (Nigerian states and their LGAs).
    pub fn builtin() -> &'static RegionLookupTable {
        &BUILTIN
    }

    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let mut regions = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for (name, subdivisions) in entries {
            index.insert(name.to_string(), regions.len());
            regions.push(Region {
                name: name.to_string(),
                subdivisions: subdivisions.iter().map(|s| s.to_string()).collect(),
            });
        }
        Self { regions, index }
    }

    /// Build a table from `(region, subdivisions)` pairs, keeping their order.
    ///
    /// Region and subdivision names must be non-empty: an empty option value
    /// is reserved for the placeholder. A table with no regions is rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let mut regions = Vec::new();
        let mut index = HashMap::new();

        for (name, subdivisions) in entries {
            let name = name.into();
            if name.is_empty() {
                return Err(TableError::EmptyRegionName);
            }
            if index.contains_key(&name) {
                return Err(TableError::DuplicateRegion(name));
            }
            if subdivisions.iter().any(|s| s.is_empty()) {
                return Err(TableError::EmptySubdivision { region: name });
            }
            index.insert(name.clone(), regions.len());
            regions.push(Region { name, subdivisions });
        }

        if regions.is_empty() {
            return Err(TableError::EmptyTable);
        }

        Ok(Self { regions, index })
    }

    /// Parse a YAML mapping of `region: [subdivision, ...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TableError> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(yaml)?;
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name: String = serde_yaml::from_value(key)?;
            let subdivisions: Vec<String> = serde_yaml::from_value(value)?;
            entries.push((name, subdivisions));
        }
        Self::from_entries(entries)
    }

    /// Load a YAML table file from disk.
    pub fn load(path: &str) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_string(),
            source,
        })?;
        let table = Self::from_yaml_str(&content)?;
        debug!(path, regions = table.len(), "loaded region table");
        Ok(table)
    }

    pub fn lookup(&self, region: &str) -> Option<&[String]> {
        self.index
            .get(region)
            .map(|&i| self.regions[i].subdivisions.as_slice())
    }

    pub fn contains(&self, region: &str) -> bool {
        self.index.contains_key(region)
    }

    /// Region names in authoring order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn entries(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
