//! Benchmark display registry.
//!
//! The tables are driven by a static registry, not by the CSV: every
//! registered benchmark gets a row (with `?` placeholders when no data was
//! collected for it), and data for unregistered benchmarks is silently
//! omitted. The registry fixes both the set of rows and their order, so the
//! camera-ready tables stay stable across runs.
//!
//! Two sections exist: a realizable section grouped by benchmark class, and
//! an unrealizable section with the same grouping but rendered without a
//! class column. The registry is loaded once (builtin or from TOML) and is
//! immutable for the run.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Printable labels for one registered benchmark.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegistryEntry {
    /// Benchmark file stem within its class directory (no extension).
    pub file: String,
    /// Class label shown in the table.
    pub class_label: String,
    /// Benchmark name shown in the table.
    pub name: String,
}

/// An ordered group of benchmarks sharing a class directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegistryGroup {
    /// Class directory key; benchmark ids are `<key>/<file>`.
    pub key: String,
    /// Benchmarks in display order.
    pub entries: Vec<RegistryEntry>,
}

/// The full display registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayRegistry {
    /// Groups shown in the realizable table, in display order.
    pub realizable: Vec<RegistryGroup>,
    /// Groups shown in the unrealizable table, in display order.
    pub unrealizable: Vec<RegistryGroup>,
}

impl RegistryGroup {
    /// Benchmark id for one of this group's entries.
    pub fn benchmark_id(&self, entry: &RegistryEntry) -> String {
        format!("{}/{}", self.key, entry.file)
    }
}

impl DisplayRegistry {
    /// The registry for the current benchmark suite.
    pub fn builtin() -> Self {
        fn entry(file: &str, class_label: &str, name: &str) -> RegistryEntry {
            RegistryEntry {
                file: file.to_string(),
                class_label: class_label.to_string(),
                name: name.to_string(),
            }
        }

        Self {
            realizable: vec![
                RegistryGroup {
                    key: "tree".to_string(),
                    entries: vec![
                        entry("sumtree", "Tree", "sum"),
                        entry("maxtree", "Tree", "max"),
                        entry("mintree", "Tree", "min"),
                        entry("maxtree2", "Tree", "max (alt)"),
                    ],
                },
                RegistryGroup {
                    key: "list".to_string(),
                    entries: vec![
                        entry("sumhom", "List", "sum"),
                        entry("lenhom", "List", "length"),
                    ],
                },
            ],
            unrealizable: vec![RegistryGroup {
                key: "unrealizable".to_string(),
                entries: vec![
                    entry("minhom", "List", "min"),
                    entry("issorted", "List", "is sorted"),
                ],
            }],
        }
    }

    /// Load a registry from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let registry: DisplayRegistry = toml::from_str(&contents)?;
        Ok(registry)
    }

    /// Save the registry to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Total number of registered realizable benchmarks.
    pub fn realizable_count(&self) -> usize {
        self.realizable.iter().map(|g| g.entries.len()).sum()
    }

    /// Total number of registered unrealizable benchmarks.
    pub fn unrealizable_count(&self) -> usize {
        self.unrealizable.iter().map(|g| g.entries.len()).sum()
    }
}
