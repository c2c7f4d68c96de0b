//! The four static lookup tables, keyed for direct access.
//!
//! The data files are arrays of records. On load each array is folded into a
//! hash map; when a key repeats, the first row wins, the same row a linear
//! scan would have found.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{FortuneError, FortuneResult};
use crate::record::{Level, NumberMapping, Solution};

/// File name of the single (0-9999) mapping table.
pub const MAPPING_SINGLE_FILE: &str = "mapping_single.json";
/// File name of the double (0-99) mapping table.
pub const MAPPING_DOUBLE_FILE: &str = "mapping_double.json";
/// File name of the solutions table.
pub const SOLUTIONS_FILE: &str = "solutions.json";
/// File name of the levels table.
pub const LEVELS_FILE: &str = "levels.json";

/// Which number mapping a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    /// Two-digit table, numbers 0-99.
    Double,
    /// Four-digit table, numbers 0-9999.
    Single,
}

impl std::fmt::Display for MappingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Double => write!(f, "double"),
            Self::Single => write!(f, "single"),
        }
    }
}

/// Row counts of a loaded table set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Distinct numbers in the single mapping.
    pub single: usize,
    /// Distinct numbers in the double mapping.
    pub double: usize,
    /// Distinct identifiers in the solutions table.
    pub solutions: usize,
    /// Distinct identifiers in the levels table.
    pub levels: usize,
}

/// Immutable lookup tables for fortune resolution.
#[derive(Debug, Clone, Default)]
pub struct FortuneTables {
    single: HashMap<i64, NumberMapping>,
    double: HashMap<i64, NumberMapping>,
    solutions: HashMap<String, Solution>,
    levels: HashMap<String, Level>,
}

impl FortuneTables {
    /// Build tables from already parsed records.
    pub fn from_records(
        single: Vec<NumberMapping>,
        double: Vec<NumberMapping>,
        solutions: Vec<Solution>,
        levels: Vec<Level>,
    ) -> Self {
        Self {
            single: key_first(single, |m| m.number),
            double: key_first(double, |m| m.number),
            solutions: key_first(solutions, |s| s.identifier.clone()),
            levels: key_first(levels, |l| l.identifier.clone()),
        }
    }

    /// Load all four tables from a data directory.
    pub fn load_dir(dir: &Path) -> FortuneResult<Self> {
        let single = read_records(&dir.join(MAPPING_SINGLE_FILE))?;
        let double = read_records(&dir.join(MAPPING_DOUBLE_FILE))?;
        let solutions = read_records(&dir.join(SOLUTIONS_FILE))?;
        let levels = read_records(&dir.join(LEVELS_FILE))?;

        let tables = Self::from_records(single, double, solutions, levels);
        let stats = tables.stats();
        info!(
            dir = %dir.display(),
            single = stats.single,
            double = stats.double,
            solutions = stats.solutions,
            levels = stats.levels,
            "loaded fortune tables"
        );
        Ok(tables)
    }

    /// Look up a number in one of the mappings.
    pub fn mapping(&self, kind: MappingKind, number: i64) -> Option<&NumberMapping> {
        match kind {
            MappingKind::Double => self.double.get(&number),
            MappingKind::Single => self.single.get(&number),
        }
    }

    /// Fortune text for an identifier.
    pub fn solution(&self, identifier: &str) -> Option<&Solution> {
        self.solutions.get(identifier)
    }

    /// Tier label for an identifier.
    pub fn level(&self, identifier: &str) -> Option<&Level> {
        self.levels.get(identifier)
    }

    /// Row counts per table.
    pub fn stats(&self) -> TableStats {
        TableStats {
            single: self.single.len(),
            double: self.double.len(),
            solutions: self.solutions.len(),
            levels: self.levels.len(),
        }
    }
}

fn key_first<K, T>(rows: Vec<T>, key: impl Fn(&T) -> K) -> HashMap<K, T>
where
    K: std::hash::Hash + Eq,
{
    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
        map.entry(key(&row)).or_insert(row);
    }
    map
}

fn read_records<T: DeserializeOwned>(path: &Path) -> FortuneResult<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|source| FortuneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<T> = serde_json::from_str(&content).map_err(|source| FortuneError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}
