use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec;
use crate::error::StoreError;
use crate::table::Table;
use crate::traits::TableSpec;

/// TableStore owns the data directory holding one CSV file per table.
///
/// Loading is permissive: a missing or undecodable file yields the built-in
/// seed rows for that table instead of an error. Saving rewrites the whole
/// file from the in-memory table.
#[derive(Debug, Clone)]
pub struct TableStore {
    dir: PathBuf,
}

impl TableStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the CSV file backing `S`.
    pub fn path_for<S: TableSpec>(&self) -> PathBuf {
        self.dir.join(format!("{}.csv", S::FILE_STEM))
    }

    /// Load a table, substituting its seed rows when the file is missing,
    /// unreadable, or does not decode.
    pub fn load_or_seed<S: TableSpec>(&self) -> Table<S> {
        let path = self.path_for::<S>();
        if !path.is_file() {
            debug!("{:?} not found, seeding {} table", path, S::FILE_STEM);
            return Table::from_rows(S::seed());
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to read {:?}: {}, seeding {} table", path, e, S::FILE_STEM);
                return Table::from_rows(S::seed());
            }
        };

        match codec::from_csv_str::<S>(&text) {
            Ok(rows) => Table::from_rows(rows),
            Err(e) => {
                warn!("{}, seeding {} table", e, S::FILE_STEM);
                Table::from_rows(S::seed())
            }
        }
    }

    /// Persist the whole table to its CSV file.
    pub fn save<S: TableSpec>(&self, table: &Table<S>) -> Result<(), StoreError> {
        let text = codec::to_csv_string::<S>(table.rows())?;
        fs::write(self.path_for::<S>(), text)
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq)]
    struct Loaf {
        name: String,
        weight: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct LoafRow {
        #[serde(rename = "Nom")]
        name: String,
        #[serde(rename = "Poids")]
        weight: f64,
    }

    impl TableSpec for Loaf {
        const FILE_STEM: &'static str = "loaves";
        const HEADERS: &'static [&'static str] = &["Nom", "Poids"];
        type Row = LoafRow;

        fn to_row(&self) -> LoafRow {
            LoafRow { name: self.name.clone(), weight: self.weight }
        }

        fn from_row(row: LoafRow) -> Self {
            Self { name: row.name, weight: row.weight }
        }

        fn seed() -> Vec<Self> {
            vec![Loaf { name: "boule".into(), weight: 0.5 }]
        }
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        let table = store.load_or_seed::<Loaf>();
        assert_eq!(table.rows(), &Loaf::seed());
    }

    #[test]
    fn undecodable_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        fs::write(store.path_for::<Loaf>(), "Nom,Poids\nbatard,lourd\n").unwrap();
        let table = store.load_or_seed::<Loaf>();
        assert_eq!(table.rows(), &Loaf::seed());
    }

    #[test]
    fn save_then_load_restores_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();

        let mut table = Table::new();
        table.push(Loaf { name: "ficelle".into(), weight: 0.125 });
        table.push(Loaf { name: "miche".into(), weight: 1.0 });
        store.save(&table).unwrap();

        let reloaded = store.load_or_seed::<Loaf>();
        assert_eq!(reloaded.rows(), table.rows());
    }

    #[test]
    fn save_keeps_header_for_emptied_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        store.save(&Table::<Loaf>::new()).unwrap();
        let text = fs::read_to_string(store.path_for::<Loaf>()).unwrap();
        assert_eq!(text, "Nom,Poids\n");
    }
}
