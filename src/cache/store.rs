// Cache store for reading and writing daily datasets.
// Handles JSON serialization and filesystem operations; one file per
// (dataset, date) key.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

use super::paths;

/// On-disk cache keyed by an explicit root directory and date. Files are
/// immutable once written for a given day; a re-fetch on the same date
/// only happens on explicit cache bypass, which overwrites.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
    date: NaiveDate,
}

impl CacheStore {
    pub fn new(root: PathBuf, date: NaiveDate) -> Self {
        Self { root, date }
    }

    fn path(&self, file: &str) -> PathBuf {
        paths::dataset_path(&self.root, self.date, file)
    }

    /// Read a dataset for this store's date. Returns `None` when the file
    /// is absent or does not parse as the expected shape; a corrupt cache
    /// file counts as a miss.
    pub fn read<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let contents = fs::read_to_string(self.path(file)).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Write a dataset as pretty-printed JSON, creating the day directory
    /// as needed. Overwrites any existing file for the key. The rename at
    /// the end keeps a half-written file from ever being readable.
    pub fn write<T: Serialize>(&self, file: &str, data: &T) -> Result<()> {
        let path = self.path(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let temp_path = path.with_extension("tmp");
        let mut out = fs::File::create(&temp_path)?;
        out.write_all(json.as_bytes())?;
        out.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}
