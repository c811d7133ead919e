// Cache path utilities.
// Constructs filesystem paths for the per-day cache tree.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// File holding the user id -> display name map.
pub const USER_ID_MAP_FILE: &str = "user_id_map.json";

/// File holding the alias-filtered emoji list.
pub const EMOJIS_FILE: &str = "emojis.json";

/// Directory for one day's cache: `<root>/<YYYY-MM-DD>`.
pub fn day_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y-%m-%d").to_string())
}

/// Path of a named dataset file within one day's cache.
pub fn dataset_path(root: &Path, date: NaiveDate, file: &str) -> PathBuf {
    day_dir(root, date).join(file)
}
