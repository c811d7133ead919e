// Cache module for local filesystem caching.
// Stores one JSON file per dataset per calendar day.

pub mod paths;
pub mod store;

pub use paths::{EMOJIS_FILE, USER_ID_MAP_FILE};
pub use store::CacheStore;
