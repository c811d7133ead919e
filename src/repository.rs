// Dataset repositories: cache-first access to users and emoji.
// A cache miss triggers a full paginated fetch, dataset-specific filtering,
// then a write-through before returning.

use std::collections::BTreeMap;

use indicatif::ProgressBar;

use crate::cache::{CacheStore, EMOJIS_FILE, USER_ID_MAP_FILE};
use crate::error::Result;
use crate::slack::{Emoji, SlackClient, Transport};

pub struct Repository<T: Transport> {
    client: SlackClient<T>,
    cache: CacheStore,
}

impl<T: Transport> Repository<T> {
    pub fn new(client: SlackClient<T>, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    /// Map of user id to leaderboard-facing name. Soft-deleted members are
    /// dropped before the map is cached.
    pub async fn user_map(&self, use_cache: bool) -> Result<BTreeMap<String, String>> {
        if use_cache {
            if let Some(map) = self.cache.read(USER_ID_MAP_FILE) {
                println!("Reading user id map from cache...");
                return Ok(map);
            }
        }

        let bar = ProgressBar::new_spinner();
        bar.set_message("Fetching user info from Slack");
        let members = self.client.list_users(&bar).await?;
        bar.finish();

        let map: BTreeMap<String, String> = members
            .iter()
            .filter(|u| !u.deleted)
            .map(|u| (u.id.clone(), u.leaderboard_name().to_string()))
            .collect();

        println!("Writing user data to cache...");
        self.cache.write(USER_ID_MAP_FILE, &map)?;

        Ok(map)
    }

    /// All custom emoji, aliases excluded. The filter runs before the
    /// write-through, so a cache hit never contains alias records.
    pub async fn emojis(&self, use_cache: bool) -> Result<Vec<Emoji>> {
        if use_cache {
            if let Some(emojis) = self.cache.read(EMOJIS_FILE) {
                println!("Reading emojis from cache...");
                return Ok(emojis);
            }
        }

        let bar = ProgressBar::new_spinner();
        bar.set_message("Fetching emojis from Slack");
        let fetched = self.client.admin_list_emoji(&bar).await?;
        bar.finish();

        let emojis: Vec<Emoji> = fetched.into_iter().filter(|e| !e.is_alias()).collect();

        println!("Writing emoji data to cache...");
        self.cache.write(EMOJIS_FILE, &emojis)?;

        Ok(emojis)
    }
}
