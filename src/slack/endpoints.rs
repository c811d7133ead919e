// Slack API endpoint functions.
// Provides typed methods for the two paginated endpoints the pipeline uses.

use indicatif::ProgressBar;

use crate::error::Result;

use super::client::{SlackClient, Transport};
use super::types::{Emoji, EmojiAdminListPage, User, UsersListPage};

/// Records requested per page for both endpoints.
const PAGE_SIZE: u32 = 100;

impl<T: Transport> SlackClient<T> {
    /// Fetch all workspace members via cursor-paginated users.list.
    pub async fn list_users(&self, progress: &ProgressBar) -> Result<Vec<User>> {
        let params = vec![("limit".to_string(), PAGE_SIZE.to_string())];
        self.fetch_all::<UsersListPage>("users.list", params, progress)
            .await
    }

    /// Fetch all custom emoji via page-counted emoji.adminList, sorted by
    /// name ascending. Includes alias records; the repository filters them.
    pub async fn admin_list_emoji(&self, progress: &ProgressBar) -> Result<Vec<Emoji>> {
        let params = vec![
            ("page".to_string(), "1".to_string()),
            ("count".to_string(), PAGE_SIZE.to_string()),
            ("sort_by".to_string(), "name".to_string()),
            ("sort_dir".to_string(), "asc".to_string()),
        ];
        self.fetch_all::<EmojiAdminListPage>("emoji.adminList", params, progress)
            .await
    }
}
