// Slack API response types.
// Defines structs for deserializing users.list and emoji.adminList pages.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Workspace member from users.list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub real_name: String,
}

impl User {
    /// Leaderboard-facing name: display name, falling back to the real
    /// name when the display name is unset.
    pub fn leaderboard_name(&self) -> &str {
        if self.profile.display_name.is_empty() {
            &self.profile.real_name
        } else {
            &self.profile.display_name
        }
    }
}

/// Custom emoji record from emoji.adminList.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
    /// Slack sends 0/1, not a bool.
    #[serde(default)]
    pub is_alias: u8,
    #[serde(default)]
    pub alias_for: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Upload time, seconds since the epoch.
    pub created: i64,
    #[serde(default)]
    pub user_display_name: String,
}

impl Emoji {
    pub fn is_alias(&self) -> bool {
        self.is_alias == 1
    }
}

/// How the fetch loop should advance after consuming a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAdvance {
    /// Opaque cursor for the next request; empty string means done.
    Cursor(String),
    /// Total page count declared by the server up front.
    Pages(u32),
}

/// One page of a paginated Slack response.
pub trait Paginated: DeserializeOwned {
    type Record;

    /// Application-level success flag.
    fn is_ok(&self) -> bool;

    /// Pagination directive carried by this page.
    fn advance(&self) -> PageAdvance;

    /// Declared total record count, when the server provides one.
    fn total(&self) -> Option<u64> {
        None
    }

    fn into_records(self) -> Vec<Self::Record>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

/// users.list page envelope.
#[derive(Debug, Deserialize)]
pub struct UsersListPage {
    pub ok: bool,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

impl Paginated for UsersListPage {
    type Record = User;

    fn is_ok(&self) -> bool {
        self.ok
    }

    fn advance(&self) -> PageAdvance {
        PageAdvance::Cursor(self.response_metadata.next_cursor.clone())
    }

    fn into_records(self) -> Vec<User> {
        self.members
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

/// emoji.adminList page envelope.
#[derive(Debug, Deserialize)]
pub struct EmojiAdminListPage {
    pub ok: bool,
    #[serde(default)]
    pub emoji: Vec<Emoji>,
    #[serde(default)]
    pub paging: Paging,
}

impl Paginated for EmojiAdminListPage {
    type Record = Emoji;

    fn is_ok(&self) -> bool {
        self.ok
    }

    fn advance(&self) -> PageAdvance {
        PageAdvance::Pages(self.paging.pages)
    }

    fn total(&self) -> Option<u64> {
        Some(self.paging.total)
    }

    fn into_records(self) -> Vec<Emoji> {
        self.emoji
    }
}
