// Runtime configuration sourced from the environment.
// Slack credentials are opaque tokens; both must be present before any
// network call is attempted.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EmojiboardError, Result};

/// Request-time token plus the `d` session cookie value.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub cookie: String,
}

/// Retry behavior for rate-limited requests.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum attempts for a single request before giving up with
    /// `RetryExhausted`.
    pub max_attempts: u32,
    /// Sleep between attempts after a 429.
    pub backoff: Duration,
    /// Proactive pacing between cursor-mode page requests.
    pub page_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            backoff: Duration::from_secs(1),
            page_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Policy with no sleeping, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Duration::ZERO,
            page_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace base URL, e.g. "https://example.slack.com".
    pub base_url: String,
    pub credentials: Credentials,
    /// Root of the per-day cache tree.
    pub cache_root: PathBuf,
    pub retry: RetryPolicy,
}

impl Config {
    /// Build a config from SLACK_PARAM_TOKEN, SLACK_COOKIE_D and
    /// SLACK_DOMAIN. Empty values count as missing.
    pub fn from_env() -> Result<Self> {
        let token = require_env("SLACK_PARAM_TOKEN")?;
        let cookie = require_env("SLACK_COOKIE_D")?;
        let domain = require_env("SLACK_DOMAIN")?;

        Ok(Self {
            base_url: format!("https://{}", domain),
            credentials: Credentials { token, cookie },
            cache_root: PathBuf::from("cache"),
            retry: RetryPolicy::default(),
        })
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(EmojiboardError::MissingCredential(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy_is_bounded() {
        let policy = RetryPolicy::default();
        assert!(policy.max_attempts > 0);
        assert_eq!(policy.backoff, Duration::from_secs(1));
        assert_eq!(policy.page_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_immediate_policy_never_sleeps() {
        let policy = RetryPolicy::immediate(3);
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.backoff, Duration::ZERO);
        assert_eq!(policy.page_delay, Duration::ZERO);
    }
}
