// Command-line interface for emojiboard.
// Parses flags with clap and resolves them into a single time-window
// cutoff. The window flags are mutually exclusive; giving more than one is
// a usage error.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use clap::Parser;

const DAY_SECS: i64 = 24 * 60 * 60;

/// Leaderboard of custom emoji uploaders for a Slack workspace.
#[derive(Parser, Debug)]
#[command(name = "emojiboard")]
#[command(about = "Show the top custom emoji uploaders for a Slack workspace")]
#[command(version)]
pub struct Cli {
    /// Count uploads from this many days ago. Defaults to all time.
    #[arg(long, value_name = "NUM", group = "window")]
    pub days: Option<i64>,

    /// Count uploads from this many weeks ago. Defaults to all time.
    #[arg(long, value_name = "NUM", group = "window")]
    pub weeks: Option<i64>,

    /// Count uploads from this many years ago. Defaults to all time.
    #[arg(long, value_name = "NUM", group = "window")]
    pub years: Option<i64>,

    /// Count uploads since the given date, starting at midnight local time.
    #[arg(long, value_name = "YYYY-MM-DD", group = "window")]
    pub since: Option<NaiveDate>,

    /// Show the top NUM uploaders. Defaults to showing all.
    #[arg(long, value_name = "NUM")]
    pub top: Option<usize>,

    /// Skip the cache even if it exists and query Slack.
    #[arg(long)]
    pub cache_bust: bool,
}

impl Cli {
    /// Resolve the window flags into an epoch-seconds cutoff relative to
    /// `now`. Zero means all time. Years count as 365 days.
    pub fn window_cutoff(&self, now: DateTime<Local>) -> i64 {
        if let Some(days) = self.days {
            return now.timestamp() - days * DAY_SECS;
        }
        if let Some(weeks) = self.weeks {
            return now.timestamp() - weeks * 7 * DAY_SECS;
        }
        if let Some(years) = self.years {
            return now.timestamp() - years * 365 * DAY_SECS;
        }
        if let Some(date) = self.since {
            let midnight = date.and_time(NaiveTime::MIN);
            return match Local.from_local_datetime(&midnight).earliest() {
                Some(t) => t.timestamp(),
                // Midnight fell in a DST gap; UTC midnight is close enough.
                None => midnight.and_utc().timestamp(),
            };
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000, 0).single().unwrap()
    }

    #[test]
    fn test_no_flags_means_all_time() {
        let cli = Cli::parse_from(["emojiboard"]);
        assert_eq!(cli.window_cutoff(now()), 0);
        assert_eq!(cli.top, None);
        assert!(!cli.cache_bust);
    }

    #[test]
    fn test_days_window() {
        let cli = Cli::parse_from(["emojiboard", "--days", "3"]);
        assert_eq!(cli.window_cutoff(now()), 1_700_000_000 - 3 * DAY_SECS);
    }

    #[test]
    fn test_weeks_window() {
        let cli = Cli::parse_from(["emojiboard", "--weeks", "2"]);
        assert_eq!(cli.window_cutoff(now()), 1_700_000_000 - 14 * DAY_SECS);
    }

    #[test]
    fn test_years_window_uses_365_days() {
        let cli = Cli::parse_from(["emojiboard", "--years", "1"]);
        assert_eq!(cli.window_cutoff(now()), 1_700_000_000 - 365 * DAY_SECS);
    }

    #[test]
    fn test_since_is_local_midnight() {
        let cli = Cli::parse_from(["emojiboard", "--since", "2023-08-01"]);
        let date = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        let expected = Local
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest()
            .unwrap()
            .timestamp();
        assert_eq!(cli.window_cutoff(now()), expected);
    }

    #[test]
    fn test_invalid_since_date_rejected() {
        let result = Cli::try_parse_from(["emojiboard", "--since", "not-a-date"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_multiple_window_flags_rejected() {
        let result = Cli::try_parse_from(["emojiboard", "--days", "1", "--weeks", "2"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["emojiboard", "--years", "1", "--since", "2023-01-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_top_and_cache_bust() {
        let cli = Cli::parse_from(["emojiboard", "--top", "5", "--cache-bust"]);
        assert_eq!(cli.top, Some(5));
        assert!(cli.cache_bust);
    }
}
