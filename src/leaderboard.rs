// Leaderboard engine.
// Pure ranking over emoji records: time filter, group by uploader, sort by
// count descending, optional top-N limit.

use std::collections::HashMap;

use chrono::{Local, TimeZone};

use crate::slack::Emoji;

/// One ranked uploader with every emoji name they contributed inside the
/// time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub contributor: String,
    pub count: usize,
    pub item_names: Vec<String>,
}

/// Ranked output for one run; derived, never persisted.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    /// Limit after the collapse rule; None means every uploader is shown.
    pub top: Option<usize>,
    /// Window cutoff, seconds since the epoch. Zero means all time.
    pub since: i64,
}

/// Rank uploaders by upload count within the window. Groups keep
/// first-appearance order and the sort is stable, so equal counts stay in
/// the order the uploaders were first seen. A `top_n` exceeding the number
/// of distinct uploaders collapses to "show all".
pub fn rank(records: &[Emoji], top_n: Option<usize>, since: i64) -> Leaderboard {
    let mut groups: Vec<(String, Vec<&Emoji>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for emoji in records.iter().filter(|e| e.created >= since) {
        let slot = *index
            .entry(emoji.user_display_name.clone())
            .or_insert_with(|| {
                groups.push((emoji.user_display_name.clone(), Vec::new()));
                groups.len() - 1
            });
        groups[slot].1.push(emoji);
    }

    let top = top_n.filter(|&n| n <= groups.len());

    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    if let Some(n) = top {
        groups.truncate(n);
    }

    let entries = groups
        .into_iter()
        .map(|(contributor, group)| LeaderboardEntry {
            count: group.len(),
            item_names: group.iter().map(|e| e.name.clone()).collect(),
            contributor,
        })
        .collect();

    Leaderboard {
        entries,
        top,
        since,
    }
}

impl Leaderboard {
    /// Plain-text rendering: header, "<rank>) @<name>: <count>" lines, then
    /// one ":name:" token per emoji from the ranked uploaders in rank order.
    pub fn render(&self) -> String {
        let scope = match self.top {
            Some(n) => format!("the top {}", n),
            None => "all".to_string(),
        };
        let cutoff = Local
            .timestamp_opt(self.since, 0)
            .single()
            .map(|t| t.to_string())
            .unwrap_or_else(|| self.since.to_string());

        let mut out = format!("Showing {} emoji uploaders since {}:\n\n", scope, cutoff);

        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}) @{}: {}\n", i + 1, entry.contributor, entry.count));
        }

        out.push('\n');
        let tokens: Vec<String> = self
            .entries
            .iter()
            .flat_map(|e| e.item_names.iter())
            .map(|name| format!(":{}:", name))
            .collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(name: &str, uploader: &str, created: i64) -> Emoji {
        Emoji {
            name: name.to_string(),
            is_alias: 0,
            alias_for: String::new(),
            url: None,
            user_id: None,
            created,
            user_display_name: uploader.to_string(),
        }
    }

    fn uploads(counts: &[(&str, usize)]) -> Vec<Emoji> {
        let mut records = Vec::new();
        for (uploader, count) in counts {
            for i in 0..*count {
                records.push(emoji(&format!("{}_{}", uploader, i), uploader, 100));
            }
        }
        records
    }

    #[test]
    fn test_ranking_is_count_descending() {
        let records = uploads(&[("A", 5), ("B", 9), ("C", 2)]);

        let board = rank(&records, Some(2), 0);

        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].contributor, "B");
        assert_eq!(board.entries[0].count, 9);
        assert_eq!(board.entries[1].contributor, "A");
        assert_eq!(board.entries[1].count, 5);
    }

    #[test]
    fn test_top_n_beyond_distinct_uploaders_collapses_to_all() {
        let records = uploads(&[("A", 1), ("B", 2), ("C", 3)]);

        let board = rank(&records, Some(10), 0);

        assert_eq!(board.entries.len(), 3);
        assert_eq!(board.top, None);
    }

    #[test]
    fn test_top_n_equal_to_distinct_uploaders_is_kept() {
        let records = uploads(&[("A", 1), ("B", 2)]);

        let board = rank(&records, Some(2), 0);

        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.top, Some(2));
    }

    #[test]
    fn test_time_filter_keeps_records_at_or_after_cutoff() {
        let records = vec![
            emoji("old", "A", 100),
            emoji("edge", "A", 200),
            emoji("new", "B", 300),
        ];

        let board = rank(&records, None, 200);

        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].item_names, vec!["edge"]);
        assert_eq!(board.entries[1].item_names, vec!["new"]);
    }

    #[test]
    fn test_equal_counts_keep_first_appearance_order() {
        let records = vec![
            emoji("x1", "X", 100),
            emoji("y1", "Y", 100),
            emoji("x2", "X", 100),
            emoji("y2", "Y", 100),
        ];

        let board = rank(&records, None, 0);

        assert_eq!(board.entries[0].contributor, "X");
        assert_eq!(board.entries[1].contributor, "Y");
    }

    #[test]
    fn test_item_names_follow_rank_order() {
        let records = vec![
            emoji("a1", "A", 100),
            emoji("b1", "B", 100),
            emoji("b2", "B", 100),
        ];

        let board = rank(&records, None, 0);

        let names: Vec<&String> = board
            .entries
            .iter()
            .flat_map(|e| e.item_names.iter())
            .collect();
        assert_eq!(names, ["b1", "b2", "a1"]);
    }

    #[test]
    fn test_grouping_is_exact_string_match() {
        let records = vec![emoji("a", "Ann", 100), emoji("b", "ann", 100)];

        let board = rank(&records, None, 0);

        assert_eq!(board.entries.len(), 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = uploads(&[("A", 2), ("B", 1)]);
        let before = records.clone();

        let _ = rank(&records, Some(1), 0);

        assert_eq!(
            records.iter().map(|e| &e.name).collect::<Vec<_>>(),
            before.iter().map(|e| &e.name).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_render_format() {
        let records = uploads(&[("B", 2), ("A", 1)]);

        let board = rank(&records, None, 0);
        let text = board.render();

        assert!(text.contains("Showing all emoji uploaders since"));
        assert!(text.contains("1) @B: 2\n"));
        assert!(text.contains("2) @A: 1\n"));
        assert!(text.contains(":B_0: :B_1: :A_0:"));
    }

    #[test]
    fn test_render_top_header() {
        let records = uploads(&[("A", 3), ("B", 2), ("C", 1)]);

        let board = rank(&records, Some(2), 0);
        let text = board.render();

        assert!(text.contains("Showing the top 2 emoji uploaders"));
    }
}
