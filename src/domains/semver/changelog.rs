//! Changelog bucketing and rendering.
//!
//! Commits are grouped into five fixed sections by first-match precedence.
//! The rule set here is deliberately narrower than the bump inferencer's:
//! `refactor:`, `chore:` and friends count as patch-eligible for version
//! inference but render under *Other* in a changelog. The two tables answer
//! different questions and are kept separate on purpose.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity of a changelog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BucketKey {
    Breaking,
    Feat,
    Fix,
    Perf,
    Other,
}

impl BucketKey {
    /// Fixed display order of the five sections.
    pub const DISPLAY_ORDER: [BucketKey; 5] = [
        Self::Breaking,
        Self::Feat,
        Self::Fix,
        Self::Perf,
        Self::Other,
    ];

    /// Section heading text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Breaking => "\u{1F4A5} Breaking Changes",
            Self::Feat => "\u{2728} Features",
            Self::Fix => "\u{1F41B} Fixes",
            Self::Perf => "\u{26A1} Performance",
            Self::Other => "\u{1F9F0} Other",
        }
    }
}

/// One commit as retrieved from the log facility.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CommitRecord {
    /// First line of the commit message.
    pub subject: String,

    /// Remaining message text (may be empty).
    #[serde(default)]
    pub body: String,

    /// Commit hash, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// A rendered changelog section: heading plus its items in input order.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ChangelogBucket {
    pub key: BucketKey,
    pub title: String,
    pub items: Vec<String>,
}

/// Classify records into buckets and return the non-empty ones in display
/// order. Each record lands in exactly one bucket; items keep input order.
pub fn bucket_commits(records: &[CommitRecord]) -> Vec<ChangelogBucket> {
    let breaking = Regex::new(r"(?i)BREAKING CHANGE|!:").expect("breaking pattern is valid");
    // Subject-anchored rules, narrower than the bump inferencer's set.
    let subject_rules = [
        (
            Regex::new(r"(?i)^feat[(:]").expect("feat pattern is valid"),
            BucketKey::Feat,
        ),
        (
            Regex::new(r"(?i)^fix[(:]").expect("fix pattern is valid"),
            BucketKey::Fix,
        ),
        (
            Regex::new(r"(?i)^perf[(:]").expect("perf pattern is valid"),
            BucketKey::Perf,
        ),
    ];

    let mut items: Vec<(BucketKey, String)> = Vec::with_capacity(records.len());
    for record in records {
        let key = if breaking.is_match(&record.subject) || breaking.is_match(&record.body) {
            BucketKey::Breaking
        } else {
            subject_rules
                .iter()
                .find(|(pattern, _)| pattern.is_match(&record.subject))
                .map(|(_, key)| *key)
                .unwrap_or(BucketKey::Other)
        };
        items.push((key, format!("- {}", record.subject)));
    }

    BucketKey::DISPLAY_ORDER
        .into_iter()
        .map(|key| ChangelogBucket {
            key,
            title: key.title().to_string(),
            items: items
                .iter()
                .filter(|(item_key, _)| *item_key == key)
                .map(|(_, line)| line.clone())
                .collect(),
        })
        .filter(|bucket| !bucket.items.is_empty())
        .collect()
}

/// Render buckets as markdown sections joined by a blank line.
pub fn render_sections(buckets: &[ChangelogBucket]) -> String {
    buckets
        .iter()
        .map(|bucket| format!("### {}\n{}", bucket.title, bucket.items.join("\n")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str) -> CommitRecord {
        CommitRecord {
            subject: subject.to_string(),
            body: String::new(),
            hash: None,
        }
    }

    #[test]
    fn test_chore_goes_to_other_not_fix() {
        let records = vec![record("feat: a"), record("fix: b"), record("chore: c")];
        let buckets = bucket_commits(&records);

        let keys: Vec<_> = buckets.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![BucketKey::Feat, BucketKey::Fix, BucketKey::Other]);

        let fix = &buckets[1];
        assert_eq!(fix.items, vec!["- fix: b"]);
        let other = &buckets[2];
        assert_eq!(other.items, vec!["- chore: c"]);
    }

    #[test]
    fn test_breaking_beats_subject_prefix() {
        let records = vec![CommitRecord {
            subject: "feat!: remove v1 endpoints".to_string(),
            body: String::new(),
            hash: None,
        }];
        let buckets = bucket_commits(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].key, BucketKey::Breaking);
    }

    #[test]
    fn test_breaking_marker_in_body() {
        let records = vec![CommitRecord {
            subject: "fix: change config default".to_string(),
            body: "BREAKING CHANGE: the default port moved".to_string(),
            hash: None,
        }];
        let buckets = bucket_commits(&records);
        assert_eq!(buckets[0].key, BucketKey::Breaking);
    }

    #[test]
    fn test_display_order_fixed() {
        let records = vec![
            record("chore: z"),
            record("perf: y"),
            record("fix: x"),
            record("feat: w"),
            record("feat!: v"),
        ];
        let keys: Vec<_> = bucket_commits(&records).iter().map(|b| b.key).collect();
        assert_eq!(
            keys,
            vec![
                BucketKey::Breaking,
                BucketKey::Feat,
                BucketKey::Fix,
                BucketKey::Perf,
                BucketKey::Other
            ]
        );
    }

    #[test]
    fn test_items_keep_input_order() {
        let records = vec![record("fix: first"), record("fix: second")];
        let buckets = bucket_commits(&records);
        assert_eq!(buckets[0].items, vec!["- fix: first", "- fix: second"]);
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        assert!(bucket_commits(&[]).is_empty());
        assert_eq!(render_sections(&[]), "");
    }

    #[test]
    fn test_render_sections() {
        let records = vec![record("feat: a"), record("fix: b")];
        let rendered = render_sections(&bucket_commits(&records));
        assert_eq!(
            rendered,
            "### \u{2728} Features\n- feat: a\n\n### \u{1F41B} Fixes\n- fix: b"
        );
    }
}
