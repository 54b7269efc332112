//! Bump levels and declared-bump extraction.
//!
//! [`BumpLevel`] is the ordered semantic-versioning impact category used
//! everywhere in this domain. The ordering (`none < patch < minor < major`)
//! drives both bump inference (highest signal wins) and the version guard
//! (declared must not rank below inferred).

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic-versioning impact category.
///
/// The variant order defines the total order used for comparisons;
/// `Ord` and [`BumpLevel::rank`] agree by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Numeric rank: none=0, patch=1, minor=2, major=3.
    pub fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Patch => 1,
            Self::Minor => 2,
            Self::Major => 3,
        }
    }

    /// Lowercase name, matching the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    /// Uppercase name as it appears in PR-title tags and guard violations.
    pub fn as_tag(self) -> String {
        self.as_str().to_uppercase()
    }

    /// Parse a tag word (`MAJOR`/`MINOR`/`PATCH`, any case).
    ///
    /// `none` is never a valid tag word, so it is not accepted here.
    pub fn from_tag_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract a human-declared bump from a PR title.
///
/// Searches anywhere in the title, case-insensitively, for
/// `[Release][MAJOR|MINOR|PATCH]` (whitespace allowed between the bracket
/// groups). Absence of a tag is `None`, which is distinct from an explicit
/// declaration.
pub fn extract_declared_bump(pr_title: &str) -> Option<BumpLevel> {
    let pattern = Regex::new(r"(?i)\[release\]\s*\[(major|minor|patch)\]")
        .expect("declared-bump pattern is valid");

    pattern
        .captures(pr_title)
        .and_then(|caps| BumpLevel::from_tag_word(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_matches_ordering() {
        let levels = [
            BumpLevel::None,
            BumpLevel::Patch,
            BumpLevel::Minor,
            BumpLevel::Major,
        ];
        for window in levels.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].rank() < window[1].rank());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&BumpLevel::Major).unwrap(),
            "\"major\""
        );
        let parsed: BumpLevel = serde_json::from_str("\"patch\"").unwrap();
        assert_eq!(parsed, BumpLevel::Patch);
    }

    #[test]
    fn test_from_tag_word() {
        assert_eq!(BumpLevel::from_tag_word("MAJOR"), Some(BumpLevel::Major));
        assert_eq!(BumpLevel::from_tag_word("minor"), Some(BumpLevel::Minor));
        assert_eq!(BumpLevel::from_tag_word("Patch"), Some(BumpLevel::Patch));
        assert_eq!(BumpLevel::from_tag_word("none"), None);
        assert_eq!(BumpLevel::from_tag_word("huge"), None);
    }

    #[test]
    fn test_extract_declared_bump_basic() {
        assert_eq!(
            extract_declared_bump("[Release][MAJOR] drop legacy API"),
            Some(BumpLevel::Major)
        );
        assert_eq!(
            extract_declared_bump("[Release] [PATCH] fix typo"),
            Some(BumpLevel::Patch)
        );
    }

    #[test]
    fn test_extract_declared_bump_case_and_position_insensitive() {
        assert_eq!(
            extract_declared_bump("foo [release][minor] bar"),
            Some(BumpLevel::Minor)
        );
        assert_eq!(
            extract_declared_bump("[RELEASE][MINOR]"),
            Some(BumpLevel::Minor)
        );
    }

    #[test]
    fn test_extract_declared_bump_absent() {
        assert_eq!(extract_declared_bump("feat: add things"), None);
        assert_eq!(extract_declared_bump("[Release] minor"), None);
        assert_eq!(extract_declared_bump("[Release][NONE]"), None);
        assert_eq!(extract_declared_bump(""), None);
    }
}
