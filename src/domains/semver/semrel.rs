//! Semantic-release dry-run output parsing.
//!
//! semantic-release prints human-readable logs, not a machine format, so
//! this is best-effort scraping: a fixed set of patterns over the combined
//! stdout/stderr text. Missing markers degrade to absent/`none`/empty, never
//! errors; whether the dry run itself succeeded is the caller's exit-code
//! concern, not this parser's.

use regex::Regex;
use schemars::JsonSchema;
use serde::Serialize;

use super::bump::BumpLevel;

/// Structured view of a dry-run release computation.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ReleaseParseResult {
    /// The computed next version, when the output announced one.
    pub next_version: Option<String>,

    /// Explicit release type if printed; defaults to `patch` when a version
    /// was found without one, `none` when neither was found.
    pub release_type: BumpLevel,

    /// Release notes: everything from the first markdown section heading
    /// (blank line followed by `### `) onward, trimmed. Empty if absent.
    ///
    /// The marker assumes semantic-release's own notes layout; other output
    /// shapes intentionally yield empty notes rather than guessed ones.
    pub notes: String,
}

/// Parse the combined stdout/stderr of a semantic-release dry run.
pub fn parse_release_output(output: &str) -> ReleaseParseResult {
    let version_pattern = Regex::new(r"(?i)next release version is\s+(\d+\.\d+\.\d+(?:-[\w.-]+)?)")
        .expect("version pattern is valid");
    let type_pattern =
        Regex::new(r"(?i)release type:\s*(major|minor|patch)").expect("type pattern is valid");

    let next_version = version_pattern
        .captures(output)
        .map(|caps| caps[1].to_string());

    let release_type = type_pattern
        .captures(output)
        .and_then(|caps| BumpLevel::from_tag_word(&caps[1]))
        .unwrap_or(if next_version.is_some() {
            BumpLevel::Patch
        } else {
            BumpLevel::None
        });

    let notes = output
        .find("\n\n### ")
        .map(|start| output[start + 2..].trim().to_string())
        .unwrap_or_default();

    ReleaseParseResult {
        next_version,
        release_type,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_output() {
        let output = "\
[semantic-release] » Analyzing 12 commits
[semantic-release] » Release type: minor
[semantic-release] » The next release version is 1.4.0

### Features
- add login flow

### Bug Fixes
- handle empty token";

        let parsed = parse_release_output(output);
        assert_eq!(parsed.next_version.as_deref(), Some("1.4.0"));
        assert_eq!(parsed.release_type, BumpLevel::Minor);
        assert!(parsed.notes.starts_with("### Features"));
        assert!(parsed.notes.contains("### Bug Fixes"));
    }

    #[test]
    fn test_parse_version_without_type_defaults_to_patch() {
        let parsed = parse_release_output("the next release version is 2.3.0");
        assert_eq!(parsed.next_version.as_deref(), Some("2.3.0"));
        assert_eq!(parsed.release_type, BumpLevel::Patch);
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn test_parse_nothing_found() {
        let parsed = parse_release_output("There are no relevant changes, no new release.");
        assert_eq!(parsed.next_version, None);
        assert_eq!(parsed.release_type, BumpLevel::None);
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_release_output("");
        assert_eq!(parsed.next_version, None);
        assert_eq!(parsed.release_type, BumpLevel::None);
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn test_parse_prerelease_version() {
        let parsed = parse_release_output("Next release version is 3.0.0-beta.1");
        assert_eq!(parsed.next_version.as_deref(), Some("3.0.0-beta.1"));
    }

    #[test]
    fn test_parse_explicit_type_case_insensitive() {
        let parsed =
            parse_release_output("RELEASE TYPE: MAJOR\nnext release version is 2.0.0");
        assert_eq!(parsed.release_type, BumpLevel::Major);
    }

    #[test]
    fn test_first_version_match_wins() {
        let output =
            "next release version is 1.2.3\nand later: next release version is 9.9.9";
        let parsed = parse_release_output(output);
        assert_eq!(parsed.next_version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_notes_require_blank_line_before_heading() {
        // A heading glued to the previous line is not a notes marker.
        let parsed = parse_release_output("Release type: patch\n### Not Notes");
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn test_parse_idempotent() {
        let output = "Release type: minor\nnext release version is 1.1.0\n\n### Features\n- x";
        assert_eq!(parse_release_output(output), parse_release_output(output));
    }
}
