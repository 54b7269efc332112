//! Commit log retrieval.
//!
//! Reads subject/body/hash triples from `git log` for a revision range. The
//! record format (`%s__%b__%H`, one record per line) mirrors what the
//! changelog consumers expect; multi-line bodies spill onto continuation
//! lines, which are parsed as body-less records like any other line.

use std::path::Path;

use tracing::debug;

use super::command::{CommandOutput, run_command};
use crate::domains::semver::CommitRecord;

/// Build the `git log` revision range argument.
///
/// `since..until` when `since` is given (`until` defaulting to HEAD),
/// otherwise just `until` or HEAD.
pub fn format_range(since: Option<&str>, until: Option<&str>) -> String {
    match since {
        Some(since) => format!("{}..{}", since, until.unwrap_or("HEAD")),
        None => until.unwrap_or("HEAD").to_string(),
    }
}

/// Run `git log` over `range` in `repo_path` and parse the records.
///
/// The raw command output is returned alongside the records so callers can
/// report the exit code next to the parse result.
pub async fn read_commits(
    repo_path: &Path,
    range: &str,
) -> std::io::Result<(Vec<CommitRecord>, CommandOutput)> {
    let args = vec![
        "log".to_string(),
        "--pretty=format:%s__%b__%H".to_string(),
        range.to_string(),
    ];

    let output = run_command("git", &args, repo_path, &[]).await?;
    let records = parse_log_output(&output.stdout);
    debug!("git log {} yielded {} record(s)", range, records.len());

    Ok((records, output))
}

/// Parse `%s__%b__%H` formatted log lines; blank lines are skipped.
pub fn parse_log_output(stdout: &str) -> Vec<CommitRecord> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.splitn(3, "__");
            let subject = parts.next().unwrap_or_default().to_string();
            let body = parts.next().unwrap_or_default().to_string();
            let hash = parts.next().map(|h| h.to_string()).filter(|h| !h.is_empty());
            CommitRecord {
                subject,
                body,
                hash,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Some("v1.0.0"), None), "v1.0.0..HEAD");
        assert_eq!(format_range(Some("v1.0.0"), Some("v1.1.0")), "v1.0.0..v1.1.0");
        assert_eq!(format_range(None, Some("v1.1.0")), "v1.1.0");
        assert_eq!(format_range(None, None), "HEAD");
    }

    #[test]
    fn test_parse_log_output() {
        let stdout = "feat: add login____abc123\nfix: token refresh__BREAKING CHANGE: renames field__def456\n";
        let records = parse_log_output(stdout);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].subject, "feat: add login");
        assert_eq!(records[0].body, "");
        assert_eq!(records[0].hash.as_deref(), Some("abc123"));

        assert_eq!(records[1].subject, "fix: token refresh");
        assert_eq!(records[1].body, "BREAKING CHANGE: renames field");
        assert_eq!(records[1].hash.as_deref(), Some("def456"));
    }

    #[test]
    fn test_parse_log_output_skips_blank_lines() {
        let records = parse_log_output("\n\nchore: deps____aaa111\n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "chore: deps");
    }

    #[test]
    fn test_parse_log_output_line_without_separators() {
        let records = parse_log_output("continuation text from a multi-line body");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "continuation text from a multi-line body");
        assert_eq!(records[0].body, "");
        assert_eq!(records[0].hash, None);
    }

    #[tokio::test]
    async fn test_read_commits_in_fresh_repo() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        for args in [
            vec!["init", "-q"],
            vec!["config", "user.email", "test@example.com"],
            vec!["config", "user.name", "Test"],
            vec!["commit", "--allow-empty", "-q", "-m", "feat: first"],
            vec!["commit", "--allow-empty", "-q", "-m", "fix: second"],
        ] {
            let args: Vec<String> = args.into_iter().map(String::from).collect();
            let out = run_command("git", &args, path, &[]).await.unwrap();
            assert!(out.success(), "git {:?} failed: {}", args, out.stderr);
        }

        let (records, output) = read_commits(path, "HEAD").await.unwrap();
        assert!(output.success());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "fix: second");
        assert_eq!(records[1].subject, "feat: first");
        assert!(records.iter().all(|r| r.hash.is_some()));
    }

    #[tokio::test]
    async fn test_read_commits_bad_range_reports_failure() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        let init: Vec<String> = ["init", "-q"].into_iter().map(String::from).collect();
        run_command("git", &init, path, &[]).await.unwrap();

        let (records, output) = read_commits(path, "no-such-ref..HEAD").await.unwrap();
        assert!(!output.success());
        assert!(records.is_empty());
    }
}
