//! Version guard: declared vs. inferred bump validation.

use schemars::JsonSchema;
use serde::Serialize;

use super::bump::{BumpLevel, extract_declared_bump};
use super::classifier::infer_bump;

/// Outcome of comparing a PR title's declared bump against the bump inferred
/// from its commits.
///
/// `declared` is `null` when the title carries no tag; `inferred` is `null`
/// when the commits carry no signal. `ok` is true exactly when `violations`
/// is empty.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GuardVerdict {
    pub declared: Option<BumpLevel>,
    pub inferred: Option<BumpLevel>,
    pub ok: bool,
    pub violations: Vec<String>,
}

/// Validate a PR title's release tag against conventional-commit signals.
///
/// Never errors: a missing tag or an empty commit list shapes the verdict
/// instead. Violation order is fixed (missing tag first, then understated
/// declaration).
pub fn check_version_guard(pr_title: &str, commits: &[String]) -> GuardVerdict {
    let declared = extract_declared_bump(pr_title);
    let inferred = infer_bump(commits);

    let mut violations = Vec::new();

    if declared.is_none() {
        violations.push("PR title missing [Release][MAJOR|MINOR|PATCH] tag.".to_string());
    }

    if inferred != BumpLevel::None {
        if let Some(declared) = declared {
            if declared.rank() < inferred.rank() {
                violations.push(format!(
                    "Declared {} but commits imply {}.",
                    declared.as_tag(),
                    inferred.as_tag()
                ));
            }
        }
    }

    GuardVerdict {
        declared,
        inferred: (inferred != BumpLevel::None).then_some(inferred),
        ok: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_understated_declaration_fails() {
        let verdict = check_version_guard("[Release][PATCH]", &msgs(&["feat: x"]));
        assert!(!verdict.ok);
        assert_eq!(verdict.declared, Some(BumpLevel::Patch));
        assert_eq!(verdict.inferred, Some(BumpLevel::Minor));
        assert_eq!(verdict.violations.len(), 1);
        assert_eq!(
            verdict.violations[0],
            "Declared PATCH but commits imply MINOR."
        );
    }

    #[test]
    fn test_overstated_declaration_passes() {
        let verdict = check_version_guard("[Release][MAJOR]", &msgs(&["feat: x"]));
        assert!(verdict.ok);
        assert!(verdict.violations.is_empty());
        assert_eq!(verdict.declared, Some(BumpLevel::Major));
        assert_eq!(verdict.inferred, Some(BumpLevel::Minor));
    }

    #[test]
    fn test_exact_declaration_passes() {
        let verdict = check_version_guard("[Release][MINOR] add stuff", &msgs(&["feat: x"]));
        assert!(verdict.ok);
    }

    #[test]
    fn test_missing_tag_and_no_commits() {
        let verdict = check_version_guard("improve docs", &[]);
        assert!(!verdict.ok);
        assert_eq!(verdict.violations.len(), 1);
        assert!(verdict.violations[0].contains("missing"));
        assert_eq!(verdict.declared, None);
        assert_eq!(verdict.inferred, None);
    }

    #[test]
    fn test_missing_tag_with_signal_is_single_violation() {
        // An absent declaration cannot also be an understated one.
        let verdict = check_version_guard("add login", &msgs(&["feat: login"]));
        assert!(!verdict.ok);
        assert_eq!(verdict.violations.len(), 1);
        assert_eq!(verdict.inferred, Some(BumpLevel::Minor));
    }

    #[test]
    fn test_declared_with_no_signal_passes() {
        let verdict = check_version_guard("[Release][PATCH] tidy", &msgs(&["update readme"]));
        assert!(verdict.ok);
        assert_eq!(verdict.inferred, None);
    }

    #[test]
    fn test_ok_iff_no_violations() {
        for (title, commits) in [
            ("[Release][PATCH]", msgs(&["feat: x"])),
            ("[Release][MAJOR]", msgs(&["feat: x"])),
            ("no tag here", vec![]),
        ] {
            let verdict = check_version_guard(title, &commits);
            assert_eq!(verdict.ok, verdict.violations.is_empty());
        }
    }
}
