//! Commit classification and bump inference.
//!
//! A commit message yields at most one signal, chosen by the first matching
//! rule in a fixed priority order: breaking markers beat `feat:` prefixes,
//! which beat the patch-eligible prefix set. Inference over a sequence is an
//! any-match reduction to the highest signal, not a count.

use regex::Regex;

use super::bump::BumpLevel;

/// Version-impact signal carried by a single commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSignal {
    /// `BREAKING CHANGE` marker anywhere, or a `!:` shorthand.
    Breaking,
    /// Subject starts with `feat(` or `feat:`.
    Feature,
    /// Subject starts with one of the patch-eligible prefixes.
    PatchEligible,
    /// No recognized signal.
    None,
}

impl CommitSignal {
    /// The bump level this signal implies on its own.
    pub fn bump_level(self) -> BumpLevel {
        match self {
            Self::Breaking => BumpLevel::Major,
            Self::Feature => BumpLevel::Minor,
            Self::PatchEligible => BumpLevel::Patch,
            Self::None => BumpLevel::None,
        }
    }
}

/// Ordered (pattern, signal) rules for classifying commit messages.
///
/// Compile once, classify many: callers that loop over a commit list should
/// construct a single classifier up front.
pub struct CommitClassifier {
    rules: Vec<(Regex, CommitSignal)>,
}

impl CommitClassifier {
    pub fn new() -> Self {
        // Priority order matters: first match wins.
        let rules = vec![
            (
                Regex::new(r"(?i)BREAKING CHANGE|!:").expect("breaking pattern is valid"),
                CommitSignal::Breaking,
            ),
            (
                Regex::new(r"(?i)^feat[(:]").expect("feature pattern is valid"),
                CommitSignal::Feature,
            ),
            (
                Regex::new(r"(?i)^(fix|perf|refactor|revert|chore|build|ci|docs|style|test)[(:]")
                    .expect("patch pattern is valid"),
                CommitSignal::PatchEligible,
            ),
        ];

        Self { rules }
    }

    /// Classify a single commit message (subject plus optional body).
    ///
    /// Total: unrecognized text yields [`CommitSignal::None`], never an error.
    pub fn classify(&self, message: &str) -> CommitSignal {
        for (pattern, signal) in &self.rules {
            if pattern.is_match(message) {
                return *signal;
            }
        }
        CommitSignal::None
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a commit sequence to the single highest-precedence bump level.
///
/// Any breaking commit forces `major` regardless of everything else; one
/// `feat:` among a hundred fixes still yields `minor`. Empty input is `none`.
pub fn infer_bump(commits: &[String]) -> BumpLevel {
    let classifier = CommitClassifier::new();

    commits
        .iter()
        .map(|message| classifier.classify(message).bump_level())
        .max()
        .unwrap_or(BumpLevel::None)
}
