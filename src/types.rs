//! Evaluation result types.

use std::fmt;

/// Outcome of a detailed evaluation.
///
/// `changes` is `None` when the evaluation was cancelled before all sections
/// ran; otherwise it is the summed deficiency count of every section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthEvaluation {
    pub changes: Option<usize>,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    /// True if every rule passed.
    pub fn is_strong(&self) -> bool {
        self.changes == Some(0)
    }

    pub fn verdict(&self) -> Verdict {
        match self.changes {
            Some(changes) => Verdict::from_changes(changes),
            None => Verdict::NotEvaluated,
        }
    }
}

/// What a caller should tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Strong,
    NeedsChanges(usize),
    NotEvaluated,
}

impl Verdict {
    pub fn from_changes(changes: usize) -> Self {
        if changes == 0 {
            Verdict::Strong
        } else {
            Verdict::NeedsChanges(changes)
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Strong => write!(f, "Password is strong enough!"),
            Verdict::NeedsChanges(changes) => write!(
                f,
                "Password is not strong enough. You have to make {} changes to it!",
                changes
            ),
            Verdict::NotEvaluated => write!(f, "Password was not evaluated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_changes() {
        assert_eq!(Verdict::from_changes(0), Verdict::Strong);
        assert_eq!(Verdict::from_changes(2), Verdict::NeedsChanges(2));
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Strong.to_string(), "Password is strong enough!");
        assert_eq!(
            Verdict::NeedsChanges(2).to_string(),
            "Password is not strong enough. You have to make 2 changes to it!"
        );
    }

    #[test]
    fn test_cancelled_evaluation_is_not_evaluated() {
        let evaluation = StrengthEvaluation {
            changes: None,
            reasons: vec!["Evaluation cancelled".to_string()],
        };
        assert!(!evaluation.is_strong());
        assert_eq!(evaluation.verdict(), Verdict::NotEvaluated);
    }
}
