//! Pattern analysis section - detects runs of repeated characters.

use secrecy::{ExposeSecret, SecretString};
use super::{Deficiency, SectionResult};
use crate::policy::{Policy, REPEAT_RUN_LENGTH};

/// Counts non-overlapping runs of `REPEAT_RUN_LENGTH` identical characters.
///
/// Each match consumes exactly `REPEAT_RUN_LENGTH` characters before the
/// scan resumes, so a run of length `n` counts `n / REPEAT_RUN_LENGTH` times
/// ("aaaa" is 1, "aaaaaa" is 2). Every character takes part, including
/// whitespace and newlines, so "\n\n\n" is one run.
pub fn repeated_runs(password: &str) -> usize {
    let mut matches = 0;
    let mut run_length = 0;
    let mut previous: Option<char> = None;

    for c in password.chars() {
        if previous == Some(c) {
            run_length += 1;
        } else {
            previous = Some(c);
            run_length = 1;
        }

        if run_length == REPEAT_RUN_LENGTH {
            matches += 1;
            // Matched characters are consumed
            run_length = 0;
        }
    }

    matches
}

/// Analyzes password for runs of repeated characters.
///
/// # Returns
/// - `Some(deficiency)` with one change per repeated run
/// - `None` if no run was found
pub fn pattern_analysis_section(password: &SecretString, _policy: &Policy) -> SectionResult {
    let count = repeated_runs(password.expose_secret());
    if count == 0 {
        return None;
    }
    Some(Deficiency {
        count,
        reason: format!(
            "Password contains {} run(s) of {} repeated characters",
            count, REPEAT_RUN_LENGTH
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_runs_triple() {
        assert_eq!(repeated_runs("aaa"), 1);
    }

    #[test]
    fn test_repeated_runs_four_counts_once() {
        assert_eq!(repeated_runs("aaaa"), 1);
        assert_eq!(repeated_runs("aaaaa"), 1);
    }

    #[test]
    fn test_repeated_runs_six_counts_twice() {
        assert_eq!(repeated_runs("aaaaaa"), 2);
        assert_eq!(repeated_runs("aaaaaaa"), 2);
    }

    #[test]
    fn test_repeated_runs_broken_runs() {
        assert_eq!(repeated_runs("aabaa"), 0);
        assert_eq!(repeated_runs("aabbaabb"), 0);
    }

    #[test]
    fn test_repeated_runs_leftover_does_not_join_next_run() {
        // "aaaa" leaves one 'a', then "bbb"
        assert_eq!(repeated_runs("aaaabbb"), 2);
        assert_eq!(repeated_runs("aaaa1Bccc"), 2);
    }

    #[test]
    fn test_repeated_runs_any_character() {
        assert_eq!(repeated_runs("!!!   ééé"), 3);
    }

    #[test]
    fn test_repeated_runs_newlines_count() {
        assert_eq!(repeated_runs("\n\n\n"), 1);
        assert_eq!(repeated_runs("ab\r\r\r"), 1);
    }

    #[test]
    fn test_repeated_runs_short_input() {
        assert_eq!(repeated_runs(""), 0);
        assert_eq!(repeated_runs("aa"), 0);
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let pwd = SecretString::new("aaaaBBBB1111".to_string().into());
        let result = pattern_analysis_section(&pwd, &Policy::default());
        assert_eq!(
            result,
            Some(Deficiency {
                count: 3,
                reason: "Password contains 3 run(s) of 3 repeated characters".to_string(),
            })
        );
    }

    #[test]
    fn test_pattern_section_no_runs() {
        let pwd = SecretString::new("RandomPass123".to_string().into());
        assert_eq!(pattern_analysis_section(&pwd, &Policy::default()), None);
    }
}
