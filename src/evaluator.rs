//! Password strength evaluator - sums the deficiency count of every section.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, Policy};
use crate::sections::{
    Deficiency, SectionResult, character_variety_section, length_deficiency, length_section,
    missing_classes, pattern_analysis_section, repeated_runs,
};
use crate::types::StrengthEvaluation;

/// Delay before [`evaluate_password_strength_tx`] evaluates, so callers can
/// fire it on every keystroke and cancel stale requests.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Returns the number of changes `password` needs to satisfy every rule.
///
/// The result is the sum of the length, character class and repeated run
/// deficiencies, each computed independently. `0` means the password passes.
/// Inverted bounds (`min_length > max_length`) do not panic; use
/// [`Policy::new`] to reject them up front.
pub fn evaluate(password: &str, min_length: usize, max_length: usize) -> usize {
    length_deficiency(password, min_length, max_length)
        + missing_classes(password)
        + repeated_runs(password)
}

/// [`evaluate`] with the default bounds of 6 and 20 characters.
pub fn evaluate_default(password: &str) -> usize {
    evaluate(password, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Length bounds to apply
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `StrengthEvaluation` with the total number of changes and one reason per
/// failed section.
pub fn evaluate_password_strength(
    password: &SecretString,
    policy: &Policy,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> StrengthEvaluation {
    let mut reasons = Vec::new();
    let mut changes: Option<usize> = Some(0);

    let sections: [(&str, fn(&SecretString, &Policy) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    for (_section_name, section_fn) in sections {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    reasons.push("Evaluation cancelled".to_string());
                    changes = None;
                    break;
                }
            }
        }

        if let Some(Deficiency { count, reason }) = section_fn(password, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = _section_name, count, "Section failed");
            reasons.push(reason);
            if let Some(total) = changes.as_mut() {
                *total += count;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?changes, failed_sections = reasons.len(), "Evaluation finished");

    StrengthEvaluation { changes, reasons }
}

/// Async version that sends evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, policy, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
