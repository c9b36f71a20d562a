//! Verdict-vs-expectation comparison.
//!
//! A pure comparison over the fields present in a partial expectation,
//! producing a boolean plus human-readable messages for test reporting.
//! There is no global matcher registration; test code calls
//! [`match_verdict`] directly or uses the
//! [`assert_satisfies_image_assertions!`](crate::assert_satisfies_image_assertions)
//! macro.

use crate::types::{ValidationVerdict, VerdictExpectation};

/// Result of comparing a verdict against a partial expectation.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The AND across all fields present in the expectation.
    pub matched: bool,
    /// Message for the "expected to match but did not" case.
    pub failure_message: String,
    /// Message for the "expected NOT to match but did" case.
    pub negated_failure_message: String,
}

/// Compare a verdict against a partial expectation.
///
/// Field rules: `assertions_met`, `tone`, and `explanation` use exact
/// equality; `score` is an inclusive lower bound. Fields absent from the
/// expectation are not checked, so an empty expectation matches any verdict.
pub fn match_verdict(verdict: &ValidationVerdict, expected: &VerdictExpectation) -> MatchOutcome {
    let mut mismatches: Vec<String> = Vec::new();

    if let Some(met) = expected.assertions_met
        && verdict.assertions_met != met
    {
        mismatches.push(format!(
            "assertions_met is {}, expected {}",
            verdict.assertions_met, met
        ));
    }

    if let Some(min_score) = expected.score
        && verdict.score < min_score
    {
        mismatches.push(format!(
            "score {} is below the expected minimum {}",
            verdict.score, min_score
        ));
    }

    if let Some(tone) = expected.tone.as_ref()
        && verdict.tone != *tone
    {
        mismatches.push(format!(
            "tone is \"{}\", expected \"{}\"",
            verdict.tone, tone
        ));
    }

    if let Some(explanation) = expected.explanation.as_deref()
        && verdict.explanation != explanation
    {
        mismatches.push(format!(
            "explanation is {:?}, expected {:?}",
            verdict.explanation, explanation
        ));
    }

    let matched = mismatches.is_empty();
    let failure_message = format!(
        "verdict did not satisfy image assertions: {}\n  received: {verdict:?}\n  expected: {expected:?}",
        if matched {
            "(no mismatches)".to_string()
        } else {
            mismatches.join("; ")
        }
    );
    let negated_failure_message = format!(
        "verdict unexpectedly satisfied image assertions\n  received: {verdict:?}\n  expected not to match: {expected:?}"
    );

    MatchOutcome {
        matched,
        failure_message,
        negated_failure_message,
    }
}

/// Assert that a [`ValidationVerdict`] satisfies a partial
/// [`VerdictExpectation`], panicking with a descriptive message otherwise.
///
/// ```rust,ignore
/// assert_satisfies_image_assertions!(
///     verdict,
///     VerdictExpectation::new().assertions_met(true).min_score(7.0)
/// );
/// ```
#[macro_export]
macro_rules! assert_satisfies_image_assertions {
    ($verdict:expr, $expected:expr $(,)?) => {{
        let outcome = $crate::matcher::match_verdict(&$verdict, &$expected);
        if !outcome.matched {
            panic!("{}", outcome.failure_message);
        }
    }};
}
