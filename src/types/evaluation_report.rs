use std::fmt;
use std::time::Duration;

use super::kind::MatchKind;

/// Outcome of a single enabled clause within an [`EvaluationReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseOutcome {
    /// Position of the clause in [`RuleSet::clauses()`](super::RuleSet::clauses).
    pub index: usize,
    pub kind: MatchKind,
    /// Pattern test result before negation.
    pub raw: bool,
    /// Result after negation; this is what the combinator sees.
    pub result: bool,
    /// The clause is a regex that failed to compile.
    pub invalid_regex: bool,
}

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::RuleSet::evaluate_detailed).
///
/// Unlike [`RuleSet::evaluate()`](super::RuleSet::evaluate), every enabled
/// clause is tested even after the combined result is known.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    result: bool,
    used_neutral: bool,
    clauses: Vec<ClauseOutcome>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        result: bool,
        used_neutral: bool,
        clauses: Vec<ClauseOutcome>,
        duration: Duration,
    ) -> Self {
        Self {
            result,
            used_neutral,
            clauses,
            duration,
        }
    }

    /// The combined result, same as [`RuleSet::evaluate()`](super::RuleSet::evaluate).
    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }

    /// `true` when no clause was enabled and the neutral value was returned.
    #[must_use]
    pub fn used_neutral(&self) -> bool {
        self.used_neutral
    }

    /// Per-clause outcomes for the enabled clauses, in rule-set order.
    #[must_use]
    pub fn clauses(&self) -> &[ClauseOutcome] {
        &self.clauses
    }

    /// Indices of enabled clauses whose final result was `true`.
    #[must_use]
    pub fn passed(&self) -> Vec<usize> {
        self.clauses
            .iter()
            .filter(|c| c.result)
            .map(|c| c.index)
            .collect()
    }

    /// `true` if any enabled regex clause failed to compile.
    #[must_use]
    pub fn has_invalid_regex(&self) -> bool {
        self.clauses.iter().any(|c| c.invalid_regex)
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "result: {}", self.result)?;
        if self.used_neutral {
            write!(f, " (neutral)")?;
        }
        let passed: Vec<String> = self.passed().iter().map(ToString::to_string).collect();
        write!(f, ", passed: [{}]", passed.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
