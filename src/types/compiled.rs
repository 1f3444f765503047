use std::fmt;
use std::sync::Arc;

use super::evaluation_report::EvaluationReport;
use super::kind::Combinator;
use crate::matcher::{Matcher, PatternMatcher};

/// An enabled clause with its pattern compiled.
#[derive(Debug, Clone)]
pub(crate) struct CompiledClause {
    /// Position in the source rule set's clause list.
    pub(crate) index: usize,
    pub(crate) negate: bool,
    pub(crate) matcher: Arc<Matcher>,
}

impl CompiledClause {
    pub(crate) fn raw_match(&self, url: &str) -> bool {
        self.matcher.is_match(url)
    }

    pub(crate) fn test(&self, url: &str) -> bool {
        self.raw_match(url) ^ self.negate
    }
}

/// A [`RuleSet`](super::RuleSet) with disabled clauses dropped and every
/// pattern compiled. Immutable, thread-safe and designed to live behind `Arc`.
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    pub(crate) combinator: Combinator,
    pub(crate) clauses: Vec<CompiledClause>,
}

impl CompiledRuleSet {
    /// Same result as [`RuleSet::evaluate()`](super::RuleSet::evaluate) on the
    /// source rule set.
    #[must_use]
    pub fn evaluate(&self, url: &str, neutral: bool) -> bool {
        crate::evaluate::aggregate(
            self.combinator,
            self.clauses.iter().map(|c| c.test(url)),
            neutral,
        )
    }

    pub fn evaluate_detailed(&self, url: &str, neutral: bool) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(self, url, neutral)
    }

    #[must_use]
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Number of enabled clauses that were compiled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Indices (in the source rule set) of regex clauses that failed to compile.
    #[must_use]
    pub fn invalid_clauses(&self) -> Vec<usize> {
        self.clauses
            .iter()
            .filter(|c| c.matcher.is_invalid())
            .map(|c| c.index)
            .collect()
    }
}

impl fmt::Display for CompiledRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompiledRuleSet({}, {} clauses, {} invalid)",
            self.combinator,
            self.clauses.len(),
            self.invalid_clauses().len(),
        )
    }
}
