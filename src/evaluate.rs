use std::time::Instant;

use crate::types::{ClauseOutcome, CompiledRuleSet, Condition, EvaluationReport};
use crate::{CompileOptions, Combinator, RuleSet};

/// Test `url` against `rule_set`.
///
/// Returns `neutral` when the rule set has no enabled clause; otherwise the
/// enabled clauses' results combined with the rule set's combinator. Never
/// panics: malformed regexes simply do not match.
///
/// ```
/// use urlrule::{evaluate, Clause, RuleSet};
///
/// let rules = RuleSet::any().clause(Clause::starts_with("https://www.twitch.tv"));
/// assert!(evaluate("https://www.twitch.tv/foo", &rules, false));
/// assert!(evaluate("https://example.com", &RuleSet::default(), true));
/// ```
#[must_use]
pub fn evaluate(url: &str, rule_set: &RuleSet, neutral: bool) -> bool {
    rule_set.evaluate(url, neutral)
}

/// [`evaluate`] for callers whose rule set may be absent. `None` behaves like
/// a rule set with no clauses.
#[must_use]
pub fn evaluate_opt(url: &str, rule_set: Option<&RuleSet>, neutral: bool) -> bool {
    rule_set.map_or(neutral, |rs| rs.evaluate(url, neutral))
}

/// Combine final clause results. An empty sequence yields `neutral`.
///
/// Short-circuits, so later results may never be computed.
pub(crate) fn aggregate(
    combinator: Combinator,
    results: impl IntoIterator<Item = bool>,
    neutral: bool,
) -> bool {
    let mut results = results.into_iter().peekable();
    if results.peek().is_none() {
        return neutral;
    }
    match combinator {
        Combinator::All => results.all(|r| r),
        Combinator::Any => results.any(|r| r),
    }
}

pub(crate) fn evaluate_conditions<'a>(
    combinator: Combinator,
    conditions: impl Iterator<Item = Condition<'a>>,
    url: &str,
    neutral: bool,
    options: &CompileOptions,
) -> bool {
    aggregate(
        combinator,
        conditions
            .filter(|cond| cond.enabled)
            .map(|cond| cond.test(url, options)),
        neutral,
    )
}

pub(crate) fn evaluate_detailed(
    compiled: &CompiledRuleSet,
    url: &str,
    neutral: bool,
) -> EvaluationReport {
    let start = Instant::now();

    let outcomes: Vec<ClauseOutcome> = compiled
        .clauses
        .iter()
        .map(|clause| {
            let raw = clause.raw_match(url);
            ClauseOutcome {
                index: clause.index,
                kind: clause.matcher.kind(),
                raw,
                result: raw ^ clause.negate,
                invalid_regex: clause.matcher.is_invalid(),
            }
        })
        .collect();

    let used_neutral = outcomes.is_empty();
    let result = aggregate(
        compiled.combinator,
        outcomes.iter().map(|o| o.result),
        neutral,
    );

    EvaluationReport::new(result, used_neutral, outcomes, start.elapsed())
}
