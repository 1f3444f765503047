use std::sync::Arc;

use crate::cache::MatcherCache;
use crate::matcher::Matcher;
use crate::types::{CompiledClause, CompiledRuleSet};
use crate::{CompileOptions, MatchKind, RuleSet};

/// Compile the enabled clauses of `rule_set`. Regex matchers are taken from
/// `cache` when one is given, compiled under the cache's own options; prefix
/// and substring matchers are always built fresh.
pub(crate) fn compile(
    rule_set: &RuleSet,
    options: &CompileOptions,
    cache: Option<&MatcherCache>,
) -> CompiledRuleSet {
    let clauses = rule_set
        .conditions()
        .enumerate()
        .filter(|(_, cond)| cond.enabled)
        .map(|(index, cond)| {
            let matcher = match (cond.kind, cache) {
                (MatchKind::Regex, Some(cache)) => cache.get_or_compile(cond.pattern),
                _ => Arc::new(Matcher::compile(cond.kind, cond.pattern, options)),
            };
            CompiledClause {
                index,
                negate: cond.negate,
                matcher,
            }
        })
        .collect();

    CompiledRuleSet {
        combinator: rule_set.combinator(),
        clauses,
    }
}
