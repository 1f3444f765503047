use crate::{Clause, Combinator, RuleSet};

/// The result of parsing rule-set text.
#[derive(Debug)]
pub struct ParsedRuleSet {
    /// `None` when the input has no `match` line.
    pub combinator: Option<Combinator>,
    pub clauses: Vec<Clause>,
}

impl From<ParsedRuleSet> for RuleSet {
    fn from(parsed: ParsedRuleSet) -> Self {
        parsed
            .clauses
            .into_iter()
            .fold(RuleSet::new(parsed.combinator.unwrap_or_default()), RuleSet::clause)
    }
}
