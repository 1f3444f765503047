mod clause;
mod compiled;
mod evaluation_report;
mod kind;
mod options;
mod ruleset;

pub use clause::{Clause, ClauseId, Condition};
pub(crate) use compiled::CompiledClause;
pub use compiled::CompiledRuleSet;
pub use evaluation_report::{ClauseOutcome, EvaluationReport};
pub use kind::{Combinator, MatchKind};
pub use options::{CompileOptions, DEFAULT_REGEX_NEST_LIMIT, DEFAULT_REGEX_SIZE_LIMIT};
pub use ruleset::RuleSet;
