//! URL condition matching.
//!
//! A [`RuleSet`] holds clauses that each test a URL string by prefix,
//! substring or regular expression, optionally negated or disabled. The
//! enabled clauses are combined with AND ([`Combinator::All`]) or OR
//! ([`Combinator::Any`]); a rule set with no enabled clause evaluates to a
//! neutral value chosen by the caller.
//!
//! ```
//! use urlrule::{evaluate, Clause, RuleSet};
//!
//! let rules = RuleSet::any()
//!     .clause(Clause::starts_with("https://www.twitch.tv"))
//!     .clause(Clause::regex(r"youtube\.com/watch"));
//!
//! assert!(evaluate("https://www.twitch.tv/foo", &rules, false));
//! assert!(!evaluate("https://vimeo.com", &rules, false));
//! ```
//!
//! Evaluation never fails. A regex that does not compile simply never
//! matches, so a negated malformed regex always passes.

mod cache;
mod compile;
mod error;
mod evaluate;
pub mod matcher;
pub mod parse;
mod types;

pub use cache::{Evaluator, EvaluatorBuilder, MatcherCache, DEFAULT_CACHE_CAPACITY};
pub use error::UrlRuleError;
pub use evaluate::{evaluate, evaluate_opt};
pub use types::{
    Clause, ClauseId, ClauseOutcome, CompileOptions, CompiledRuleSet, Combinator, Condition,
    EvaluationReport, MatchKind, RuleSet, DEFAULT_REGEX_NEST_LIMIT, DEFAULT_REGEX_SIZE_LIMIT,
};
