use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering rule-set text parsing and I/O.
///
/// Returned by [`RuleSet::from_dsl()`](crate::RuleSet::from_dsl) and
/// [`RuleSet::from_file()`](crate::RuleSet::from_file). Evaluation itself
/// has no error path.
#[derive(Debug, Error)]
pub enum UrlRuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
