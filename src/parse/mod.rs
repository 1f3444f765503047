//! Line-oriented text format for rule sets.
//!
//! ```text
//! # comment
//! match all                      # optional, defaults to `any`
//! starts_with "https://"
//! !contains "vimeo"              # `!` negates the clause
//! disabled regex "twitch\.tv"    # kept, but skipped by evaluation
//! ```
//!
//! Inside quotes only `\"` and `\\` are escapes; other backslashes are kept,
//! so regex patterns are written as-is. Every parsed clause gets a new id.

mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedRuleSet;

/// Parse rule-set text into a [`ParsedRuleSet`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid rule-set text.
pub fn parse(input: &str) -> Result<ParsedRuleSet, ParseError> {
    use winnow::Parser;
    grammar::parse_rule_set.parse(input).map_err(|e| {
        let consumed = &input[..e.offset().min(input.len())];
        let line = consumed.matches('\n').count() + 1;
        ParseError::new(line, e.inner().to_string())
    })
}
