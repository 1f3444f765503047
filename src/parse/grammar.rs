use winnow::ascii::{line_ending, space0, space1, till_line_ending};
use winnow::combinator::{alt, cut_err, eof, opt, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Clause, Combinator, MatchKind};

use super::parser::ParsedRuleSet;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

/// Trailing spaces, an optional comment, then a newline or end of input.
fn line_end(input: &mut &str) -> ModalResult<()> {
    space0.parse_next(input)?;
    opt(('#', till_line_ending)).parse_next(input)?;
    alt((line_ending.void(), eof.void())).parse_next(input)
}

fn end_of_line(input: &mut &str) -> ModalResult<()> {
    cut_err(line_end)
        .context(StrContext::Expected(StrContextValue::Description(
            "end of line",
        )))
        .parse_next(input)
}

// -- Patterns ---------------------------------------------------------------

/// A double-quoted pattern. `\"` and `\\` are unescaped; any other backslash
/// sequence is kept as written so regex escapes like `\.` need no doubling.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' | '\\' => s.push(esc),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

// -- Keywords ---------------------------------------------------------------

fn match_kind(input: &mut &str) -> ModalResult<MatchKind> {
    alt((
        "starts_with".value(MatchKind::StartsWith),
        "contains".value(MatchKind::Contains),
        "regex".value(MatchKind::Regex),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "match kind",
    )))
    .parse_next(input)
}

fn combinator_line(input: &mut &str) -> ModalResult<Combinator> {
    ws.parse_next(input)?;
    "match".parse_next(input)?;
    space1.parse_next(input)?;
    let combinator = cut_err(alt((
        "all".value(Combinator::All),
        "any".value(Combinator::Any),
    )))
    .context(StrContext::Expected(StrContextValue::Description(
        "`all` or `any`",
    )))
    .parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(combinator)
}

// -- Clauses ----------------------------------------------------------------

fn clause(input: &mut &str) -> ModalResult<Clause> {
    ws.parse_next(input)?;
    let disabled = opt(("disabled", space1)).parse_next(input)?.is_some();
    let negate = opt('!').parse_next(input)?.is_some();

    // Once a modifier is seen this must be a clause.
    let kind = if disabled || negate {
        cut_err(match_kind).parse_next(input)?
    } else {
        match_kind.parse_next(input)?
    };

    space0.parse_next(input)?;
    let pattern = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "quoted pattern",
        )))
        .parse_next(input)?;
    end_of_line.parse_next(input)?;

    Ok(Clause::with_parts(kind, pattern)
        .with_enabled(!disabled)
        .with_negate(negate))
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_rule_set(input: &mut &str) -> ModalResult<ParsedRuleSet> {
    let combinator = opt(combinator_line).parse_next(input)?;
    let clauses: Vec<Clause> = repeat(0.., clause).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedRuleSet {
        combinator,
        clauses,
    })
}
