use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a clause's pattern is tested against a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MatchKind {
    /// The URL begins with the pattern.
    StartsWith,
    /// The pattern occurs anywhere in the URL.
    Contains,
    /// The pattern is a regular expression with at least one match in the URL.
    Regex,
}

impl MatchKind {
    /// Every kind, in the order the editor lists them.
    pub const ALL: [MatchKind; 3] = [MatchKind::StartsWith, MatchKind::Contains, MatchKind::Regex];

    /// Example pattern a clause is reset to when its kind changes.
    #[must_use]
    pub fn default_pattern(self) -> &'static str {
        match self {
            MatchKind::StartsWith => "https://www.twitch.tv",
            MatchKind::Contains => "twitch.tv",
            MatchKind::Regex => r"twitch\.tv",
        }
    }

    /// Keyword used for this kind in the rule-set text format.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            MatchKind::StartsWith => "starts_with",
            MatchKind::Contains => "contains",
            MatchKind::Regex => "regex",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How the results of the enabled clauses are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Combinator {
    /// Logical OR: one passing clause is enough.
    #[default]
    Any,
    /// Logical AND: every enabled clause must pass.
    All,
}

impl Combinator {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Combinator::Any => "any",
            Combinator::All => "all",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns() {
        assert_eq!(MatchKind::StartsWith.default_pattern(), "https://www.twitch.tv");
        assert_eq!(MatchKind::Contains.default_pattern(), "twitch.tv");
        assert_eq!(MatchKind::Regex.default_pattern(), "twitch\\.tv");
    }

    #[test]
    fn kind_display_uses_keyword() {
        let shown: Vec<String> = MatchKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["starts_with", "contains", "regex"]);
    }

    #[test]
    fn combinator_defaults_to_any() {
        assert_eq!(Combinator::default(), Combinator::Any);
        assert_eq!(Combinator::All.to_string(), "all");
    }
}
