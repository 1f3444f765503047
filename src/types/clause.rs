use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::MatchKind;
use super::options::CompileOptions;
use crate::matcher::{Matcher, PatternMatcher};

/// Opaque identifier of a clause, used by editors to track a clause across
/// edits. Evaluation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClauseId(Uuid);

impl ClauseId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClauseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One pattern test within a [`RuleSet`](super::RuleSet).
///
/// Clauses are immutable snapshots: every `with_*` method consumes the clause
/// and returns the edited copy, keeping the same [`ClauseId`].
///
/// ```
/// use urlrule::{Clause, MatchKind};
///
/// let clause = Clause::new(MatchKind::Contains);
/// assert_eq!(clause.pattern(), "twitch.tv");
///
/// let edited = clause.clone().with_kind(MatchKind::Regex);
/// assert_eq!(edited.pattern(), r"twitch\.tv");
/// assert_eq!(edited.id(), clause.id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clause {
    /// Settings saved without ids load with fresh ones.
    #[cfg_attr(feature = "serde", serde(default))]
    id: ClauseId,
    enabled: bool,
    negate: bool,
    kind: MatchKind,
    pattern: String,
}

impl Clause {
    /// A new enabled, non-negated clause holding the kind's example pattern.
    #[must_use]
    pub fn new(kind: MatchKind) -> Self {
        Self::with_parts(kind, kind.default_pattern())
    }

    /// A new enabled, non-negated clause with an explicit pattern.
    #[must_use]
    pub fn with_parts(kind: MatchKind, pattern: impl Into<String>) -> Self {
        Self {
            id: ClauseId::new(),
            enabled: true,
            negate: false,
            kind,
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn starts_with(pattern: impl Into<String>) -> Self {
        Self::with_parts(MatchKind::StartsWith, pattern)
    }

    #[must_use]
    pub fn contains(pattern: impl Into<String>) -> Self {
        Self::with_parts(MatchKind::Contains, pattern)
    }

    #[must_use]
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::with_parts(MatchKind::Regex, pattern)
    }

    #[must_use]
    pub fn id(&self) -> ClauseId {
        self.id
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    #[must_use]
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Shorthand for `with_negate(true)`.
    #[must_use]
    pub fn negated(self) -> Self {
        self.with_negate(true)
    }

    /// Shorthand for `with_enabled(false)`.
    #[must_use]
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Change the match kind. When the kind actually changes, the pattern is
    /// replaced with the new kind's [`default_pattern`](MatchKind::default_pattern);
    /// selecting the current kind again leaves the pattern alone.
    #[must_use]
    pub fn with_kind(mut self, kind: MatchKind) -> Self {
        if kind != self.kind {
            kind.default_pattern().clone_into(&mut self.pattern);
            self.kind = kind;
        }
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Same clause content under a freshly generated id.
    #[must_use]
    pub fn with_fresh_id(mut self) -> Self {
        self.id = ClauseId::new();
        self
    }

    /// The id-free view of this clause consumed by evaluation.
    #[must_use]
    pub fn condition(&self) -> Condition<'_> {
        Condition {
            enabled: self.enabled,
            negate: self.negate,
            kind: self.kind,
            pattern: &self.pattern,
        }
    }
}

/// The parts of a [`Clause`] that decide whether it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition<'a> {
    pub enabled: bool,
    pub negate: bool,
    pub kind: MatchKind,
    pub pattern: &'a str,
}

impl Condition<'_> {
    /// Result of the pattern test alone, before negation. A regex that fails
    /// to compile yields `false`.
    #[must_use]
    pub fn raw_match(&self, url: &str, options: &CompileOptions) -> bool {
        match self.kind {
            MatchKind::StartsWith => url.starts_with(self.pattern),
            MatchKind::Contains => url.contains(self.pattern),
            MatchKind::Regex => Matcher::compile(self.kind, self.pattern, options).is_match(url),
        }
    }

    /// Raw match flipped by `negate`. Ignores `enabled`; skipping disabled
    /// conditions is the caller's job.
    #[must_use]
    pub fn test(&self, url: &str, options: &CompileOptions) -> bool {
        self.raw_match(url, options) ^ self.negate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clause_uses_default_pattern() {
        for kind in MatchKind::ALL {
            let clause = Clause::new(kind);
            assert_eq!(clause.pattern(), kind.default_pattern());
            assert!(clause.is_enabled());
            assert!(!clause.is_negated());
        }
    }

    #[test]
    fn ids_are_unique() {
        let a = Clause::new(MatchKind::Contains);
        let b = Clause::new(MatchKind::Contains);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn kind_change_resets_pattern() {
        let clause = Clause::contains("youtube.com").with_kind(MatchKind::StartsWith);
        assert_eq!(clause.kind(), MatchKind::StartsWith);
        assert_eq!(clause.pattern(), "https://www.twitch.tv");
    }

    #[test]
    fn same_kind_keeps_pattern() {
        let clause = Clause::contains("youtube.com").with_kind(MatchKind::Contains);
        assert_eq!(clause.pattern(), "youtube.com");
    }

    #[test]
    fn edits_keep_id() {
        let clause = Clause::regex("a+");
        let id = clause.id();
        let edited = clause
            .with_pattern("b+")
            .negated()
            .disabled()
            .with_kind(MatchKind::Contains);
        assert_eq!(edited.id(), id);
        assert!(edited.is_negated());
        assert!(!edited.is_enabled());
    }

    #[test]
    fn fresh_id_keeps_content() {
        let clause = Clause::starts_with("https://").negated();
        let copy = clause.clone().with_fresh_id();
        assert_ne!(copy.id(), clause.id());
        assert_eq!(copy.condition(), clause.condition());
    }

    #[test]
    fn condition_test_applies_negation() {
        let options = CompileOptions::default();
        let clause = Clause::contains("twitch");
        assert!(clause.condition().test("https://twitch.tv", &options));
        assert!(!clause.clone().negated().condition().test("https://twitch.tv", &options));
    }

    #[test]
    fn invalid_regex_raw_match_is_false() {
        let options = CompileOptions::default();
        let clause = Clause::regex("(");
        assert!(!clause.condition().raw_match("(", &options));
        assert!(clause.negated().condition().test("(", &options));
    }

    #[test]
    fn id_display_is_hex() {
        let shown = ClauseId::new().to_string();
        assert_eq!(shown.len(), 32);
        assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
