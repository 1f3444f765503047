//! Compiled pattern tests, one per [`MatchKind`].
//!
//! - `Prefix`: `str::starts_with`
//! - `Substring`: `str::contains`
//! - `RegexMatcher`: unanchored `Regex::is_match`
//!
//! A regex that fails to compile becomes [`Matcher::Invalid`], which never
//! matches. Compilation therefore cannot fail.

use regex::{Regex, RegexBuilder};

use crate::{CompileOptions, MatchKind};

/// A test applied to a URL string.
pub trait PatternMatcher {
    fn is_match(&self, haystack: &str) -> bool;
}

/// Matches when the haystack begins with the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }
}

impl PatternMatcher for Prefix {
    fn is_match(&self, haystack: &str) -> bool {
        haystack.starts_with(self.0.as_str())
    }
}

/// Matches when the needle occurs anywhere in the haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substring(String);

impl Substring {
    pub fn new(needle: impl Into<String>) -> Self {
        Self(needle.into())
    }
}

impl PatternMatcher for Substring {
    fn is_match(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_str())
    }
}

/// Matches when the regex finds a match anywhere in the haystack.
#[derive(Debug, Clone)]
pub struct RegexMatcher(Regex);

impl RegexMatcher {
    /// Compile `pattern` under the limits in `options`.
    ///
    /// # Errors
    ///
    /// Returns the [`regex::Error`] for malformed or oversized patterns.
    pub fn new(pattern: &str, options: &CompileOptions) -> Result<Self, regex::Error> {
        RegexBuilder::new(pattern)
            .size_limit(options.size_limit())
            .nest_limit(options.nest_limit())
            .build()
            .map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PatternMatcher for RegexMatcher {
    fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

/// A compiled clause pattern.
#[derive(Debug, Clone)]
pub enum Matcher {
    StartsWith(Prefix),
    Contains(Substring),
    Regex(RegexMatcher),
    /// A regex pattern that did not compile.
    Invalid { pattern: String, reason: String },
}

impl Matcher {
    /// Compile `pattern` for `kind`. Regex failures are logged and folded
    /// into [`Matcher::Invalid`].
    pub fn compile(kind: MatchKind, pattern: &str, options: &CompileOptions) -> Self {
        match kind {
            MatchKind::StartsWith => Matcher::StartsWith(Prefix::new(pattern)),
            MatchKind::Contains => Matcher::Contains(Substring::new(pattern)),
            MatchKind::Regex => match RegexMatcher::new(pattern, options) {
                Ok(re) => Matcher::Regex(re),
                Err(e) => {
                    tracing::debug!(pattern, error = %e, "regex clause failed to compile; it will never match");
                    Matcher::Invalid {
                        pattern: pattern.to_owned(),
                        reason: e.to_string(),
                    }
                }
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> MatchKind {
        match self {
            Matcher::StartsWith(_) => MatchKind::StartsWith,
            Matcher::Contains(_) => MatchKind::Contains,
            Matcher::Regex(_) | Matcher::Invalid { .. } => MatchKind::Regex,
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Matcher::Invalid { .. })
    }
}

impl PatternMatcher for Matcher {
    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Matcher::StartsWith(m) => m.is_match(haystack),
            Matcher::Contains(m) => m.is_match(haystack),
            Matcher::Regex(m) => m.is_match(haystack),
            Matcher::Invalid { .. } => false,
        }
    }
}
