use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::clause::{Clause, Condition};
use super::compiled::CompiledRuleSet;
use super::evaluation_report::EvaluationReport;
use super::kind::{Combinator, MatchKind};
use super::options::CompileOptions;

/// A combinator plus an ordered list of clauses.
///
/// `RuleSet::default()` stands for "no rules configured": it has no clauses
/// and always evaluates to the caller's neutral value.
///
/// Editing methods consume the rule set and return the edited copy, so a
/// value held elsewhere is never changed underneath its owner.
///
/// # Example
///
/// ```
/// use urlrule::{Clause, RuleSet};
///
/// let rules = RuleSet::all()
///     .clause(Clause::starts_with("https://"))
///     .clause(Clause::contains("vimeo"));
///
/// assert!(!rules.evaluate("https://twitch.tv", false));
/// assert!(rules.evaluate("https://vimeo.com/1", false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleSet {
    #[cfg_attr(feature = "serde", serde(default))]
    combinator: Combinator,
    #[cfg_attr(feature = "serde", serde(default))]
    clauses: Vec<Clause>,
}

impl RuleSet {
    #[must_use]
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            clauses: Vec::new(),
        }
    }

    /// An empty rule set combining clauses with OR.
    #[must_use]
    pub fn any() -> Self {
        Self::new(Combinator::Any)
    }

    /// An empty rule set combining clauses with AND.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Combinator::All)
    }

    /// Append a clause.
    #[must_use]
    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Append a new clause of `kind` holding the kind's example pattern.
    #[must_use]
    pub fn push_default(self, kind: MatchKind) -> Self {
        self.clause(Clause::new(kind))
    }

    #[must_use]
    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    /// Replace the clause at `index`. Out-of-range indices leave the rule set unchanged.
    #[must_use]
    pub fn replace_clause(mut self, index: usize, clause: Clause) -> Self {
        if let Some(slot) = self.clauses.get_mut(index) {
            *slot = clause;
        }
        self
    }

    /// Edit the clause at `index` through `f`. Out-of-range indices leave the
    /// rule set unchanged and `f` is not called.
    #[must_use]
    pub fn map_clause(mut self, index: usize, f: impl FnOnce(Clause) -> Clause) -> Self {
        if index < self.clauses.len() {
            let clause = self.clauses.remove(index);
            self.clauses.insert(index, f(clause));
        }
        self
    }

    /// Remove the clause at `index`. Out-of-range indices leave the rule set unchanged.
    #[must_use]
    pub fn remove_clause(mut self, index: usize) -> Self {
        if index < self.clauses.len() {
            self.clauses.remove(index);
        }
        self
    }

    /// Copy of this rule set in which every clause has a new id.
    ///
    /// Use this when pasting a rule set so clause ids stay unique.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            combinator: self.combinator,
            clauses: self
                .clauses
                .iter()
                .cloned()
                .map(Clause::with_fresh_id)
                .collect(),
        }
    }

    #[must_use]
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Id-free views of all clauses, enabled or not, in order.
    pub fn conditions(&self) -> impl Iterator<Item = Condition<'_>> + '_ {
        self.clauses.iter().map(Clause::condition)
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.is_enabled()).count()
    }

    /// `true` when no clause is enabled, so evaluation returns the neutral value.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.enabled_count() == 0
    }

    /// Test `url` against this rule set.
    ///
    /// Returns `neutral` when no clause is enabled. Otherwise the enabled
    /// clauses' negated results are combined with AND or OR. Regexes are
    /// compiled on the fly; use [`compile()`](Self::compile) or an
    /// [`Evaluator`](crate::Evaluator) to reuse them.
    #[must_use]
    pub fn evaluate(&self, url: &str, neutral: bool) -> bool {
        self.evaluate_with(url, neutral, &CompileOptions::default())
    }

    /// [`evaluate()`](Self::evaluate) with explicit regex compile limits.
    #[must_use]
    pub fn evaluate_with(&self, url: &str, neutral: bool, options: &CompileOptions) -> bool {
        crate::evaluate::evaluate_conditions(
            self.combinator,
            self.conditions(),
            url,
            neutral,
            options,
        )
    }

    /// Evaluate every enabled clause and report each outcome.
    pub fn evaluate_detailed(&self, url: &str, neutral: bool) -> EvaluationReport {
        self.evaluate_detailed_with(url, neutral, &CompileOptions::default())
    }

    /// [`evaluate_detailed()`](Self::evaluate_detailed) with explicit regex
    /// compile limits. Agrees with [`evaluate_with()`](Self::evaluate_with)
    /// for the same options.
    pub fn evaluate_detailed_with(
        &self,
        url: &str,
        neutral: bool,
        options: &CompileOptions,
    ) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.compile_with(options), url, neutral)
    }

    /// Pre-compile the enabled clauses with default options.
    #[must_use]
    pub fn compile(&self) -> CompiledRuleSet {
        self.compile_with(&CompileOptions::default())
    }

    #[must_use]
    pub fn compile_with(&self, options: &CompileOptions) -> CompiledRuleSet {
        crate::compile::compile(self, options, None)
    }

    /// Parse the rule-set text format.
    ///
    /// ```
    /// use urlrule::RuleSet;
    ///
    /// let rules = RuleSet::from_dsl(r#"
    /// match all
    /// starts_with "https://"
    /// !contains "vimeo"
    /// "#).unwrap();
    /// assert!(rules.evaluate("https://twitch.tv", false));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UrlRuleError`](crate::UrlRuleError) on malformed input.
    pub fn from_dsl(input: &str) -> Result<Self, crate::UrlRuleError> {
        let parsed = crate::parse::parse(input)?;
        Ok(parsed.into())
    }

    /// Read a file in the rule-set text format.
    ///
    /// # Errors
    ///
    /// Returns [`UrlRuleError`](crate::UrlRuleError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::UrlRuleError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }
}

impl FromIterator<Clause> for RuleSet {
    /// Collects into an `Any` rule set.
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            combinator: Combinator::Any,
            clauses: iter.into_iter().collect(),
        }
    }
}

/// Renders the text format accepted by [`RuleSet::from_dsl()`].
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "match {}", self.combinator)?;
        for clause in &self.clauses {
            if !clause.is_enabled() {
                write!(f, "disabled ")?;
            }
            if clause.is_negated() {
                write!(f, "!")?;
            }
            write!(f, "{} ", clause.kind())?;
            write_quoted(f, clause.pattern())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}
