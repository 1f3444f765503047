//! Reuse of compiled regex matchers across evaluations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::matcher::Matcher;
use crate::types::{CompiledRuleSet, EvaluationReport};
use crate::{CompileOptions, MatchKind, RuleSet};

/// Default number of distinct regex patterns kept by a [`MatcherCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Thread-safe map from regex pattern to its compiled [`Matcher`].
///
/// Every entry is compiled under the [`CompileOptions`] the cache was built
/// with, so a hit is always the matcher a fresh compile would produce.
/// Patterns that fail to compile are cached too, as [`Matcher::Invalid`].
/// When the cache is full it is cleared before the next insert; an editor
/// typing a pattern one character at a time would otherwise grow it without
/// bound.
#[derive(Debug)]
pub struct MatcherCache {
    entries: RwLock<HashMap<String, Arc<Matcher>>>,
    capacity: usize,
    options: CompileOptions,
}

impl MatcherCache {
    /// A cache compiling with default options.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_options(capacity, CompileOptions::default())
    }

    #[must_use]
    pub fn with_options(capacity: usize, options: CompileOptions) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            options,
        }
    }

    /// Cached matcher for `pattern`, compiling and inserting it on a miss.
    ///
    /// A poisoned lock is bypassed: the pattern is compiled and returned
    /// without touching the map.
    pub fn get_or_compile(&self, pattern: &str) -> Arc<Matcher> {
        if let Ok(entries) = self.entries.read() {
            if let Some(hit) = entries.get(pattern) {
                tracing::trace!(pattern, "matcher cache hit");
                return Arc::clone(hit);
            }
        }

        tracing::trace!(pattern, "matcher cache miss");
        let compiled = Arc::new(Matcher::compile(MatchKind::Regex, pattern, &self.options));

        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.capacity && !entries.contains_key(pattern) {
                tracing::debug!(capacity = self.capacity, "matcher cache full; clearing");
                entries.clear();
            }
            return Arc::clone(entries.entry(pattern.to_owned()).or_insert(compiled));
        }
        compiled
    }

    /// Number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }
}

impl Default for MatcherCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Compile options plus an optional matcher cache.
///
/// Results are identical to [`RuleSet::evaluate()`]; the evaluator only
/// avoids recompiling regexes it has already seen. Share one behind `Arc`
/// across threads.
///
/// ```
/// use urlrule::{Clause, Evaluator, RuleSet};
///
/// let evaluator = Evaluator::new();
/// let rules = RuleSet::any().clause(Clause::regex(r"twitch\.tv"));
/// assert!(evaluator.evaluate("http://twitch.tv", &rules, false));
/// assert_eq!(evaluator.cached_patterns(), 1);
/// ```
#[derive(Debug)]
pub struct Evaluator {
    options: CompileOptions,
    cache: Option<MatcherCache>,
}

/// Builder for an [`Evaluator`].
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    options: CompileOptions,
    cache_capacity: Option<usize>,
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self {
            options: CompileOptions::default(),
            cache_capacity: Some(DEFAULT_CACHE_CAPACITY),
        }
    }
}

impl EvaluatorBuilder {
    #[must_use]
    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Keep up to `capacity` compiled regexes.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Compile every regex on every call.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache_capacity = None;
        self
    }

    #[must_use]
    pub fn build(self) -> Evaluator {
        Evaluator {
            options: self.options,
            cache: self
                .cache_capacity
                .map(|capacity| MatcherCache::with_options(capacity, self.options)),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Default options with a cache of [`DEFAULT_CACHE_CAPACITY`] patterns.
    #[must_use]
    pub fn new() -> Self {
        EvaluatorBuilder::default().build()
    }

    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile `rule_set`, reusing cached regex matchers.
    #[must_use]
    pub fn compile(&self, rule_set: &RuleSet) -> CompiledRuleSet {
        crate::compile::compile(rule_set, &self.options, self.cache.as_ref())
    }

    /// Same result as [`crate::evaluate`].
    #[must_use]
    pub fn evaluate(&self, url: &str, rule_set: &RuleSet, neutral: bool) -> bool {
        match &self.cache {
            Some(_) => self.compile(rule_set).evaluate(url, neutral),
            None => rule_set.evaluate_with(url, neutral, &self.options),
        }
    }

    /// Per-clause report under this evaluator's options. Agrees with
    /// [`evaluate()`](Self::evaluate).
    #[must_use]
    pub fn evaluate_detailed(
        &self,
        url: &str,
        rule_set: &RuleSet,
        neutral: bool,
    ) -> EvaluationReport {
        self.compile(rule_set).evaluate_detailed(url, neutral)
    }

    /// Number of patterns currently cached; zero when caching is off.
    #[must_use]
    pub fn cached_patterns(&self) -> usize {
        self.cache.as_ref().map_or(0, MatcherCache::len)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::PatternMatcher;
    use crate::Clause;

    #[test]
    fn cache_reuses_matcher() {
        let cache = MatcherCache::default();
        let a = cache.get_or_compile(r"twitch\.tv");
        let b = cache.get_or_compile(r"twitch\.tv");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_stores_invalid_patterns() {
        let cache = MatcherCache::default();
        let m = cache.get_or_compile("(");
        assert!(m.is_invalid());
        assert!(!m.is_match("("));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_clears_when_full() {
        let cache = MatcherCache::new(2);
        cache.get_or_compile("a");
        cache.get_or_compile("b");
        assert_eq!(cache.len(), 2);
        cache.get_or_compile("c");
        assert_eq!(cache.len(), 1);
        // Re-requesting a present key never clears.
        cache.get_or_compile("c");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_compiles_under_its_own_limits() {
        let url = "a".repeat(100);
        let loose = MatcherCache::default();
        let strict = MatcherCache::with_options(8, CompileOptions::new().regex_size_limit(32));

        assert!(loose.get_or_compile("[a-z]{100}").is_match(&url));
        let hit = strict.get_or_compile("[a-z]{100}");
        assert!(hit.is_invalid());
        assert!(!hit.is_match(&url));
        assert_eq!(strict.options().size_limit(), 32);
    }

    #[test]
    fn evaluators_with_different_limits_disagree_like_fresh_compiles() {
        let url = "a".repeat(100);
        let rules = RuleSet::any().clause(Clause::regex("[a-z]{100}"));
        let strict_options = CompileOptions::new().regex_size_limit(32);

        let loose = Evaluator::new();
        let strict = Evaluator::builder().options(strict_options).build();

        assert!(loose.evaluate(&url, &rules, false));
        assert_eq!(
            strict.evaluate(&url, &rules, false),
            rules.evaluate_with(&url, false, &strict_options)
        );
        assert!(!strict.evaluate(&url, &rules, false));
    }

    #[test]
    fn detailed_uses_evaluator_limits() {
        let url = "a".repeat(100);
        let rules = RuleSet::any().clause(Clause::regex("[a-z]{100}"));
        let strict = Evaluator::builder()
            .options(CompileOptions::new().regex_size_limit(32))
            .build();

        let report = strict.evaluate_detailed(&url, &rules, false);
        assert_eq!(report.result(), strict.evaluate(&url, &rules, false));
        assert!(report.has_invalid_regex());
        assert!(!report.clauses()[0].raw);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(MatcherCache::new(0).capacity(), 1);
    }

    #[test]
    fn clear_empties() {
        let cache = MatcherCache::default();
        cache.get_or_compile("x");
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn evaluator_only_caches_regex() {
        let evaluator = Evaluator::new();
        let rules = RuleSet::any()
            .clause(Clause::contains("a"))
            .clause(Clause::starts_with("b"))
            .clause(Clause::regex("c+"));
        assert!(evaluator.evaluate("ccc", &rules, false));
        assert_eq!(evaluator.cached_patterns(), 1);
        evaluator.clear_cache();
        assert_eq!(evaluator.cached_patterns(), 0);
    }

    #[test]
    fn evaluator_without_cache() {
        let evaluator = Evaluator::builder().without_cache().build();
        let rules = RuleSet::any().clause(Clause::regex("c+"));
        assert!(evaluator.evaluate("ccc", &rules, false));
        assert_eq!(evaluator.cached_patterns(), 0);
    }

    #[test]
    fn evaluator_applies_options() {
        let evaluator = Evaluator::builder()
            .options(CompileOptions::new().regex_size_limit(32))
            .cache_capacity(4)
            .build();
        let rules = RuleSet::any().clause(Clause::regex(r"[a-z]{100}").negated());
        // Oversized pattern never raw-matches, so its negation passes.
        assert!(evaluator.evaluate("", &rules, false));
        assert_eq!(evaluator.options().size_limit(), 32);
    }
}
