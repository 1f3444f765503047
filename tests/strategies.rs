use proptest::prelude::*;
use urlrule::{Clause, Combinator, MatchKind, RuleSet};

// --- Fixed URL vocabulary ---
// URLs are assembled from a small set of schemes, hosts and paths so that
// generated patterns hit and miss with useful frequency.

const SCHEMES: &[&str] = &["https://", "http://", ""];
const HOSTS: &[&str] = &["www.twitch.tv", "twitch.tv", "youtube.com", "vimeo.com", "example.org"];
const PATHS: &[&str] = &["", "/", "/foo", "/videos/123", "/watch?v=abc"];

/// Fragments used as prefix/substring patterns.
const FRAGMENTS: &[&str] = &[
    "",
    "https://",
    "http://",
    "https://www.twitch.tv",
    "twitch",
    "twitch.tv",
    "youtube",
    "/foo",
    "?v=",
    "TWITCH",
];

/// Regex patterns, valid and malformed.
pub const REGEXES: &[&str] = &[
    r"twitch\.tv",
    r"^https://",
    r"\d+$",
    r"(youtube|vimeo)\.com",
    r"watch\?v=[a-z]+",
    "",
    "(",
    "[z-a]",
    "a{2,1}",
    r"\",
];

/// Generate a URL from the fixed vocabulary, or an arbitrary short string.
pub fn arb_url() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (
            prop::sample::select(SCHEMES),
            prop::sample::select(HOSTS),
            prop::sample::select(PATHS),
        )
            .prop_map(|(s, h, p)| format!("{s}{h}{p}")),
        1 => ".{0,24}",
    ]
}

pub fn arb_kind() -> impl Strategy<Value = MatchKind> {
    prop::sample::select(MatchKind::ALL.to_vec())
}

pub fn arb_combinator() -> impl Strategy<Value = Combinator> {
    prop_oneof![Just(Combinator::Any), Just(Combinator::All)]
}

/// Generate a clause with a kind-appropriate pattern and random flags.
pub fn arb_clause() -> impl Strategy<Value = Clause> {
    (arb_kind(), any::<bool>(), any::<bool>(), any::<prop::sample::Index>()).prop_map(
        |(kind, enabled, negate, idx)| {
            let pattern = match kind {
                MatchKind::Regex => *idx.get(REGEXES),
                _ => *idx.get(FRAGMENTS),
            };
            Clause::with_parts(kind, pattern)
                .with_enabled(enabled)
                .with_negate(negate)
        },
    )
}

/// Generate a rule set of 0..=6 clauses.
pub fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    (arb_combinator(), prop::collection::vec(arb_clause(), 0..=6)).prop_map(
        |(combinator, clauses)| {
            clauses
                .into_iter()
                .fold(RuleSet::new(combinator), RuleSet::clause)
        },
    )
}

/// Generate a rule set where every clause is enabled.
pub fn arb_enabled_rule_set() -> impl Strategy<Value = RuleSet> {
    arb_rule_set().prop_map(|rs| {
        (0..rs.clauses().len()).fold(rs, |acc, i| acc.map_clause(i, |c| c.with_enabled(true)))
    })
}
