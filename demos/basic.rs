use urlrule::{evaluate, Clause, RuleSet};

fn main() {
    // Run on https sites, except YouTube.
    let rules = RuleSet::all()
        .clause(Clause::starts_with("https://"))
        .clause(Clause::contains("youtube.com").negated());

    print!("{rules}");

    for url in [
        "https://www.twitch.tv/foo",
        "https://www.youtube.com/watch?v=abc",
        "http://example.org",
    ] {
        println!("{url}: {}", evaluate(url, &rules, false));
    }

    // No rules configured: the caller decides what that means.
    let unconfigured = RuleSet::default();
    println!("unconfigured, match-everything policy: {}", evaluate("https://x", &unconfigured, true));
}
