use urlrule::{Clause, MatchKind, RuleSet};

fn main() {
    let rules = RuleSet::any()
        .clause(Clause::new(MatchKind::StartsWith))
        .clause(Clause::regex(r"youtube\.com/(watch|shorts)"))
        .clause(Clause::regex("(unclosed").negated())
        .clause(Clause::contains("vimeo").disabled());

    let report = rules.evaluate_detailed("https://www.youtube.com/shorts/xyz", false);

    println!("{report}");
    println!();
    for outcome in report.clauses() {
        println!(
            "clause {} ({}): raw = {}, result = {}{}",
            outcome.index,
            outcome.kind,
            outcome.raw,
            outcome.result,
            if outcome.invalid_regex { " [invalid regex]" } else { "" },
        );
    }
    println!("Duration: {:?}", report.duration());
}
