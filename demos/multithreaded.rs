use std::sync::Arc;
use std::thread;

use urlrule::{Clause, Evaluator, RuleSet};

fn main() {
    let rules = Arc::new(
        RuleSet::any()
            .clause(Clause::regex(r"twitch\.tv/\w+"))
            .clause(Clause::regex(r"youtube\.com/watch")),
    );
    let evaluator = Arc::new(Evaluator::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = Arc::clone(&rules);
            let evaluator = Arc::clone(&evaluator);
            thread::spawn(move || {
                let url = if i % 2 == 0 {
                    format!("https://www.twitch.tv/channel{i}")
                } else {
                    format!("https://vimeo.com/{i}")
                };
                let result = evaluator.evaluate(&url, &rules, false);
                println!("Thread {i}: {url} -> {result}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    println!("cached patterns: {}", evaluator.cached_patterns());
}
