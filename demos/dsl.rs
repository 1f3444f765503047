use urlrule::RuleSet;

fn main() {
    let rules = RuleSet::from_file("demos/rules.urlrule").expect("failed to load rules");

    print!("{rules}");

    for url in ["https://www.twitch.tv/foo", "https://www.twitch.tv/embed/foo"] {
        println!("{url}: {}", rules.evaluate(url, false));
    }
}
