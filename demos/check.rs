use swearfilter::{Filter, Options};

fn main() {
    pretty_env_logger::init();

    let filter = Filter::new(["foo", "bar", " "], Options::default());

    // Plain words are unaffected.
    show_check(&filter, "Hello world!");

    // Filtered words are found regardless of case and accents.
    show_check(&filter, "Hello FÓÓ world bär");

    // Padding is removed, and so are zero-width spaces.
    show_check(&filter, "b\u{200b}a\u{200b}r  f\to\to");

    // Messages that normalize to nothing are flagged.
    show_check(&filter, " \u{200b} \t ");

    // Spacing letters apart only works with spaced bypass.
    show_check(&filter, "f o o");
    let mut filter = filter;
    filter.with_spaced_bypass(true);
    show_check(&filter, "f o o");
}

fn show_check(filter: &Filter, text: &str) {
    match filter.check(text) {
        Ok(matches) => println!("{:?} -> {:?} {:?}", text, filter.normalize(text), matches),
        Err(e) => println!("{:?} -> {}", text, e),
    }
}
