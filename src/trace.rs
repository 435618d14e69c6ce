use std::env::args;
use std::io::{self, BufRead};
use swearfilter::{Filter, Options};

/// Usage: `trace [WORD]... < messages`
///
/// Checks each line of standard input against the words given as arguments, with spaced
/// bypass enabled.
pub fn main() {
    pretty_env_logger::init();

    let filter = Filter::new(args().skip(1), Options::default() | Options::SPACED_BYPASS);

    for line in io::stdin().lock().split(b'\n') {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read input: {}", e);
                break;
            }
        };
        let shown = String::from_utf8_lossy(&line);
        match filter.check_bytes(&line) {
            Ok(matches) => println!(
                "\"{}\" -> \"{}\" {:?}",
                shown,
                filter.normalize(&shown),
                matches
            ),
            Err(e) => println!("\"{}\" -> {}", shown, e),
        }
    }
}
