#![no_main]
use libfuzzer_sys::fuzz_target;
use swearfilter::{normalize, Filter, Options};

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let options = Options::from_bits_truncate(data[0]);
        let input = &data[1..];

        let filter = Filter::new(["foo", " ", "a b", ""], options);

        match filter.check_bytes(input) {
            Ok(matches) => assert!(matches.len() <= 4),
            Err(_) => assert!(options.is(Options::NORMALIZE)),
        }

        if let Ok(text) = std::str::from_utf8(input) {
            let normalized = normalize(text, options);
            let matches = filter.check(text).unwrap();
            for m in matches {
                if m.word != " " && !options.is(Options::SPACED_BYPASS) {
                    assert_eq!(normalized.find(m.word.as_str()), Some(m.index));
                }
            }

            filter.delete(["foo"]);
            filter.add(["foo"]);
        }
    }
});
