use crate::{Error, Options, Result};
use finl_unicode::categories::{CharacterCategories, MinorCategory};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Two or more consecutive characters for which `is_whitespace` holds.
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\t\n\x0C\r\p{Zs}]{2,}").unwrap();
}

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Returns `message` as the filter sees it, after applying the stages enabled in `options`,
/// in order:
///
///  1. lower-casing (always)
///  2. [`Options::NORMALIZE`]
///  3. [`Options::SPACED_TAB`]
///  4. [`Options::ZERO_WIDTH`]
///  5. [`Options::MULTI_WHITESPACE`]
///
/// [`Match::index`](crate::Match::index) refers to positions in this string.
///
/// Note that whitespace runs are removed entirely, not replaced by a single space:
///
/// ```
/// use swearfilter::{normalize, Options};
///
/// assert_eq!(normalize("  Héllo  Wörld ", Options::default()), "helloworld");
/// assert_eq!(normalize("Héllo Wörld", Options::default()), "hello world");
/// ```
pub fn normalize(message: &str, options: Options) -> String {
    let mut ret = message.to_lowercase();

    if options.is(Options::NORMALIZE) {
        ret = strip_diacritics(ret);
    }

    if options.is(Options::SPACED_TAB) && ret.contains('\t') {
        ret = ret.replace('\t', " ");
    }

    if options.is(Options::ZERO_WIDTH) && ret.contains(ZERO_WIDTH_SPACE) {
        ret = ret.replace(ZERO_WIDTH_SPACE, "");
    }

    if options.is(Options::MULTI_WHITESPACE) {
        ret = WHITESPACE_RUN.replace_all(trim_whitespace(&ret), "").into_owned();
    }

    log::trace!("normalized {:?} to {:?} ({:?})", message, ret, options);
    ret
}

/// Like [`normalize`], but for raw bytes e.g. straight from a socket.
///
/// If [`Options::NORMALIZE`] is enabled, the message must be valid UTF-8, or
/// [`Error::Normalization`] is returned. Otherwise, invalid sequences are replaced with
/// `U+FFFD`.
pub fn normalize_bytes(message: &[u8], options: Options) -> Result<String> {
    let message = if cfg!(feature = "normalize") && options.is(Options::NORMALIZE) {
        match std::str::from_utf8(message) {
            Ok(message) => Cow::Borrowed(message),
            Err(e) => {
                log::warn!("refusing to normalize message: {}", e);
                return Err(Error::Normalization(e));
            }
        }
    } else {
        String::from_utf8_lossy(message)
    };
    Ok(normalize(&message, options))
}

/// Removes diacritical marks (accents) by decomposing, dropping nonspacing marks, and
/// recomposing.
#[cfg(feature = "normalize")]
fn strip_diacritics(s: String) -> String {
    use unicode_normalization::UnicodeNormalization;

    fn filter_char(c: &char) -> bool {
        !matches!(c.get_minor_category(), MinorCategory::Mn)
    }

    s.nfd().filter(filter_char).nfc().collect()
}

#[cfg(not(feature = "normalize"))]
fn strip_diacritics(s: String) -> String {
    s
}

/// Trims whitespace characters from both ends of a string, according to the definition of
/// `crate::is_whitespace`.
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Returns true iff the character counts as whitespace when normalizing. This is ASCII
/// whitespace other than vertical tab, plus the Unicode space separators (e.g. `U+00A0`,
/// `U+3000`). Notably, `U+200B` is not whitespace; see [`Options::ZERO_WIDTH`].
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r')
        || matches!(c.get_minor_category(), MinorCategory::Zs)
}

#[cfg(test)]
mod tests {
    use crate::{is_whitespace, normalize, normalize_bytes, trim_whitespace, Error, Options};
    use rand::seq::SliceRandom;
    use rand::{thread_rng, Rng};

    fn default(s: &str) -> String {
        normalize(s, Options::default())
    }

    fn without(s: &str, disabled: Options) -> String {
        normalize(s, Options::default() - disabled)
    }

    #[test]
    fn lowercase() {
        assert_eq!(default("FOO"), "foo");
        assert_eq!(without("FoO", Options::ALL_NORMALIZATION), "foo");
    }

    #[cfg(feature = "normalize")]
    #[test]
    fn diacritics() {
        assert_eq!(default("fóó"), "foo");
        assert_eq!(default("ÀÉÎÕÜ"), "aeiou");
        // Already decomposed.
        assert_eq!(default("fo\u{301}o\u{308}"), "foo");
        // Zalgo.
        assert_eq!(default("f\u{338}\u{358}\u{32a}o\u{337}\u{33d}o\u{336}"), "foo");
        // Lower-casing yields a combining dot above.
        assert_eq!(default("İ"), "i");
        // Composition that isn't an accent survives the round trip.
        assert_eq!(default("한국어"), "한국어");
        assert_eq!(default("🥞"), "🥞");

        assert_eq!(without("fóó", Options::NORMALIZE), "fóó");
    }

    #[test]
    fn tabs() {
        assert_eq!(without("a\tb", Options::MULTI_WHITESPACE), "a b");
        assert_eq!(without("a\t\tb", Options::MULTI_WHITESPACE), "a  b");
        assert_eq!(default("a\t\tb"), "ab");
        assert_eq!(default("f\to\to"), "f o o");

        // A single tab is not a run, so it survives.
        assert_eq!(without("a\tb", Options::SPACED_TAB), "a\tb");
        assert_eq!(without("a\t b", Options::SPACED_TAB), "ab");
    }

    #[test]
    fn zero_width() {
        assert_eq!(default("f\u{200b}oo"), "foo");
        assert_eq!(default("\u{200b}\u{200b}"), "");
        assert_eq!(without("f\u{200b}oo", Options::ZERO_WIDTH), "f\u{200b}oo");

        // Stripped before whitespace, so the spaces around it form one run.
        assert_eq!(default("a \u{200b} b"), "ab");
    }

    #[test]
    fn multi_whitespace() {
        assert_eq!(default("a  b"), "ab");
        assert_eq!(default("a b"), "a b");
        assert_eq!(default("  hello  world  "), "helloworld");
        assert_eq!(default("\n\r\thello\n"), "hello");
        assert_eq!(default("a\u{3000}\u{3000}b"), "ab");
        assert_eq!(default("\u{a0}foo\u{a0}"), "foo");
        assert_eq!(default(" \t \u{200b}  "), "");

        assert_eq!(without("  a  b  ", Options::MULTI_WHITESPACE), "  a  b  ");
    }

    #[test]
    fn nothing_enabled() {
        assert_eq!(
            normalize(" A\t\u{200b}  B ", Options::empty()),
            " a\t\u{200b}  b "
        );
    }

    #[test]
    fn whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{3000}'));
        assert!(is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\u{200b}'));
        assert!(!is_whitespace('\u{b}'));
        assert!(!is_whitespace('a'));

        assert_eq!(trim_whitespace("\u{3000} a b \t"), "a b");
    }

    #[cfg(feature = "normalize")]
    #[test]
    fn bytes() {
        assert_eq!(normalize_bytes("FÓÓ".as_bytes(), Options::default()).unwrap(), "foo");

        match normalize_bytes(b"f\xffoo", Options::default()) {
            Err(Error::Normalization(e)) => assert_eq!(e.valid_up_to(), 1),
            other => panic!("expected normalization error, got {:?}", other),
        }

        assert_eq!(
            normalize_bytes(b"F\xffOO", Options::default() - Options::NORMALIZE).unwrap(),
            "f\u{fffd}oo"
        );
    }

    #[test]
    fn idempotent() {
        const ALPHABET: &[char] = &[
            'a', 'b', 'F', 'O', 'é', 'Ó', 'ñ', '\u{301}', ' ', ' ', '\t', '\n', '\u{a0}',
            '\u{3000}', '\u{200b}', 'İ', 'ß', '한',
        ];

        let mut rng = thread_rng();

        for _ in 0..1000 {
            let len = rng.gen_range(0..24);
            let input: String = (0..len)
                .map(|_| *ALPHABET.choose(&mut rng).unwrap())
                .collect();
            let options = Options::from_bits_truncate(rng.gen());

            let once = normalize(&input, options);
            let twice = normalize(&once, options);
            assert_eq!(once, twice, "{:?} with {:?}", input, options);
        }
    }
}
