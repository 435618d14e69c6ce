use crate::mtch::Match;
use crate::words::{Words, EMPTY_SENTINEL};
use crate::{normalize, normalize_bytes, Options, Result, Set};
use std::fmt::{self, Debug, Formatter};

/// Filter reports which of its words appear in a message, after normalizing the message
/// according to its [`Options`].
///
/// Words are matched as plain substrings of the lower-cased, normalized message. A word
/// should therefore be lower-case and accent-free to be matched (e.g. `"foo"`, not
/// `"Fóo"`).
///
/// The single space word, `" "`, is special: it matches messages that normalize to nothing
/// at all, such as pure whitespace or zero-width spaces.
///
/// All methods take `&self`, so a `Filter` may be shared between threads (e.g. in an
/// `Arc`) while words are added and removed.
pub struct Filter {
    options: Options,
    words: Words,
}

impl Filter {
    /// Creates a `Filter` that looks for `words`.
    pub fn new<I>(words: I, options: Options) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            options,
            words: words.into_iter().collect(),
        }
    }

    /// Strip diacritical marks (accents) before matching, such that "fóó" is seen as "foo".
    ///
    /// Has no effect unless the `normalize` feature is enabled.
    ///
    /// The default is `true`.
    pub fn with_normalize(&mut self, normalize: bool) -> &mut Self {
        self.options.set(Options::NORMALIZE, normalize);
        self
    }

    /// Convert each tab to a single space.
    ///
    /// The default is `true`.
    pub fn with_spaced_tab(&mut self, spaced_tab: bool) -> &mut Self {
        self.options.set(Options::SPACED_TAB, spaced_tab);
        self
    }

    /// Trim surrounding whitespace, and remove internal runs of two or more whitespace
    /// characters (`"a  b"` becomes `"ab"`, not `"a b"`).
    ///
    /// The default is `true`.
    pub fn with_multi_whitespace_stripping(&mut self, multi_whitespace: bool) -> &mut Self {
        self.options.set(Options::MULTI_WHITESPACE, multi_whitespace);
        self
    }

    /// Remove zero-width spaces.
    ///
    /// The default is `true`.
    pub fn with_zero_width_stripping(&mut self, zero_width: bool) -> &mut Self {
        self.options.set(Options::ZERO_WIDTH, zero_width);
        self
    }

    /// If a word isn't found in the message as is, look for it again with all spaces removed,
    /// such that "f o o" is seen as "foo". This is more expensive and causes more false
    /// positives, e.g. "ass" in "glass shard".
    ///
    /// The default is `false`.
    pub fn with_spaced_bypass(&mut self, spaced_bypass: bool) -> &mut Self {
        self.options.set(Options::SPACED_BYPASS, spaced_bypass);
        self
    }

    /// The options currently in effect.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns every word found in `message`, at most once each, in no particular order.
    ///
    /// # Errors
    ///
    /// Never, for a `&str`. The `Result` mirrors [`Self::check_bytes`].
    pub fn check(&self, message: &str) -> Result<Vec<Match>> {
        let words = self.words.read();
        if words.is_empty() {
            return Ok(Vec::new());
        }
        let normalized = normalize(message, self.options);
        Ok(self.find(&words, &normalized))
    }

    /// Like [`Self::check`], but for raw bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Normalization`](crate::Error::Normalization) if [`Options::NORMALIZE`] is
    /// enabled and `message` is not valid UTF-8. No matches are reported in that case.
    pub fn check_bytes(&self, message: &[u8]) -> Result<Vec<Match>> {
        let words = self.words.read();
        if words.is_empty() {
            return Ok(Vec::new());
        }
        let normalized = normalize_bytes(message, self.options)?;
        Ok(self.find(&words, &normalized))
    }

    /// Normalizes `message` the way [`Self::check`] would, which is useful for interpreting
    /// [`Match::index`].
    pub fn normalize(&self, message: &str) -> String {
        normalize(message, self.options)
    }

    fn find(&self, words: &Set<String>, message: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        // Only computed if some word isn't found as is.
        let mut unspaced: Option<String> = None;
        let mut check_empty = false;

        for word in words {
            if word == EMPTY_SENTINEL {
                check_empty = true;
                continue;
            }

            if let Some(index) = message.find(word.as_str()) {
                matches.push(Match::new(word, index));
                continue;
            }

            if self.options.is(Options::SPACED_BYPASS) {
                let unspaced = unspaced.get_or_insert_with(|| message.replace(' ', ""));
                if let Some(index) = unspaced.find(word.as_str()) {
                    matches.push(Match::new(word, index));
                }
            }
        }

        if check_empty && message.is_empty() {
            matches.push(Match::new(EMPTY_SENTINEL, 0));
        }

        log::debug!("{} match(es) among {} word(s)", matches.len(), words.len());
        matches
    }

    /// Adds words to look for. Adding a word that is already present does nothing.
    pub fn add<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.words.add(words);
    }

    /// Stops looking for words. Deleting a word that isn't present does nothing.
    pub fn delete<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.words.delete(words);
    }

    /// Returns the words currently looked for, in no particular order.
    pub fn words(&self) -> Vec<String> {
        self.words.snapshot()
    }
}

impl Default for Filter {
    /// No words, and the default [`Options`].
    fn default() -> Self {
        Self::new(Vec::<String>::new(), Options::default())
    }
}

impl<S: Into<String>> FromIterator<S> for Filter {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter, Options::default())
    }
}

impl<S: Into<String>> Extend<S> for Filter {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.add(iter);
    }
}

impl Debug for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("options", &self.options)
            .field("words", &self.words.len())
            .finish()
    }
}
