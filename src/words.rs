use crate::Set;
use parking_lot::{RwLock, RwLockReadGuard};

/// The word that, instead of being searched for, matches messages that normalize to nothing.
pub const EMPTY_SENTINEL: &str = " ";

/// Set of words to filter, safe to share between threads.
///
/// Any number of readers may proceed together, but a writer excludes everyone else for the
/// duration of one call.
#[derive(Default)]
pub struct Words(RwLock<Set<String>>);

impl Words {
    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds words. Adding a word that is already present does nothing.
    pub fn add<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set = self.0.write();
        let before = set.len();
        set.extend(words.into_iter().map(Into::into));
        log::debug!("added {} word(s), now {}", set.len() - before, set.len());
    }

    /// Removes words. Removing a word that isn't present does nothing.
    pub fn delete<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut set = self.0.write();
        let before = set.len();
        for word in words {
            set.remove(word.as_ref());
        }
        log::debug!("deleted {} word(s), now {}", before - set.len(), set.len());
    }

    /// Returns a snapshot of the words, in no particular order.
    pub fn snapshot(&self) -> Vec<String> {
        self.0.read().iter().cloned().collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.read().contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Holds off writers until the guard is dropped.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Set<String>> {
        self.0.read()
    }
}

impl<S: Into<String>> FromIterator<S> for Words {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(RwLock::new(iter.into_iter().map(Into::into).collect()))
    }
}
