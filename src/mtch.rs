/// A filtered word found in a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// The word, as stored in the filter (not as it appeared in the message).
    pub word: String,
    /// Byte offset where the word starts in the *normalized* message, or in the
    /// space-stripped message if found via [`Options::SPACED_BYPASS`](crate::Options::SPACED_BYPASS).
    ///
    /// This is not an offset into the original message whenever normalization changed its
    /// length. Use [`normalize`](crate::normalize) to obtain the string it refers to.
    pub index: usize,
}

impl Match {
    pub(crate) fn new(word: &str, index: usize) -> Self {
        Self {
            word: word.to_owned(),
            index,
        }
    }
}
