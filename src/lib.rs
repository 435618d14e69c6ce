//! swearfilter reports which of a set of words appear in a message, after normalizing the
//! message to undo common obfuscation (accents, tabs, zero-width spaces, padding).
//!
//! ```
//! use swearfilter::{Filter, Options};
//!
//! let filter = Filter::new(["foo"], Options::default() | Options::SPACED_BYPASS);
//!
//! let matches = filter.check("what the F o ó dude").unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].word, "foo");
//! ```

mod error;
mod filter;
mod mtch;
mod normalize;
mod options;
mod words;

pub use error::{Error, Result};
pub use filter::Filter;
pub use mtch::Match;
pub use normalize::{is_whitespace, normalize, normalize_bytes, trim_whitespace};
pub use options::Options;
pub use words::{Words, EMPTY_SENTINEL};

pub(crate) type Set<V> = rustc_hash::FxHashSet<V>;

use doc_comment::doctest;
doctest!("../README.md");
