//! The errors produced by `declension`.
//!
//! Declining itself never fails: these only come from the checked
//! string-count entry points and from loading a [`Lexicon`](crate::Lexicon).
use std::{io, path::PathBuf};

use thiserror::Error;

/// Declining a word failed because its inputs were malformed.
///
/// Returned by [`try_noun`](crate::try_noun) and
/// [`try_adjective`](crate::try_adjective). An absent count is *not* an
/// error, it's reported as `Ok(None)`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclensionError {
    /// The count wasn't an integer literal.
    #[error(transparent)]
    InvalidCount(#[from] InvalidCountError),
}

/// The count text wasn't an optionally signed run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid count: \"{literal}\"")]
pub struct InvalidCountError {
    literal: String,
}

impl InvalidCountError {
    pub(crate) fn new(literal: impl Into<String>) -> Self {
        InvalidCountError {
            literal: literal.into(),
        }
    }

    /// The text that was rejected.
    #[inline]
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

/// An error encountered while loading a [`Lexicon`](crate::Lexicon).
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Unable to read the lexicon file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
    /// Unable to parse the lexicon.
    #[error("failed to parse lexicon from {}: {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),
    /// A word has a required form left empty.
    #[error(
        "{word} has an empty \"{form}\" form in lexicon {}",
        .path.display()
    )]
    EmptyForm {
        /// The lexicon the word came from.
        path: PathBuf,
        /// The word's key in the lexicon.
        word: String,
        /// Which form was empty (`one`, `few` or `other`).
        form: &'static str,
    },
}
