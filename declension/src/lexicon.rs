use std::{
    collections::{BTreeMap, btree_map},
    fs, io,
    path::Path,
};

use serde::Deserialize;

use crate::{AdjectiveForms, Count, NounForms, errors::LexiconError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    nouns: BTreeMap<String, NounForms>,
    #[serde(default)]
    adjectives: BTreeMap<String, AdjectiveForms>,
}

impl LexiconFile {
    #[allow(clippy::result_large_err)]
    fn parse(path: &Path, content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(content).map_err(|toml_err| {
            LexiconError::Parse(path.to_owned(), toml_err)
        })?;
        file.validate(path)?;
        Ok(file)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self, path: &Path) -> Result<(), LexiconError> {
        let empty_form = |word: &str, form| LexiconError::EmptyForm {
            path: path.to_owned(),
            word: word.to_owned(),
            form,
        };
        for (word, forms) in &self.nouns {
            if forms.one.is_empty() {
                return Err(empty_form(word, "one"));
            }
            if forms.few.is_empty() {
                return Err(empty_form(word, "few"));
            }
        }
        for (word, forms) in &self.adjectives {
            if forms.one.is_empty() {
                return Err(empty_form(word, "one"));
            }
            if forms.other.is_empty() {
                return Err(empty_form(word, "other"));
            }
        }
        Ok(())
    }
}

/// A named collection of words with the forms they take after numerals.
///
/// Lexicons are usually loaded from a TOML file with `nouns` and
/// `adjectives` tables, keyed by whatever name the caller wants to look
/// words up by:
/// ```toml
#[doc = include_str!("../data/ru.toml")]
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    name: String,
    nouns: BTreeMap<String, NounForms>,
    adjectives: BTreeMap<String, AdjectiveForms>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new(name: impl Into<String>) -> Self {
        Lexicon {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Load a lexicon from a TOML file.
    ///
    /// The lexicon is named after the file stem.
    #[allow(clippy::result_large_err)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|io_err| {
            LexiconError::FailedToRead(path.to_owned(), io_err)
        })?;
        let name = path
            .file_stem()
            .ok_or_else(|| {
                LexiconError::FailedToRead(
                    path.to_owned(),
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        "file name is empty",
                    ),
                )
            })?
            .to_string_lossy()
            .into_owned();

        let file = LexiconFile::parse(path, &content)?;
        let lexicon = Lexicon::from_file(name, file);
        log::debug!(
            "loaded lexicon {} from {}: {} nouns, {} adjectives",
            lexicon.name,
            path.display(),
            lexicon.nouns.len(),
            lexicon.adjectives.len(),
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from TOML text.
    ///
    /// `name` stands in for the file path in any error.
    #[allow(clippy::result_large_err)]
    pub fn from_toml_str(
        name: impl Into<String>,
        content: &str,
    ) -> Result<Self, LexiconError> {
        let name = name.into();
        let file = LexiconFile::parse(Path::new(&name), content)?;
        Ok(Lexicon::from_file(name, file))
    }

    fn from_file(name: String, file: LexiconFile) -> Self {
        Lexicon {
            name,
            nouns: file.nouns,
            adjectives: file.adjectives,
        }
    }

    /// Add or replace a noun.
    pub fn insert_noun(&mut self, word: impl Into<String>, forms: NounForms) {
        self.nouns.insert(word.into(), forms);
    }

    /// Add or replace an adjective.
    pub fn insert_adjective(
        &mut self,
        word: impl Into<String>,
        forms: AdjectiveForms,
    ) {
        self.adjectives.insert(word.into(), forms);
    }

    /// Get the name of the lexicon.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a noun's forms.
    #[must_use]
    pub fn noun(&self, word: &str) -> Option<&NounForms> {
        self.nouns.get(word)
    }

    /// Look up an adjective's forms.
    #[must_use]
    pub fn adjective(&self, word: &str) -> Option<&AdjectiveForms> {
        self.adjectives.get(word)
    }

    /// Decline `word` for `count`, trying nouns before adjectives.
    ///
    /// Returns [`None`] if the lexicon doesn't know the word.
    ///
    /// ```
    /// # use declension::Lexicon;
    /// let ru = Lexicon::from_toml_str(
    ///     "ru",
    ///     include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/ru.toml")),
    /// )?;
    /// assert_eq!(ru.decline("watermelon", 5), Some("арбузов"));
    /// assert_eq!(ru.decline("fresh", 21), Some("свежее"));
    /// assert_eq!(ru.decline("unicorn", 1), None);
    /// # Ok::<_, declension::errors::LexiconError>(())
    /// ```
    #[must_use]
    pub fn decline(
        &self,
        word: &str,
        count: impl Into<Count>,
    ) -> Option<&str> {
        let count = count.into();
        self.noun(word)
            .map(|forms| forms.decline(count))
            .or_else(|| self.adjective(word).map(|forms| forms.decline(count)))
    }

    /// Iterate through the nouns in key order.
    pub fn nouns(&self) -> btree_map::Iter<'_, String, NounForms> {
        self.nouns.iter()
    }

    /// Iterate through the adjectives in key order.
    pub fn adjectives(&self) -> btree_map::Iter<'_, String, AdjectiveForms> {
        self.adjectives.iter()
    }

    /// Get how many words there are in the lexicon.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nouns.len() + self.adjectives.len()
    }

    /// Returns `true` if there are no words in the lexicon.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.adjectives.is_empty()
    }
}

