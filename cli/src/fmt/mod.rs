use std::fmt;

use declension::{AdjectiveForms, Lexicon, NounForms};

/// Counts shown for each word by `list`, one per form.
const SAMPLE_COUNTS: [i64; 3] = [1, 2, 5];

#[derive(Debug, Copy, Clone)]
pub enum OutputFormat {
    /// Only the chosen form
    Form,
    /// The count as given, then the chosen form
    WithCount,
}

impl OutputFormat {
    pub const fn new(with_count: bool) -> Self {
        if with_count {
            OutputFormat::WithCount
        } else {
            OutputFormat::Form
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct DeclinedFormatter<'a> {
    count: &'a str,
    form: &'a str,
    format: OutputFormat,
}

impl<'a> DeclinedFormatter<'a> {
    pub const fn new(
        count: &'a str,
        form: &'a str,
        format: OutputFormat,
    ) -> Self {
        DeclinedFormatter {
            count,
            form,
            format,
        }
    }
}

impl fmt::Display for DeclinedFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DeclinedFormatter {
            count,
            form,
            format,
        } = *self;
        match format {
            OutputFormat::Form => write!(f, "{form}"),
            OutputFormat::WithCount => write!(f, "{count} {form}"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct LexiconFormatter<'a> {
    lexicon: &'a Lexicon,
}

impl fmt::Display for LexiconFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexicon = self.lexicon;
        writeln!(f, "{}:", lexicon.name())?;
        writeln!(f, "  nouns:")?;
        lexicon.nouns().try_for_each(|(word, forms)| {
            writeln!(f, "    {word}: {}", noun_samples(forms))
        })?;
        // The formatter shouldn't leave a trailing newline
        write!(f, "  adjectives:")?;
        lexicon.adjectives().try_for_each(|(word, forms)| {
            write!(f, "\n    {word}: {}", adjective_samples(forms))
        })
    }
}

fn noun_samples(forms: &NounForms) -> String {
    SAMPLE_COUNTS
        .iter()
        .map(|&count| forms.with_count(count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn adjective_samples(forms: &AdjectiveForms) -> String {
    SAMPLE_COUNTS
        .iter()
        .map(|&count| forms.with_count(count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub trait FormatLexicon {
    fn format(&self) -> LexiconFormatter<'_>;
}

impl FormatLexicon for Lexicon {
    fn format(&self) -> LexiconFormatter<'_> {
        LexiconFormatter { lexicon: self }
    }
}
