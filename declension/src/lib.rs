#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub use count::Count;
pub use forms::{AdjectiveForms, NounForms};
pub use lexicon::Lexicon;

use crate::errors::DeclensionError;

mod count;
pub mod errors;
mod forms;
mod lexicon;

/// Pick the noun form that agrees with `count`.
///
/// - `form1` agrees with 1, 21, 31… (*одно письмо*)
/// - `form2` agrees with 2–4, 22–24… (*два письма*)
/// - `form5` agrees with 0, 5–20, 25–30… (*пять писем*)
///
/// Leaving out `form5` (or passing an empty string) uses `form2` in its
/// place, which suits languages with only two forms. Returns [`None`] if
/// there's no count to agree with.
///
/// ```
/// # use declension::noun;
/// let forms = ("письмо", "письма", Some("писем"));
/// let decline = |n| noun(Some(n), forms.0, forms.1, forms.2);
/// assert_eq!(decline(1), Some("письмо"));
/// assert_eq!(decline(3), Some("письма"));
/// assert_eq!(decline(11), Some("писем"));
/// assert_eq!(decline(22), Some("письма"));
/// assert_eq!(noun(None, "письмо", "письма", Some("писем")), None);
/// ```
#[must_use]
pub fn noun<'a>(
    count: Option<i64>,
    form1: &'a str,
    form2: &'a str,
    form5: Option<&'a str>,
) -> Option<&'a str> {
    count.map(|n| noun_form(Count::new(n), form1, form2, form5))
}

/// Pick the adjective form that agrees with `count`.
///
/// `form1` agrees with counts ending in 1, except those ending in 11
/// (*21 свежее*), `form2` with everything else (*11 свежих*). Returns
/// [`None`] if there's no count to agree with.
///
/// ```
/// # use declension::adjective;
/// assert_eq!(adjective(Some(21), "свежее", "свежих"), Some("свежее"));
/// assert_eq!(adjective(Some(111), "свежее", "свежих"), Some("свежих"));
/// ```
#[must_use]
pub fn adjective<'a>(
    count: Option<i64>,
    form1: &'a str,
    form2: &'a str,
) -> Option<&'a str> {
    count.map(|n| adjective_form(Count::new(n), form1, form2))
}

/// [`noun`], for counts that arrive as text.
///
/// The count is checked before anything else, so the three outcomes are
/// distinct: `Ok(Some(form))`, `Ok(None)` when there's no count, and
/// [`DeclensionError::InvalidCount`] when the text isn't an integer.
///
/// ```
/// # use declension::{errors::DeclensionError, try_noun};
/// assert_eq!(try_noun(Some("-5"), "арбуз", "арбуза", Some("арбузов")), Ok(Some("арбузов")));
/// assert_eq!(try_noun(None, "арбуз", "арбуза", Some("арбузов")), Ok(None));
/// assert!(matches!(
///     try_noun(Some("five"), "арбуз", "арбуза", Some("арбузов")),
///     Err(DeclensionError::InvalidCount(_)),
/// ));
/// ```
pub fn try_noun<'a>(
    count: Option<&str>,
    form1: &'a str,
    form2: &'a str,
    form5: Option<&'a str>,
) -> Result<Option<&'a str>, DeclensionError> {
    let count = Count::parse_optional(count)?;
    Ok(count.map(|count| noun_form(count, form1, form2, form5)))
}

/// [`adjective`], for counts that arrive as text.
///
/// Outcomes are the same as for [`try_noun`].
pub fn try_adjective<'a>(
    count: Option<&str>,
    form1: &'a str,
    form2: &'a str,
) -> Result<Option<&'a str>, DeclensionError> {
    let count = Count::parse_optional(count)?;
    Ok(count.map(|count| adjective_form(count, form1, form2)))
}

pub(crate) fn noun_form<'a>(
    count: Count,
    one: &'a str,
    few: &'a str,
    many: Option<&'a str>,
) -> &'a str {
    // Only "" stands in for a missing form, "0" is kept as written
    let many = many.filter(|form| !form.is_empty()).unwrap_or(few);
    // The teens band is checked before the last digit, so 21-24 fall back
    // into the one/few bands and 25-30 into many
    match (count.residue(), count.last_digit()) {
        (5..=20, _) => many,
        (_, 2..=4) => few,
        (_, 1) => one,
        _ => many,
    }
}

pub(crate) const fn adjective_form<'a>(
    count: Count,
    one: &'a str,
    other: &'a str,
) -> &'a str {
    match (count.residue(), count.last_digit()) {
        (11, _) => other,
        (_, 1) => one,
        _ => other,
    }
}
