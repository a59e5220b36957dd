use serde::{Deserialize, Serialize};

use crate::{Count, adjective_form, noun_form};

/// The three forms of a noun used with numerals.
///
/// ```
/// # use declension::NounForms;
/// let letters = NounForms::new("письмо", "письма", Some("писем"));
/// assert_eq!(letters.decline(42), "письма");
/// assert_eq!(letters.with_count(15), "15 писем");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NounForms {
    pub(crate) one: String,
    pub(crate) few: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) many: Option<String>,
}

impl NounForms {
    /// Create a set of noun forms.
    ///
    /// Without a `many` form, `few` is used in its place.
    pub fn new(
        one: impl Into<String>,
        few: impl Into<String>,
        many: Option<&str>,
    ) -> Self {
        NounForms {
            one: one.into(),
            few: few.into(),
            many: many.map(String::from),
        }
    }

    /// The form used with 1, 21, 31…
    #[inline]
    #[must_use]
    pub fn one(&self) -> &str {
        &self.one
    }

    /// The form used with 2–4, 22–24…
    #[inline]
    #[must_use]
    pub fn few(&self) -> &str {
        &self.few
    }

    /// The form used with 0, 5–20, 25–30…, if there is a separate one.
    #[inline]
    #[must_use]
    pub fn many(&self) -> Option<&str> {
        self.many.as_deref()
    }

    /// Pick the form agreeing with `count`.
    #[must_use]
    pub fn decline(&self, count: impl Into<Count>) -> &str {
        noun_form(count.into(), &self.one, &self.few, self.many())
    }

    /// Render `count` followed by the agreeing form, e.g. `"5 писем"`.
    #[must_use]
    pub fn with_count(&self, count: i64) -> String {
        format!("{count} {}", self.decline(count))
    }
}

/// The two forms of an adjective used with numerals.
///
/// ```
/// # use declension::AdjectiveForms;
/// let fresh = AdjectiveForms::new("свежее", "свежих");
/// assert_eq!(fresh.decline(1_u64), "свежее");
/// assert_eq!(fresh.decline(-11), "свежих");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjectiveForms {
    pub(crate) one: String,
    pub(crate) other: String,
}

impl AdjectiveForms {
    /// Create a set of adjective forms.
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        AdjectiveForms {
            one: one.into(),
            other: other.into(),
        }
    }

    /// The form used with counts ending in 1 (but not 11).
    #[inline]
    #[must_use]
    pub fn one(&self) -> &str {
        &self.one
    }

    /// The form used with every other count.
    #[inline]
    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }

    /// Pick the form agreeing with `count`.
    #[must_use]
    pub fn decline(&self, count: impl Into<Count>) -> &str {
        adjective_form(count.into(), &self.one, &self.other)
    }

    /// Render `count` followed by the agreeing form, e.g. `"21 свежее"`.
    #[must_use]
    pub fn with_count(&self, count: i64) -> String {
        format!("{count} {}", self.decline(count))
    }
}
