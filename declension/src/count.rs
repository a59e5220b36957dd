use std::{fmt, str::FromStr};

use crate::errors::InvalidCountError;

/// The part of a numeral that decides agreement.
///
/// Russian numeral agreement only ever looks at the last two digits of the
/// absolute value, so that's all a [`Count`] keeps. Every primitive integer
/// converts into one without overflow (including `i64::MIN`), and integer
/// literals of any length can be parsed:
///
/// ```
/// # use declension::Count;
/// assert_eq!(Count::from(-21_i32), Count::new(21));
/// assert_eq!(Count::from(i64::MIN).residue(), 8);
/// let huge: Count = "100000000000000000000000000000000000000000011"
///     .parse()
///     .unwrap();
/// assert_eq!(huge.residue(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u8);

impl Count {
    /// Reduce a signed count to `abs(n) % 100`.
    #[inline]
    #[must_use]
    pub const fn new(n: i64) -> Self {
        Count((n.unsigned_abs() % 100) as u8)
    }

    /// `abs(n) % 100` of the original count, always in `0..100`.
    #[inline]
    #[must_use]
    pub const fn residue(self) -> u8 {
        self.0
    }

    /// The last digit of the original count.
    #[inline]
    #[must_use]
    pub const fn last_digit(self) -> u8 {
        self.0 % 10
    }

    /// Parse an optional count literal, for callers holding text.
    pub(crate) fn parse_optional(
        literal: Option<&str>,
    ) -> Result<Option<Self>, InvalidCountError> {
        literal
            .map(|literal| {
                literal.parse::<Count>().inspect_err(|err| {
                    log::debug!("rejecting count: {err}");
                })
            })
            .transpose()
    }
}

macro_rules! count_from_signed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Count {
                #[inline]
                fn from(n: $ty) -> Self {
                    Count((n.unsigned_abs() % 100) as u8)
                }
            }
        )+
    };
}

macro_rules! count_from_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Count {
                #[inline]
                fn from(n: $ty) -> Self {
                    Count((n % 100) as u8)
                }
            }
        )+
    };
}

count_from_signed!(i8, i16, i32, i64, i128, isize);
count_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for Count {
    type Err = InvalidCountError;

    /// Accepts an optional `+`/`-` followed by one or more ASCII digits.
    /// Whitespace, separators and empty digit runs are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCountError::new(s));
        }
        // Only the last two digits matter, so this never overflows
        let residue = digits
            .bytes()
            .fold(0_u8, |acc, digit| (acc % 10) * 10 + (digit - b'0'));
        Ok(Count(residue))
    }
}

/// Displays the residue, not the original count.
impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
