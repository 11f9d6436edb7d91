//! Note lengths
//!
//! A [`Length`] is a fully resolved length directive (`l8`, `l4.`), while a
//! [`Duration`] is the optional length suffix carried by a note or rest
//! (`c8`, `r.`, `n35`). A duration with no digits is *unset* and takes its
//! value from the current default length at the point of use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved length: the `8` and the dot in `l8.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Length {
    pub value: u32,
    pub dotted: bool,
}

impl Length {
    pub fn new(value: u32, dotted: bool) -> Self {
        Length { value, dotted }
    }

    /// Parse a complete length macro such as `l16` or `l4.`
    ///
    /// Returns `None` for anything that is not exactly `l`, digits and at
    /// most one trailing dot.
    pub fn parse_macro(text: &str) -> Option<Length> {
        let body = text.strip_prefix('l')?;
        let duration = Duration::parse(body)?;
        duration.value.map(|value| Length::new(value, duration.dotted))
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::new(4, false)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.value)?;
        if self.dotted {
            write!(f, ".")?;
        }
        Ok(())
    }
}

/// Length suffix of a note or rest token, possibly unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Duration {
    pub value: Option<u32>,
    pub dotted: bool,
}

impl Duration {
    /// Parse a suffix made of optional digits and an optional trailing dot
    pub fn parse(suffix: &str) -> Option<Duration> {
        let (digits, dotted) = match suffix.strip_suffix('.') {
            Some(digits) => (digits, true),
            None => (suffix, false),
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = if digits.is_empty() {
            None
        } else {
            Some(saturating_u32(digits))
        };
        Some(Duration { value, dotted })
    }

    /// Resolve against the current default length.
    ///
    /// An explicit value keeps the token's own dot. An unset value inherits the
    /// default value, and the default dot only when the token has none.
    pub fn resolve(&self, default: Length) -> Length {
        match self.value {
            Some(value) => Length::new(value, self.dotted),
            None => Length::new(default.value, self.dotted || default.dotted),
        }
    }
}

/// Decimal digits to `u64`, clamping at the maximum instead of overflowing
pub(crate) fn saturating_digits(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

pub(crate) fn saturating_u32(digits: &str) -> u32 {
    u32::try_from(saturating_digits(digits)).unwrap_or(u32::MAX)
}
