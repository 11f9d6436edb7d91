//! Final percussion remap
//!
//! Runs once over the fully assembled intermediate string. Every `n<digits>`
//! is mapped by the same rule whether it was written as an absolute note or
//! derived from a relative one, so no note is ever mapped twice.

use crate::length::saturating_digits;
use crate::percussion::percussion_for;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn absolute_note_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"n([0-9]+)").expect("absolute note pattern is valid"))
}

/// Replace every mapped `n<digits>` with its percussion identifier
pub fn remap_percussion(intermediate: &str) -> String {
    absolute_note_pattern()
        .replace_all(intermediate, |caps: &Captures| {
            let digits = &caps[1];
            match percussion_for(saturating_digits(digits)) {
                Some(mapped) => format!("n{}", mapped),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
