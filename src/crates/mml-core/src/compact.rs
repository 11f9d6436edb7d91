//! Redundant length macro removal
//!
//! A length macro that repeats the last kept one changes nothing for the
//! player and is dropped. The result has no whitespace at all; the target
//! player's grammar is self-delimiting.

use crate::length::Length;
use regex::Regex;
use std::sync::OnceLock;

fn run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // leftmost-first: a macro wins over the generic run at the same position
    PATTERN.get_or_init(|| Regex::new(r"l[0-9]+\.?|\S+").expect("compaction pattern is valid"))
}

/// Drop repeated length macros and strip all whitespace
pub fn compact(mml: &str) -> String {
    let mut last: Option<Length> = None;
    let mut kept: Vec<&str> = Vec::new();

    for run in run_pattern().find_iter(mml) {
        let text = run.as_str();
        match Length::parse_macro(text) {
            Some(length) if last == Some(length) => {
                tracing::trace!("dropping repeated {} at {}", text, run.start());
            }
            Some(length) => {
                last = Some(length);
                kept.push(text);
            }
            None => kept.push(text),
        }
    }

    kept.join(" ").split_whitespace().collect()
}
