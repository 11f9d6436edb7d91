//! MML to percussion MML conversion
//!
//! This crate rewrites one melodic MML voice into a voice whose notes are
//! percussion identifiers of the target player.
//!
//! # Examples
//!
//! ```
//! use mml_core::{compact, convert_voice};
//!
//! let converted = convert_voice("o2 l8 a b4 &c");
//! assert_eq!(converted, "l8 l8 n64 l4 n64 & l8 r");
//! assert_eq!(compact(&converted), "l8n64l4n64&l8r");
//! ```
//!
//! # Pipeline
//!
//! 1. [`lexer`]: classify the voice string into tokens, dropping anything
//!    outside the grammar.
//! 2. [`convert`]: walk the tokens with a fresh octave/length state, turning
//!    every note and rest into a length-prefixed fragment. Notes after a tie
//!    become rests.
//! 3. [`remap`]: map every `n<digits>` through the percussion table in one
//!    textual pass.
//! 4. [`compact`]: drop repeated length macros and all whitespace.
//!
//! # Main Functions
//!
//! - [`convert_voice`]: steps 1 to 3
//! - [`compact()`]: step 4
//! - [`tokenize`]: classified lexemes of a voice

pub mod compact;
pub mod convert;
pub mod length;
pub mod lexer;
pub mod percussion;
pub mod pitch;
pub mod remap;
pub mod span;

#[cfg(test)]
mod pipeline_tests;

pub use compact::compact;
pub use convert::{convert_fragments, convert_voice, ConversionState, Fragment};
pub use length::{Duration, Length};
pub use lexer::{tokenize, Lexeme, Lexer, Token};
pub use percussion::percussion_for;
pub use pitch::{absolute, Accidental, PitchError};
pub use remap::remap_percussion;
pub use span::Span;
