// Conversion pass: relative MML to absolute, length-prefixed fragments
use crate::length::Length;
use crate::lexer::{Lexeme, Lexer, Token};
use crate::pitch::absolute;
use crate::remap::remap_percussion;
use std::fmt;

/// Octave and default length while walking one voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionState {
    pub octave: i64,
    pub length: Length,
}

impl Default for ConversionState {
    fn default() -> Self {
        ConversionState {
            octave: 4,
            length: Length::default(),
        }
    }
}

/// One unit of converted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Copied from the input as written
    Verbatim(String),
    Tie,
    Rest(Length),
    /// Absolute note number, not yet remapped to percussion
    Note { length: Length, number: String },
}

impl Fragment {
    /// `l<len> n<digits>`, the only shape a tie silences
    fn is_numbered_note(&self) -> bool {
        match self {
            Fragment::Note { number, .. } => {
                !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Verbatim(text) => write!(f, "{}", text),
            Fragment::Tie => write!(f, "&"),
            Fragment::Rest(length) => write!(f, "{} r", length),
            Fragment::Note { length, number } => write!(f, "{} n{}", length, number),
        }
    }
}

impl ConversionState {
    /// Apply one lexeme, returning the fragment it emits (octave tokens emit nothing)
    pub fn step(&mut self, lexeme: &Lexeme<'_>) -> Option<Fragment> {
        match &lexeme.token {
            Token::OctaveSet(octave) => {
                self.octave = *octave;
                None
            }
            Token::OctaveUp => {
                self.octave = self.octave.saturating_add(1);
                None
            }
            Token::OctaveDown => {
                self.octave = self.octave.saturating_sub(1);
                None
            }
            Token::LengthMacro(length) => {
                self.length = *length;
                Some(Fragment::Verbatim(lexeme.raw.to_string()))
            }
            Token::Tie => Some(Fragment::Tie),
            Token::Rest(duration) => Some(Fragment::Rest(duration.resolve(self.length))),
            Token::Absolute(note) => Some(Fragment::Note {
                length: note.duration.resolve(self.length),
                number: note.digits.clone(),
            }),
            Token::Note(note) => match absolute(self.octave, note.letter, note.accidental) {
                Ok(value) => Some(Fragment::Note {
                    length: note.duration.resolve(self.length),
                    number: value.to_string(),
                }),
                Err(err) => {
                    tracing::debug!("keeping {:?} as written: {}", lexeme.raw, err);
                    Some(Fragment::Verbatim(lexeme.raw.to_string()))
                }
            },
            Token::Volume | Token::Tempo | Token::Number => {
                Some(Fragment::Verbatim(lexeme.raw.to_string()))
            }
            Token::Stray => None,
        }
    }
}

/// A note directly after a tie becomes a rest of the same length
pub fn resolve_ties(fragments: &mut [Fragment]) {
    for i in 0..fragments.len().saturating_sub(1) {
        if fragments[i] != Fragment::Tie || !fragments[i + 1].is_numbered_note() {
            continue;
        }
        if let Fragment::Note { length, .. } = fragments[i + 1] {
            fragments[i + 1] = Fragment::Rest(length);
        }
    }
}

/// Convert one voice into fragments, ties resolved, percussion not yet applied.
///
/// Each call starts from a fresh [`ConversionState`].
pub fn convert_fragments(raw: &str) -> Vec<Fragment> {
    let mut state = ConversionState::default();
    let mut fragments: Vec<Fragment> = Lexer::new(raw)
        .filter_map(|lexeme| state.step(&lexeme))
        .collect();
    resolve_ties(&mut fragments);

    tracing::trace!(
        "converted {} fragment(s), final octave {}, length {}",
        fragments.len(),
        state.octave,
        state.length
    );
    fragments
}

pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert one voice: fragments joined with spaces, then percussion remapped
pub fn convert_voice(raw: &str) -> String {
    remap_percussion(&join_fragments(&convert_fragments(raw)))
}
