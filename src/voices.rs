use crate::error::Result;
use crate::options::ConvertOptions;
use mml_core::{compact, convert_voice};
use serde::Serialize;
use std::fmt;

/// Number of voices the target player accepts
pub const VOICE_LIMIT: usize = 3;

/// Split a multi-voice source on `,`.
///
/// Only the first [`VOICE_LIMIT`] voices are kept; missing ones are empty.
pub fn split_voices(source: &str) -> [&str; VOICE_LIMIT] {
    let mut voices = [""; VOICE_LIMIT];
    for (slot, voice) in voices.iter_mut().zip(source.split(',')) {
        *slot = voice;
    }

    let extra = source.split(',').count().saturating_sub(VOICE_LIMIT);
    if extra > 0 {
        tracing::warn!("ignoring {} voice(s) beyond the first {}", extra, VOICE_LIMIT);
    }
    voices
}

/// Full pipeline for one voice, with its own fresh conversion state
pub fn convert_one(voice: &str) -> String {
    let converted = convert_voice(voice);
    tracing::debug!("intermediate: {}", converted);
    compact(&converted)
}

/// Results of a multi-voice conversion, one entry per voice slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedVoices {
    pub voices: [String; VOICE_LIMIT],
}

impl ConvertedVoices {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ConvertedVoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.voices.join("\n"))
    }
}

/// Pre-pass, split, then convert every voice independently
pub fn convert_source(source: &str, options: &ConvertOptions) -> ConvertedVoices {
    let source = options.preprocess(source);
    let voices = split_voices(&source);

    ConvertedVoices {
        voices: voices.map(|voice| {
            let result = convert_one(voice);
            tracing::debug!("voice {:?} -> {:?}", voice, result);
            result
        }),
    }
}
