//! Conversion options and the pre-pass they control
//!
//! Both options delete commands from the raw source before it is split into
//! voices. The match is case-insensitive (`V12` and `T120` go too).
//!
//! Options can come from a JSON config file:
//! ```json
//! { "strip_volume": true, "strip_tempo": false }
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Remove every `v<digits>` volume command
    pub strip_volume: bool,
    /// Remove every `t<digits>` tempo command
    pub strip_tempo: bool,
}

fn volume_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)v[0-9]+").expect("volume pattern is valid"))
}

fn tempo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)t[0-9]+").expect("tempo pattern is valid"))
}

impl ConvertOptions {
    /// Load options from a JSON file. Missing fields default to `false`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Enable every option set in `other`
    pub fn merge(self, other: ConvertOptions) -> Self {
        ConvertOptions {
            strip_volume: self.strip_volume || other.strip_volume,
            strip_tempo: self.strip_tempo || other.strip_tempo,
        }
    }

    /// Apply the enabled deletions to a raw source string
    pub fn preprocess<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(raw);
        if self.strip_volume {
            text = Cow::Owned(volume_pattern().replace_all(&text, "").into_owned());
        }
        if self.strip_tempo {
            text = Cow::Owned(tempo_pattern().replace_all(&text, "").into_owned());
        }
        text
    }
}
