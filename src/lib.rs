//! Multi-voice front end for the MML percussion converter
//!
//! Handles everything around the per-voice pipeline in [`mml_core`]: the
//! volume/tempo pre-pass, splitting the source into at most three voices and
//! converting each with its own state.
//!
//! ```
//! use mml_percussion::{convert_source, ConvertOptions};
//!
//! let options = ConvertOptions { strip_tempo: true, ..Default::default() };
//! let result = convert_source("t120 o2 c d,o3 c,e,g", &options);
//! assert_eq!(result.voices, ["l4n53n57", "l4n65", "l4n52"]);
//! ```

pub mod error;
pub mod logging;
pub mod options;
pub mod voices;

pub use error::{Error, Result};
pub use options::ConvertOptions;
pub use voices::{convert_one, convert_source, split_voices, ConvertedVoices, VOICE_LIMIT};
