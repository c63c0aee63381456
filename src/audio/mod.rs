//! Wave audio processing for the silence trimmer

pub mod silence;
pub mod wave_codec;

pub use silence::{excise_middle, trim_end, trim_start, SilenceClassifier, SilenceTrimmer};
pub use wave_codec::{is_wave, read_clip, write_clip};
