//! Wave file decoding and encoding
//! Author: kartik4091

use std::{fs::File, io::Read, path::Path};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{AudioClip, AudioFormat};

impl From<AudioFormat> for WavSpec {
    fn from(format: AudioFormat) -> Self {
        WavSpec {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Reads every sample of an integer PCM wave file
pub fn read_clip(path: &Path) -> Result<AudioClip> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let mut reader = WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(io) => Error::IoError(io),
        other => Error::NotAContainer {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })?;

    let spec = reader.spec();
    debug!("WAV spec: {:?}", spec);
    if spec.sample_format != SampleFormat::Int {
        return Err(Error::UnsupportedFormat(format!(
            "'{}' holds floating point samples, only integer PCM is supported",
            path.display()
        )));
    }

    let samples = reader
        .samples::<i32>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let clip = AudioClip::new(
        AudioFormat {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        },
        samples,
    );
    info!("File is {} samples long", clip.frame_count());
    Ok(clip)
}

/// Writes a clip as a new wave file with the clip's own format
pub fn write_clip(path: &Path, clip: &AudioClip) -> Result<()> {
    let mut writer = WavWriter::create(path, WavSpec::from(clip.format))?;
    for &sample in clip.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// True for regular files starting with a RIFF/WAVE header
pub fn is_wave(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let mut header = [0u8; 12];
    match File::open(path).and_then(|mut f| f.read_exact(&mut header)) {
        Ok(()) => &header[0..4] == b"RIFF" && &header[8..12] == b"WAVE",
        Err(_) => false,
    }
}
