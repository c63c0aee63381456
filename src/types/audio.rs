//! Decoded audio abstraction

use std::ops::Range;

/// Layout of the samples in a clip, carried unchanged from input to output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

/// Interleaved integer PCM samples, one per channel per frame
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub format: AudioFormat,
    samples: Vec<i32>,
}

impl AudioClip {
    pub fn new(format: AudioFormat, samples: Vec<i32>) -> Self {
        Self { format, samples }
    }

    /// Mono clip with the given bit depth, mostly for tests
    pub fn mono(bits_per_sample: u16, samples: Vec<i32>) -> Self {
        Self::new(
            AudioFormat {
                channels: 1,
                sample_rate: 44_100,
                bits_per_sample,
            },
            samples,
        )
    }

    pub fn channels(&self) -> usize {
        self.format.channels.max(1) as usize
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    pub fn frame(&self, index: usize) -> &[i32] {
        let channels = self.channels();
        &self.samples[index * channels..(index + 1) * channels]
    }

    pub fn frames(&self) -> std::slice::ChunksExact<'_, i32> {
        self.samples.chunks_exact(self.channels())
    }

    /// Magnitude of the most negative representable sample
    pub fn full_scale(&self) -> f64 {
        (1u64 << (self.format.bits_per_sample.clamp(1, 32) - 1)) as f64
    }

    /// Sample value mapped into [-1.0, 1.0)
    pub fn normalize(&self, sample: i32) -> f64 {
        sample as f64 / self.full_scale()
    }

    /// Drops a range of frames
    pub fn remove_frames(&mut self, frames: Range<usize>) {
        let channels = self.channels();
        self.samples.drain(frames.start * channels..frames.end * channels);
    }

    /// Keeps only the frames whose flag is set; `keep` has one flag per frame
    pub fn retain_frames(&mut self, keep: &[bool]) {
        let channels = self.channels();
        let mut kept = Vec::with_capacity(self.samples.len());
        for (frame, _) in self.samples.chunks_exact(channels).zip(keep).filter(|(_, k)| **k) {
            kept.extend_from_slice(frame);
        }
        self.samples = kept;
    }
}
