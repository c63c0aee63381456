//! Silence detection and removal
//! Author: kartik4091
//!
//! A frame is silent when every channel's normalized magnitude is within the
//! tolerance. Leading and trailing silence is trimmed whole; silence between
//! sounds is only cut when the run is long enough, so zero crossings and
//! short pauses inside a waveform survive.

use tracing::{debug, info, instrument};

use crate::config::SilenceOptions;
use crate::report::PassCount;
use crate::types::AudioClip;

pub const START: &str = "samples from start";
pub const END: &str = "samples from end";
pub const MIDDLE: &str = "samples between sounds";

/// Amplitude threshold predicate over frames
#[derive(Debug, Clone, Copy)]
pub struct SilenceClassifier {
    tolerance: f64,
}

impl SilenceClassifier {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn is_silent(&self, clip: &AudioClip, frame: &[i32]) -> bool {
        frame
            .iter()
            .all(|&sample| clip.normalize(sample).abs() <= self.tolerance)
    }

    /// One flag per frame, set for silent frames
    pub fn silence_map(&self, clip: &AudioClip) -> Vec<bool> {
        clip.frames().map(|frame| self.is_silent(clip, frame)).collect()
    }
}

/// Removes the silent prefix, returning the number of frames removed
pub fn trim_start(clip: &mut AudioClip, classifier: &SilenceClassifier) -> usize {
    let silent = classifier
        .silence_map(clip)
        .iter()
        .take_while(|silent| **silent)
        .count();
    clip.remove_frames(0..silent);
    silent
}

/// Removes the silent suffix, returning the number of frames removed
pub fn trim_end(clip: &mut AudioClip, classifier: &SilenceClassifier) -> usize {
    let frames = clip.frame_count();
    let silent = classifier
        .silence_map(clip)
        .iter()
        .rev()
        .take_while(|silent| **silent)
        .count();
    clip.remove_frames(frames - silent..frames);
    silent
}

/// Cuts every silent run that has sound on both sides and spans at least
/// `min_length` frames. Shorter runs are stepped over whole.
pub fn excise_middle(clip: &mut AudioClip, classifier: &SilenceClassifier, min_length: usize) -> usize {
    let silence = classifier.silence_map(clip);
    let Some(first_sound) = silence.iter().position(|silent| !silent) else {
        return 0;
    };
    let last_sound = silence.iter().rposition(|silent| !silent).unwrap_or(first_sound);

    let mut keep = vec![true; silence.len()];
    let mut removed = 0;
    let mut pos = first_sound;
    while pos < last_sound {
        if !silence[pos] {
            pos += 1;
            continue;
        }
        let run_end = pos + silence[pos..].iter().take_while(|silent| **silent).count();
        let run = run_end - pos;
        if run >= min_length {
            keep[pos..run_end].iter_mut().for_each(|k| *k = false);
            removed += run;
        } else {
            debug!("Keeping {} silent frames at {}", run, pos);
        }
        pos = run_end;
    }

    if removed > 0 {
        clip.retain_frames(&keep);
    }
    removed
}

/// Applies the passes selected by the trim mode, in start, end, middle order
#[derive(Debug, Clone)]
pub struct SilenceTrimmer {
    options: SilenceOptions,
    classifier: SilenceClassifier,
}

impl SilenceTrimmer {
    pub fn new(options: SilenceOptions) -> Self {
        let classifier = SilenceClassifier::new(options.tolerance);
        Self { options, classifier }
    }

    #[instrument(skip(self, clip), fields(frames = clip.frame_count()))]
    pub fn trim(&self, clip: &mut AudioClip) -> Vec<PassCount> {
        let starting_length = clip.frame_count();
        let mut passes = Vec::new();
        let mode = self.options.mode;

        if mode.trims_start() {
            let removed = trim_start(clip, &self.classifier);
            Self::record(&mut passes, START, removed, starting_length);
        }
        if mode.trims_end() {
            let removed = trim_end(clip, &self.classifier);
            Self::record(&mut passes, END, removed, starting_length);
        }
        if mode.excises_middle() {
            let removed = excise_middle(clip, &self.classifier, self.options.min_length);
            Self::record(&mut passes, MIDDLE, removed, starting_length);
        }

        let removed: usize = passes.iter().map(|p| p.count).sum();
        info!(
            "Removed {}/{} ({:.2}%) frames total",
            removed,
            starting_length,
            share(removed, starting_length)
        );
        passes
    }

    fn record(passes: &mut Vec<PassCount>, label: &str, removed: usize, of: usize) {
        if removed > 0 {
            info!(
                "Removed {}/{} ({:.2}%) {}",
                removed,
                of,
                share(removed, of),
                label
            );
        } else {
            debug!("No silence found for {}", label);
        }
        passes.push(PassCount::new(label, removed));
    }
}

/// Percentage of `of` that `removed` makes up, 0 for an empty clip
fn share(removed: usize, of: usize) -> f64 {
    removed as f64 * 100.0 / of.max(1) as f64
}
