//! Frame recording and the frame stream handed to callers
//!
//! [`FrameRecorder`] is the only place step numbers are assigned. Framed
//! operations take `&mut FrameRecorder`, so several operations composed into
//! one run (a tree built from a value list, for instance) still produce one
//! gapless, increasing step sequence.

use super::{Frame, Highlights, Metrics, Vars, View};
use std::iter::FusedIterator;

/// Collects frames for one run, numbering them and tracking counters
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
    metrics: Metrics,
}

impl FrameRecorder {
    pub fn new() -> Self {
        FrameRecorder::default()
    }

    /// Create a recorder whose frames always report `keys`, starting at 0
    pub fn with_metrics(keys: &[&'static str]) -> Self {
        let mut recorder = FrameRecorder::new();
        recorder.track(keys);
        recorder
    }

    /// Start reporting `keys` (existing totals are kept)
    pub fn track(&mut self, keys: &[&'static str]) {
        for key in keys {
            self.metrics.entry(key).or_insert(0);
        }
    }

    /// Increment a counter, returning the new total
    pub fn bump(&mut self, key: &'static str) -> u64 {
        self.add(key, 1)
    }

    pub fn add(&mut self, key: &'static str, amount: u64) -> u64 {
        let total = self.metrics.entry(key).or_insert(0);
        *total += amount;
        *total
    }

    pub fn metric(&self, key: &str) -> u64 {
        self.metrics.get(key).copied().unwrap_or(0)
    }

    /// Step number the next recorded frame will get
    pub fn next_step(&self) -> usize {
        self.frames.len()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Emit a frame carrying the current counter totals
    pub fn record(
        &mut self,
        view: View,
        narration: impl Into<String>,
        highlights: Highlights,
        data: Vars,
    ) {
        let frame = Frame::new(self.next_step(), view)
            .with_narration(narration)
            .with_data(data)
            .with_metrics(self.metrics.clone())
            .with_highlights(highlights);
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    pub fn finish(self) -> FrameStream {
        FrameStream {
            inner: self.frames.into_iter(),
        }
    }
}

/// Finite, forward-only sequence of frames from one run.
///
/// Iterating consumes the stream; to see the frames again, run the operation
/// again (or collect into a `Vec` first).
#[derive(Debug)]
pub struct FrameStream {
    inner: std::vec::IntoIter<Frame>,
}

impl FrameStream {
    pub fn empty() -> Self {
        FrameRecorder::new().finish()
    }
}

impl Iterator for FrameStream {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FrameStream {}

impl FusedIterator for FrameStream {}
