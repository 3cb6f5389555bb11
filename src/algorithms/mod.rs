//! Array algorithm runners
//!
//! - [`sorting`]: comparison and distribution sorts
//! - [`searching`]: linear, binary and rotated binary search
//!
//! # Execution Model
//!
//! Each runner copies its input into a private working array and records a
//! frame at every comparison, swap, shift or write. The caller's slice is never
//! touched. Every run opens with a start frame and closes with exactly one
//! terminal frame.

pub mod searching;
pub mod sorting;

use crate::frame::{FrameRecorder, FrameStream, Highlights, Vars, View};

/// Working copy of an array plus the recorder for its run
pub(crate) struct ArrayRun {
    pub a: Vec<i64>,
    pub rec: FrameRecorder,
}

impl ArrayRun {
    pub fn new(values: &[i64], metrics: &[&'static str]) -> Self {
        ArrayRun {
            a: values.to_vec(),
            rec: FrameRecorder::with_metrics(metrics),
        }
    }

    /// Record the current state of the working array
    pub fn emit(&mut self, narration: impl Into<String>, highlights: Highlights, data: Vars) {
        self.rec
            .record(View::Array(self.a.clone()), narration, highlights, data);
    }

    pub fn finish(self) -> FrameStream {
        self.rec.finish()
    }
}
