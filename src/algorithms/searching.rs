//! Searching runners
//!
//! All three runners track the live search window as a `range` highlight
//! (`[0, -1]` for an empty array), mark the probed index as `compare` or
//! `pivot`, and finish either with a `found` frame or a "not found" frame
//! that carries no `found` mark.

use super::ArrayRun;
use crate::errors::VizError;
use crate::frame::{FrameStream, Highlights, Mark, Role};
use crate::vars;
use std::fmt;
use std::str::FromStr;

/// Searching algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    RotatedBinary,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::RotatedBinary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::RotatedBinary => "Rotated Binary Search",
        }
    }

    pub fn run(self, values: &[i64], target: i64) -> FrameStream {
        match self {
            SearchAlgorithm::Linear => linear_search(values, target),
            SearchAlgorithm::Binary => binary_search(values, target),
            SearchAlgorithm::RotatedBinary => rotated_binary_search(values, target),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(SearchAlgorithm::Linear),
            "binary" => Ok(SearchAlgorithm::Binary),
            "rotated" | "rotated-binary" => Ok(SearchAlgorithm::RotatedBinary),
            _ => Err(VizError::UnsupportedSelector {
                kind: "searching algorithm",
                name: s.to_string(),
                expected: "linear, binary, rotated",
            }),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn full_range(n: usize) -> Mark {
    Mark::Span(0, n as isize - 1)
}

fn not_found(mut run: ArrayRun, target: i64) -> FrameStream {
    let n = run.a.len();
    run.emit(
        "Target not found.",
        Highlights::new().with(Role::Range, full_range(n)),
        vars! { "target" => target },
    );
    run.finish()
}

/// Scan left to right until the target turns up
pub fn linear_search(values: &[i64], target: i64) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons"]);
    let n = run.a.len();

    run.emit(
        "Start Linear Search from the beginning.",
        Highlights::new().with(Role::Range, full_range(n)),
        vars! { "target" => target },
    );

    for i in 0..n {
        let value = run.a[i];
        run.rec.bump("comparisons");
        run.emit(
            format!("Compare index {} with target.", i),
            Highlights::new()
                .with(Role::Compare, Mark::at(i))
                .with(Role::Range, full_range(n)),
            vars! { "i" => i, "value" => value, "target" => target },
        );
        if value == target {
            run.emit(
                "Found target at this index.",
                Highlights::new()
                    .with(Role::Found, Mark::at(i))
                    .with(Role::Range, full_range(n)),
                vars! { "i" => i, "value" => value, "target" => target },
            );
            return run.finish();
        }
    }

    not_found(run, target)
}

/// Classic binary search over a sorted array.
///
/// Unsorted input is not rejected; the trace is simply meaningless. A warning
/// is logged so the caller can surface it.
pub fn binary_search(values: &[i64], target: i64) -> FrameStream {
    if !values.windows(2).all(|w| w[0] <= w[1]) {
        tracing::warn!(len = values.len(), "binary search input is not sorted");
    }

    let mut run = ArrayRun::new(values, &["comparisons"]);
    let (mut low, mut high) = (0isize, run.a.len() as isize - 1);

    run.emit(
        "Start Binary Search on the sorted array.",
        Highlights::new().with(Role::Range, Mark::Span(low, high)),
        vars! { "l" => low, "r" => high, "target" => target },
    );

    while low <= high {
        let mid = low + (high - low) / 2;
        let value = run.a[mid as usize];
        run.rec.bump("comparisons");
        run.emit(
            format!("Check middle index {}.", mid),
            Highlights::new()
                .with(Role::Pivot, Mark::at(mid as usize))
                .with(Role::Range, Mark::Span(low, high)),
            vars! { "l" => low, "r" => high, "mid" => mid, "target" => target },
        );

        if value == target {
            run.emit(
                "Found target at mid.",
                Highlights::new()
                    .with(Role::Found, Mark::at(mid as usize))
                    .with(Role::Range, Mark::Span(low, high)),
                vars! { "l" => low, "r" => high, "mid" => mid, "target" => target },
            );
            return run.finish();
        }

        let narration = if value < target {
            low = mid + 1;
            "Target is bigger: discard left half including mid."
        } else {
            high = mid - 1;
            "Target is smaller: discard right half including mid."
        };
        run.emit(
            narration,
            Highlights::new().with(Role::Range, Mark::Span(low, high)),
            vars! { "l" => low, "r" => high, "prev_mid" => mid, "target" => target },
        );
    }

    not_found(run, target)
}

/// Binary search over a sorted array rotated once, without duplicates
pub fn rotated_binary_search(values: &[i64], target: i64) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons"]);
    let (mut low, mut high) = (0isize, run.a.len() as isize - 1);

    run.emit(
        "Start search on rotated sorted array.",
        Highlights::new().with(Role::Range, Mark::Span(low, high)),
        vars! { "l" => low, "r" => high, "target" => target },
    );

    while low <= high {
        let mid = low + (high - low) / 2;
        let (lo_val, mid_val, hi_val) = (
            run.a[low as usize],
            run.a[mid as usize],
            run.a[high as usize],
        );
        run.rec.bump("comparisons");
        run.emit(
            format!("Check middle index {}.", mid),
            Highlights::new()
                .with(Role::Pivot, Mark::at(mid as usize))
                .with(Role::Range, Mark::Span(low, high)),
            vars! { "l" => low, "r" => high, "mid" => mid, "target" => target },
        );

        if mid_val == target {
            run.emit(
                "Found target at mid.",
                Highlights::new()
                    .with(Role::Found, Mark::at(mid as usize))
                    .with(Role::Range, Mark::Span(low, high)),
                vars! { "l" => low, "r" => high, "mid" => mid, "target" => target },
            );
            return run.finish();
        }

        let narration = if lo_val <= mid_val {
            run.emit(
                "Left half is sorted.",
                Highlights::new()
                    .with(Role::Pivot, Mark::at(mid as usize))
                    .with(Role::Range, Mark::Span(low, mid)),
                vars! { "l" => low, "mid" => mid, "r" => high, "target" => target, "sorted_half" => "left" },
            );
            if lo_val <= target && target < mid_val {
                high = mid - 1;
                "Target in left half: move r left."
            } else {
                low = mid + 1;
                "Target not in left half: move l right."
            }
        } else {
            run.emit(
                "Right half is sorted.",
                Highlights::new()
                    .with(Role::Pivot, Mark::at(mid as usize))
                    .with(Role::Range, Mark::Span(mid, high)),
                vars! { "l" => low, "mid" => mid, "r" => high, "target" => target, "sorted_half" => "right" },
            );
            if mid_val < target && target <= hi_val {
                low = mid + 1;
                "Target in right half: move l right."
            } else {
                high = mid - 1;
                "Target not in right half: move r left."
            }
        };

        run.emit(
            narration,
            Highlights::new().with(Role::Range, Mark::Span(low, high)),
            vars! { "l" => low, "r" => high, "target" => target },
        );
    }

    not_found(run, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    #[test]
    fn test_linear_search_finds_first_occurrence() {
        let frames: Vec<Frame> = linear_search(&[4, 2, 7, 2], 2).collect();
        let last = frames.last().unwrap();
        assert_eq!(last.highlights().positions(Role::Found), &[1]);
        assert_eq!(last.metric("comparisons"), 2);
    }

    #[test]
    fn test_empty_array_range() {
        let frames: Vec<Frame> = binary_search(&[], 3).collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].highlights().range(), Some((0, -1)));
        assert_eq!(frames[1].narration(), "Target not found.");
    }

    #[test]
    fn test_binary_search_window_shrinks() {
        let frames: Vec<Frame> = binary_search(&[1, 3, 4, 7, 9, 12, 15], 12).collect();
        let widths: Vec<isize> = frames
            .iter()
            .filter_map(|f| f.highlights().range())
            .map(|(lo, hi)| hi - lo)
            .collect();
        assert!(widths.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(
            frames.last().unwrap().highlights().positions(Role::Found),
            &[5]
        );
    }

    #[test]
    fn test_rotated_search_not_found() {
        let frames: Vec<Frame> = rotated_binary_search(&[9, 12, 15, 1, 3, 4, 7], 5).collect();
        let last = frames.last().unwrap();
        assert!(!last.highlights().contains(Role::Found));
        assert_eq!(last.narration(), "Target not found.");
    }
}
