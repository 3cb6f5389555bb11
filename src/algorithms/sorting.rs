//! Sorting runners
//!
//! Comparison sorts record one frame per comparison (`compare`) and one per
//! swap, shift or write (`swap`, plus `pivot` for quick sort). Distribution
//! sorts (counting, radix) record one frame per bucketing step and one per
//! write back into the array.
//!
//! # Metrics
//!
//! | runner              | counters                 |
//! |---------------------|--------------------------|
//! | insertion, bubble,  | `comparisons`, `swaps`   |
//! | selection, quick,   |                          |
//! | heap                |                          |
//! | merge               | `comparisons`, `writes`  |
//! | counting            | `updates`, `writes`      |
//! | radix               | `writes`                 |
//!
//! # Preconditions
//!
//! Counting and radix sort index buckets by value, so they reject negative
//! input (and counting sort rejects values above
//! [`MAX_COUNTING_VALUE`]) before recording anything.

use super::ArrayRun;
use crate::constants::{MAX_COUNTING_VALUE, RADIX_BASE};
use crate::errors::VizError;
use crate::frame::{FrameStream, Highlights, Mark, Role};
use crate::vars;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Sorting algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Insertion,
    Bubble,
    Selection,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Radix => "Radix Sort",
        }
    }

    /// Run the selected sort. `pivot` only matters for quick sort.
    pub fn run(self, values: &[i64], pivot: PivotPolicy) -> Result<FrameStream, VizError> {
        let frames = match self {
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Selection => selection_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Quick => quick_sort(values, pivot),
            SortAlgorithm::Heap => heap_sort(values),
            SortAlgorithm::Counting => counting_sort(values)?,
            SortAlgorithm::Radix => radix_sort(values)?,
        };
        Ok(frames)
    }
}

impl FromStr for SortAlgorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(SortAlgorithm::Insertion),
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            "heap" => Ok(SortAlgorithm::Heap),
            "counting" => Ok(SortAlgorithm::Counting),
            "radix" => Ok(SortAlgorithm::Radix),
            _ => Err(VizError::UnsupportedSelector {
                kind: "sorting algorithm",
                name: s.to_string(),
                expected: "insertion, bubble, selection, merge, quick, heap, counting, radix",
            }),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How quick sort picks the pivot of each partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    #[default]
    Last,
    First,
    MedianOfThree,
    /// Uniform random index; a seed makes the run reproducible
    Random { seed: Option<u64> },
}

impl PivotPolicy {
    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::Last => "last",
            PivotPolicy::First => "first",
            PivotPolicy::MedianOfThree => "median3",
            PivotPolicy::Random { .. } => "random",
        }
    }
}

impl FromStr for PivotPolicy {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(PivotPolicy::Last),
            "first" => Ok(PivotPolicy::First),
            "median3" | "median-of-three" => Ok(PivotPolicy::MedianOfThree),
            "random" => Ok(PivotPolicy::Random { seed: None }),
            _ => Err(VizError::UnsupportedSelector {
                kind: "pivot policy",
                name: s.to_string(),
                expected: "last, first, median3, random",
            }),
        }
    }
}

fn start(run: &mut ArrayRun, name: &str) {
    let n = run.a.len();
    run.emit(
        format!("Start {} on {} elements", name, n),
        Highlights::new(),
        vars! { "n" => n },
    );
}

fn finish(mut run: ArrayRun, name: &str) -> FrameStream {
    let n = run.a.len();
    run.emit(
        format!("{} complete: array is sorted", name),
        Highlights::new(),
        vars! { "n" => n },
    );
    run.finish()
}

/// Insertion sort: grow a sorted prefix, shifting larger elements right
pub fn insertion_sort(values: &[i64]) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "swaps"]);
    start(&mut run, "Insertion Sort");

    for i in 1..run.a.len() {
        let key = run.a[i];
        run.emit(
            format!("Consider element {} at index {}", key, i),
            Highlights::new().with(Role::Key, Mark::at(i)),
            vars! { "i" => i, "key" => key },
        );

        // `j` is the hole the key will eventually fill
        let mut j = i;
        while j > 0 {
            let left = run.a[j - 1];
            run.rec.bump("comparisons");
            run.emit(
                format!("Compare {} with key {}", left, key),
                Highlights::new().with(Role::Compare, Mark::pair(j - 1, j)),
                vars! { "i" => i, "j" => j - 1, "key" => key },
            );
            if left <= key {
                break;
            }
            run.a[j] = left;
            run.rec.bump("swaps");
            run.emit(
                format!("Shift {} to the right", left),
                Highlights::new().with(Role::Swap, Mark::pair(j - 1, j)),
                vars! { "i" => i, "j" => j - 1, "key" => key },
            );
            j -= 1;
        }

        run.a[j] = key;
        run.emit(
            format!("Insert {} at position {}", key, j),
            Highlights::new().with(Role::Inserted, Mark::at(j)),
            vars! { "i" => i, "position" => j, "key" => key },
        );
    }

    finish(run, "Insertion Sort")
}

/// Bubble sort: classical passes, no early exit
pub fn bubble_sort(values: &[i64]) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "swaps"]);
    start(&mut run, "Bubble Sort");

    let n = run.a.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            run.rec.bump("comparisons");
            run.emit(
                format!("Compare {} and {}", run.a[j], run.a[j + 1]),
                Highlights::new().with(Role::Compare, Mark::pair(j, j + 1)),
                vars! { "pass" => i, "j" => j },
            );
            if run.a[j] > run.a[j + 1] {
                run.a.swap(j, j + 1);
                run.rec.bump("swaps");
                run.emit(
                    format!("Swap {} and {}", run.a[j + 1], run.a[j]),
                    Highlights::new().with(Role::Swap, Mark::pair(j, j + 1)),
                    vars! { "pass" => i, "j" => j },
                );
            }
        }
    }

    finish(run, "Bubble Sort")
}

/// Selection sort: swap the minimum of the unsorted suffix into place
pub fn selection_sort(values: &[i64]) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "swaps"]);
    start(&mut run, "Selection Sort");

    let n = run.a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            run.rec.bump("comparisons");
            run.emit(
                format!("Compare {} and {}", run.a[min_idx], run.a[j]),
                Highlights::new().with(Role::Compare, Mark::pair(min_idx, j)),
                vars! { "i" => i, "j" => j, "min_idx" => min_idx },
            );
            if run.a[j] < run.a[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            run.a.swap(i, min_idx);
            run.rec.bump("swaps");
            run.emit(
                format!("Swap {} and {}", run.a[i], run.a[min_idx]),
                Highlights::new().with(Role::Swap, Mark::pair(i, min_idx)),
                vars! { "i" => i, "min_idx" => min_idx },
            );
        }
    }

    finish(run, "Selection Sort")
}

/// Top-down merge sort
pub fn merge_sort(values: &[i64]) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "writes"]);
    start(&mut run, "Merge Sort");

    if !run.a.is_empty() {
        let high = run.a.len() - 1;
        merge_sort_range(&mut run, 0, high);
    }

    finish(run, "Merge Sort")
}

fn merge_sort_range(run: &mut ArrayRun, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    merge_sort_range(run, low, mid);
    merge_sort_range(run, mid + 1, high);
    merge(run, low, mid, high);
}

fn merge(run: &mut ArrayRun, low: usize, mid: usize, high: usize) {
    let left = run.a[low..=mid].to_vec();
    let right = run.a[mid + 1..=high].to_vec();
    let (mut i, mut j, mut k) = (0, 0, low);

    while i < left.len() && j < right.len() {
        run.rec.bump("comparisons");
        run.emit(
            format!("Compare {} and {}", left[i], right[j]),
            Highlights::new()
                .with(Role::Compare, Mark::pair(low + i, mid + 1 + j))
                .with(Role::Range, Mark::Span(low as isize, high as isize)),
            vars! { "i" => i, "j" => j, "k" => k },
        );
        if left[i] <= right[j] {
            run.a[k] = left[i];
            i += 1;
        } else {
            run.a[k] = right[j];
            j += 1;
        }
        write_merged(run, k, "", low, high);
        k += 1;
    }
    while i < left.len() {
        run.a[k] = left[i];
        write_merged(run, k, " from left", low, high);
        i += 1;
        k += 1;
    }
    while j < right.len() {
        run.a[k] = right[j];
        write_merged(run, k, " from right", low, high);
        j += 1;
        k += 1;
    }
}

fn write_merged(run: &mut ArrayRun, k: usize, source: &str, low: usize, high: usize) {
    run.rec.bump("writes");
    run.emit(
        format!("Insert {}{} at index {}", run.a[k], source, k),
        Highlights::new()
            .with(Role::Swap, Mark::at(k))
            .with(Role::Range, Mark::Span(low as isize, high as isize)),
        vars! { "k" => k },
    );
}

/// Chooses pivot indices according to a [`PivotPolicy`]
struct PivotPicker {
    policy: PivotPolicy,
    rng: SmallRng,
}

impl PivotPicker {
    fn new(policy: PivotPolicy) -> Self {
        let rng = match policy {
            PivotPolicy::Random { seed: Some(seed) } => SmallRng::seed_from_u64(seed),
            PivotPolicy::Random { seed: None } => SmallRng::from_os_rng(),
            _ => SmallRng::seed_from_u64(0),
        };
        PivotPicker { policy, rng }
    }

    fn choose(&mut self, a: &[i64], low: usize, high: usize) -> usize {
        match self.policy {
            PivotPolicy::Last => high,
            PivotPolicy::First => low,
            PivotPolicy::MedianOfThree => {
                let mid = low + (high - low) / 2;
                let mut trio = [(a[low], low), (a[mid], mid), (a[high], high)];
                // stable: equal values keep low, mid, high order
                trio.sort_by_key(|(value, _)| *value);
                trio[1].1
            }
            PivotPolicy::Random { .. } => self.rng.random_range(low..=high),
        }
    }
}

/// Quick sort with Lomuto partitioning and a configurable pivot policy
pub fn quick_sort(values: &[i64], policy: PivotPolicy) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "swaps"]);
    let mut picker = PivotPicker::new(policy);
    start(&mut run, "Quick Sort");

    if !run.a.is_empty() {
        let high = run.a.len() - 1;
        quick_sort_range(&mut run, &mut picker, 0, high);
    }

    finish(run, "Quick Sort")
}

fn quick_sort_range(run: &mut ArrayRun, picker: &mut PivotPicker, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(run, picker, low, high);
    if p > low {
        quick_sort_range(run, picker, low, p - 1);
    }
    quick_sort_range(run, picker, p + 1, high);
}

fn partition(run: &mut ArrayRun, picker: &mut PivotPicker, low: usize, high: usize) -> usize {
    let range = Mark::Span(low as isize, high as isize);
    let pivot_idx = picker.choose(&run.a, low, high);
    let policy = picker.policy.name();

    if pivot_idx != high {
        run.a.swap(pivot_idx, high);
        run.rec.bump("swaps");
        run.emit(
            format!(
                "Choose pivot {} ({}) and move it to index {}",
                run.a[high], policy, high
            ),
            Highlights::new()
                .with(Role::Swap, Mark::pair(pivot_idx, high))
                .with(Role::Pivot, Mark::at(high))
                .with(Role::Range, range.clone()),
            vars! { "low" => low, "high" => high, "pivot_idx" => pivot_idx, "policy" => policy },
        );
    } else {
        run.emit(
            format!("Choose pivot {} ({}) at index {}", run.a[high], policy, high),
            Highlights::new()
                .with(Role::Pivot, Mark::at(high))
                .with(Role::Range, range.clone()),
            vars! { "low" => low, "high" => high, "pivot_idx" => pivot_idx, "policy" => policy },
        );
    }

    let pivot = run.a[high];
    // next slot for an element <= pivot
    let mut i = low;
    for j in low..high {
        run.rec.bump("comparisons");
        run.emit(
            format!("Compare {} with pivot {}", run.a[j], pivot),
            Highlights::new()
                .with(Role::Compare, Mark::at(j))
                .with(Role::Pivot, Mark::at(high))
                .with(Role::Range, range.clone()),
            vars! { "i" => i, "j" => j, "pivot" => pivot },
        );
        if run.a[j] <= pivot {
            if i != j {
                run.a.swap(i, j);
                run.rec.bump("swaps");
                run.emit(
                    format!("Swap {} and {}", run.a[i], run.a[j]),
                    Highlights::new()
                        .with(Role::Swap, Mark::pair(i, j))
                        .with(Role::Pivot, Mark::at(high))
                        .with(Role::Range, range.clone()),
                    vars! { "i" => i, "j" => j, "pivot" => pivot },
                );
            }
            i += 1;
        }
    }

    if i != high {
        run.a.swap(i, high);
        run.rec.bump("swaps");
    }
    run.emit(
        format!("Place pivot {} at position {}", pivot, i),
        Highlights::new()
            .with_opt(Role::Swap, (i != high).then(|| Mark::pair(i, high)))
            .with(Role::Pivot, Mark::at(i))
            .with(Role::Range, range),
        vars! { "pivot" => pivot, "position" => i },
    );
    i
}

/// Heap sort: build a max-heap, then repeatedly move the root to the end
pub fn heap_sort(values: &[i64]) -> FrameStream {
    let mut run = ArrayRun::new(values, &["comparisons", "swaps"]);
    start(&mut run, "Heap Sort");

    let n = run.a.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut run, n, i);
    }
    if n > 1 {
        run.emit(
            "Max-heap built",
            Highlights::new().with(Role::Pivot, Mark::at(0)),
            vars! { "heap_size" => n },
        );
    }

    for end in (1..n).rev() {
        run.a.swap(0, end);
        run.rec.bump("swaps");
        run.emit(
            format!("Swap root {} with {}", run.a[end], run.a[0]),
            Highlights::new().with(Role::Swap, Mark::pair(0, end)),
            vars! { "end" => end },
        );
        sift_down(&mut run, end, 0);
    }

    finish(run, "Heap Sort")
}

fn sift_down(run: &mut ArrayRun, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child >= size {
                continue;
            }
            run.rec.bump("comparisons");
            run.emit(
                format!("Compare {} with {}", run.a[child], run.a[largest]),
                Highlights::new().with(Role::Compare, Mark::pair(largest, child)),
                vars! { "i" => root, "largest" => largest, "child" => child, "heap_size" => size },
            );
            if run.a[child] > run.a[largest] {
                largest = child;
            }
        }
        if largest == root {
            return;
        }
        run.a.swap(root, largest);
        run.rec.bump("swaps");
        run.emit(
            format!("Swap {} and {}", run.a[root], run.a[largest]),
            Highlights::new().with(Role::Swap, Mark::pair(root, largest)),
            vars! { "i" => root, "largest" => largest, "heap_size" => size },
        );
        root = largest;
    }
}

fn require_non_negative(values: &[i64], algorithm: &'static str) -> Result<(), VizError> {
    match values.iter().find(|v| **v < 0) {
        Some(&value) => Err(VizError::NegativeValue { algorithm, value }),
        None => Ok(()),
    }
}

/// Counting sort over non-negative integers
pub fn counting_sort(values: &[i64]) -> Result<FrameStream, VizError> {
    require_non_negative(values, "Counting Sort")?;
    if let Some(&value) = values.iter().find(|v| **v > MAX_COUNTING_VALUE) {
        return Err(VizError::ValueTooLarge {
            algorithm: "Counting Sort",
            value,
            limit: MAX_COUNTING_VALUE,
        });
    }

    let mut run = ArrayRun::new(values, &["updates", "writes"]);
    start(&mut run, "Counting Sort");

    let max = run.a.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; max as usize + 1];
    for i in 0..run.a.len() {
        let value = run.a[i];
        counts[value as usize] += 1;
        run.rec.bump("updates");
        run.emit(
            format!("Count occurrence of {}", value),
            Highlights::new().with(Role::Current, Mark::at(i)),
            vars! { "num" => value, "count" => counts[value as usize] },
        );
    }

    let mut k = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            run.a[k] = value as i64;
            run.rec.bump("writes");
            run.emit(
                format!("Place {} into output", value),
                Highlights::new().with(Role::Swap, Mark::at(k)),
                vars! { "i" => value, "k" => k },
            );
            k += 1;
        }
    }

    Ok(finish(run, "Counting Sort"))
}

/// LSD radix sort (base 10) over non-negative integers
pub fn radix_sort(values: &[i64]) -> Result<FrameStream, VizError> {
    require_non_negative(values, "Radix Sort")?;

    let mut run = ArrayRun::new(values, &["writes"]);
    start(&mut run, "Radix Sort");

    let n = run.a.len();
    let max = run.a.iter().copied().max().unwrap_or(0);
    let mut exp: i64 = 1;
    while max / exp > 0 {
        let digits: Vec<usize> = run
            .a
            .iter()
            .map(|v| ((v / exp) % RADIX_BASE) as usize)
            .collect();
        let mut counts = [0usize; RADIX_BASE as usize];
        for &d in &digits {
            counts[d] += 1;
        }
        for d in 1..counts.len() {
            counts[d] += counts[d - 1];
        }

        let mut output = vec![0i64; n];
        for i in (0..n).rev() {
            let digit = digits[i];
            counts[digit] -= 1;
            let slot = counts[digit];
            output[slot] = run.a[i];
            run.emit(
                format!("Place {} at position {}", run.a[i], slot),
                Highlights::new().with(Role::Current, Mark::at(i)),
                vars! { "exp" => exp, "digit" => digit, "slot" => slot },
            );
        }

        for (i, value) in output.into_iter().enumerate() {
            run.a[i] = value;
            run.rec.bump("writes");
            run.emit(
                format!("Write back {}", value),
                Highlights::new().with(Role::Swap, Mark::at(i)),
                vars! { "exp" => exp },
            );
        }

        exp = match exp.checked_mul(RADIX_BASE) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(finish(run, "Radix Sort"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    fn last_values(frames: &[Frame]) -> Vec<i64> {
        frames.last().unwrap().view().as_array().unwrap().to_vec()
    }

    #[test]
    fn test_bubble_three_comparisons() {
        let frames: Vec<Frame> = bubble_sort(&[3, 2, 1]).collect();
        let compares = frames
            .iter()
            .filter(|f| f.highlights().contains(Role::Compare))
            .count();
        assert_eq!(compares, 3);
        assert_eq!(frames.last().unwrap().metric("comparisons"), 3);
        assert_eq!(frames.last().unwrap().metric("swaps"), 3);
        assert_eq!(last_values(&frames), vec![1, 2, 3]);
    }

    #[test]
    fn test_insertion_sort_terminal_frame() {
        let frames: Vec<Frame> = insertion_sort(&[5, 3, 4, 1, 2]).collect();
        assert_eq!(last_values(&frames), vec![1, 2, 3, 4, 5]);
        assert_eq!(frames[0].view().as_array().unwrap(), &[5, 3, 4, 1, 2]);
    }

    #[test]
    fn test_insertion_counts_stopping_comparison() {
        // [1, 2]: one comparison, no shift
        let frames: Vec<Frame> = insertion_sort(&[1, 2]).collect();
        let last = frames.last().unwrap();
        assert_eq!(last.metric("comparisons"), 1);
        assert_eq!(last.metric("swaps"), 0);
    }

    #[test]
    fn test_selection_skips_noop_swaps() {
        let frames: Vec<Frame> = selection_sort(&[1, 2, 3]).collect();
        assert!(frames.iter().all(|f| !f.highlights().contains(Role::Swap)));
        assert_eq!(frames.last().unwrap().metric("comparisons"), 3);
    }

    #[test]
    fn test_median_of_three_picks_middle_value() {
        let mut picker = PivotPicker::new(PivotPolicy::MedianOfThree);
        assert_eq!(picker.choose(&[9, 1, 5], 0, 2), 2);
        assert_eq!(picker.choose(&[1, 5, 9], 0, 2), 1);
    }

    #[test]
    fn test_quick_sort_policies_all_sort() {
        let input = [7, 2, 9, 4, 4, 1, 8];
        for policy in [
            PivotPolicy::Last,
            PivotPolicy::First,
            PivotPolicy::MedianOfThree,
            PivotPolicy::Random { seed: Some(42) },
        ] {
            let frames: Vec<Frame> = quick_sort(&input, policy).collect();
            assert_eq!(last_values(&frames), vec![1, 2, 4, 4, 7, 8, 9], "{:?}", policy);
        }
    }

    #[test]
    fn test_pivot_already_in_place_is_not_a_swap() {
        let frames: Vec<Frame> = quick_sort(&[1, 2, 3], PivotPolicy::Last).collect();
        let placed: Vec<&Frame> = frames
            .iter()
            .filter(|f| f.narration().starts_with("Place pivot"))
            .collect();
        assert_eq!(placed.len(), 2);
        assert!(placed.iter().all(|f| !f.highlights().contains(Role::Swap)));
        assert_eq!(frames.last().unwrap().metric("swaps"), 0);
    }

    #[test]
    fn test_counting_sort_rejects_negative() {
        let err = counting_sort(&[3, -1, 2]).unwrap_err();
        assert!(matches!(err, VizError::NegativeValue { value: -1, .. }));
    }

    #[test]
    fn test_counting_sort_rejects_huge_value() {
        let err = counting_sort(&[MAX_COUNTING_VALUE + 1]).unwrap_err();
        assert!(matches!(err, VizError::ValueTooLarge { .. }));
    }

    #[test]
    fn test_radix_sort_multi_digit() {
        let frames: Vec<Frame> = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66])
            .unwrap()
            .collect();
        assert_eq!(last_values(&frames), vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_empty_input_has_start_and_end() {
        for algorithm in SortAlgorithm::ALL {
            let frames: Vec<Frame> = algorithm.run(&[], PivotPolicy::Last).unwrap().collect();
            assert_eq!(frames.len(), 2, "{}", algorithm);
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("Quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
        assert!("bogo".parse::<SortAlgorithm>().is_err());
        assert_eq!(
            "median-of-three".parse::<PivotPolicy>().unwrap(),
            PivotPolicy::MedianOfThree
        );
    }
}
