//! # Introduction
//!
//! algotty runs classic algorithms and data-structure operations on small
//! inputs and records every meaningful step as a [`frame::Frame`]: a snapshot
//! of the structure, the positions or nodes involved, a one-line narration,
//! the algorithm's local variables and cumulative counters. The recorded run
//! is then played back in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or printed as JSON lines.
//!
//! ## Pipeline
//!
//! ```text
//! CLI args → Config → Scenario → runner + FrameRecorder → Vec<Frame> → Player → TUI / JSON
//! ```
//!
//! 1. [`config`] and [`input`]: parse the command line and its value lists.
//! 2. [`scenario`]: pick the runner and seed the structure.
//! 3. [`algorithms`]: sorting and searching over integer arrays.
//! 4. [`structures`]: linked lists, stack, queue, BST/AVL, binary heaps and
//!    graph traversals, each with plain and frame-recording operations.
//! 5. [`frame`]: frames, highlights and the recorder shared by every runner.
//! 6. [`playback`]: stepping and timed autoplay over a finished run.
//! 7. [`ui`]: ratatui front end; not part of the stable library API.
//!
//! Runs are deterministic: the same input always yields the same frames,
//! including random-pivot quick sort once a seed is given.

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod input;
pub mod logging;
pub mod playback;
pub mod scenario;
pub mod structures;
pub mod ui;
