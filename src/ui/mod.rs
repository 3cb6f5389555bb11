//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: playback state, keyboard event loop and pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (structure,
//!   narration, variables, metrics, status bar)
//! - **[`theme`]**: the color palette, including one color per highlight role
//!
//! The entry point for consumers is [`App`]: construct it with a [`Player`] over
//! recorded frames and call [`App::run`] to start the event loop.
//!
//! [`Player`]: crate::playback::Player
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
