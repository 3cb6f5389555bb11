//! Main TUI application state and logic

use crate::constants::{EVENT_POLL_MS, PLAY_TOGGLE_DEBOUNCE_MS};
use crate::playback::Player;
use crate::ui::panes::StatusRenderData;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    View,
    Narration,
    Data,
    Metrics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: view -> narration -> metrics -> data)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::View => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Metrics,
            FocusedPane::Metrics => FocusedPane::Data,
            FocusedPane::Data => FocusedPane::View,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::View => FocusedPane::Data,
            FocusedPane::Narration => FocusedPane::View,
            FocusedPane::Metrics => FocusedPane::Narration,
            FocusedPane::Data => FocusedPane::Metrics,
        }
    }
}

/// The main application state
pub struct App {
    /// Frames of the run and the playback cursor
    pub player: Player,

    /// Heading shown on the structure pane
    pub title: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub view_scroll: usize,
    pub data_scroll: usize,
    pub metrics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When autoplay time was last accounted for
    pub last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(player: Player, title: String) -> Self {
        App {
            player,
            title,
            focused_pane: FocusedPane::View,
            view_scroll: 0,
            data_scroll: 0,
            metrics_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let was_playing = self.player.is_playing();
            self.player.tick(now.duration_since(self.last_tick));
            self.last_tick = now;
            if was_playing && !self.player.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: View (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(columns[0]);

        // Right column: Metrics (top) | Variables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let current = self.player.current();

        super::panes::render_view_pane(
            frame,
            left_rows[0],
            current,
            &self.title,
            self.focused_pane == FocusedPane::View,
            &mut self.view_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            current,
            self.focused_pane == FocusedPane::Narration,
        );

        super::panes::render_metrics_pane(
            frame,
            right_rows[0],
            current,
            self.focused_pane == FocusedPane::Metrics,
            &mut self.metrics_scroll,
        );

        super::panes::render_data_pane(
            frame,
            right_rows[1],
            current,
            self.focused_pane == FocusedPane::Data,
            &mut self.data_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                current_step: self.player.index(),
                total_steps: self.player.len(),
                speed: self.player.speed().get(),
                is_playing: self.player.is_playing(),
            },
        );
    }

    fn focused_scroll(&mut self) -> Option<&mut usize> {
        match self.focused_pane {
            FocusedPane::View => Some(&mut self.view_scroll),
            FocusedPane::Data => Some(&mut self.data_scroll),
            FocusedPane::Metrics => Some(&mut self.metrics_scroll),
            FocusedPane::Narration => None,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.player.step_forward() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.status_message = if self.player.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.status_message = if self.player.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.set_speed(self.player.speed().faster());
                self.status_message = format!("Speed {}/s", self.player.speed().get());
            }
            KeyCode::Char('-') => {
                self.player.set_speed(self.player.speed().slower());
                self.status_message = format!("Speed {}/s", self.player.speed().get());
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(PLAY_TOGGLE_DEBOUNCE_MS)
                {
                    self.last_space_press = Instant::now();
                    self.player.toggle();
                    self.last_tick = Instant::now();
                    self.status_message = if self.player.is_playing() {
                        "Playing...".to_string()
                    } else if self.player.at_end() {
                        "At the last step; ⌫ to restart".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.restart();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Frame as StepFrame, View};
    use crate::playback::Speed;
    use crossterm::event::KeyModifiers;

    fn app(n: usize) -> App {
        let frames = (0..n).map(|i| StepFrame::new(i, View::Array(vec![]))).collect();
        App::new(Player::new(frames, Speed::default()), "Test".to_string())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_step_and_clamp() {
        let mut app = app(4);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.player.index(), 3);
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");
    }

    #[test]
    fn test_enter_and_backspace_jump() {
        let mut app = app(5);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.player.index(), 4);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.player.index(), 0);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = app(1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Narration);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Data);
    }

    #[test]
    fn test_speed_keys() {
        let mut app = app(1);
        let before = app.player.speed().get();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.player.speed().get(), before + 1);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.player.speed().get(), before - 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app(1);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
