//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`view`]: the structure itself (array bars, node chain, tree outline,
//!   adjacency list) with highlighted slots
//! - [`details`]: narration, algorithm variables, metrics and highlight legend
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a `render_*_pane()` function. Panes are stateless apart
//! from the scroll offset the app passes in.

pub mod details;
pub mod status;
pub mod view;

pub use details::{render_data_pane, render_metrics_pane, render_narration_pane};
pub use status::{render_status_bar, StatusRenderData};
pub use view::render_view_pane;

use crate::frame::{Highlights, Role, Slot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
}

fn role_style(role: Option<Role>) -> Style {
    match role {
        Some(role) => Style::default()
            .fg(DEFAULT_THEME.role_color(role))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Style for a slot: the color of its highest-precedence role, bold when marked
fn slot_style(highlights: &Highlights, slot: Slot) -> Style {
    role_style(highlights.role_of(slot))
}

/// Render `items` as a list, clamping `scroll_offset` to the content
fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: Vec<ListItem>,
    scroll_offset: &mut usize,
) {
    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
