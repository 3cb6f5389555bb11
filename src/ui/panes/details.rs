//! Narration, variables and metrics panes

use super::{pane_block, render_scrolled};
use crate::frame::{Frame, Mark};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
};

/// Render what the current step did, in words
pub fn render_narration_pane(
    frame: &mut ratatui::Frame,
    area: Rect,
    current: Option<&Frame>,
    is_focused: bool,
) {
    let block = pane_block(" Narration ", is_focused);
    let text = match current {
        Some(current) if !current.narration().is_empty() => Line::styled(
            current.narration().to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Line::styled("(nothing to say)", Style::default().fg(DEFAULT_THEME.comment)),
    };
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the algorithm variables exposed at this step
pub fn render_data_pane(
    frame: &mut ratatui::Frame,
    area: Rect,
    current: Option<&Frame>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Variables ", is_focused);
    let data = current.map(Frame::data).filter(|data| !data.is_empty());

    let Some(data) = data else {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let items: Vec<ListItem> = data
        .iter()
        .map(|(name, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(name.clone(), Style::default().fg(DEFAULT_THEME.teal)),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.secondary)),
            ]))
        })
        .collect();
    render_scrolled(frame, area, block, items, scroll_offset);
}

fn describe_mark(mark: &Mark) -> String {
    match mark {
        Mark::Positions(indices) => format!(
            "@ {}",
            indices
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Mark::Span(low, high) => format!("[{}, {}]", low, high),
        Mark::Nodes(ids) => ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render cumulative counters, then the roles highlighted at this step
pub fn render_metrics_pane(
    frame: &mut ratatui::Frame,
    area: Rect,
    current: Option<&Frame>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Metrics ", is_focused);
    let Some(current) = current else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut items: Vec<ListItem> = current
        .metrics()
        .iter()
        .map(|(name, total)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<13}", name), Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(
                    total.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    if !current.highlights().is_empty() {
        items.push(ListItem::new(Line::default()));
        for (role, mark) in current.highlights().iter() {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("■ {:<11}", role.name()),
                    Style::default().fg(DEFAULT_THEME.role_color(role)),
                ),
                Span::styled(describe_mark(mark), Style::default().fg(DEFAULT_THEME.comment)),
            ])));
        }
    }

    render_scrolled(frame, area, block, items, scroll_offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_mark() {
        assert_eq!(describe_mark(&Mark::pair(3, 1)), "@ 3, 1");
        assert_eq!(describe_mark(&Mark::Span(0, -1)), "[0, -1]");
        assert_eq!(describe_mark(&Mark::Nodes(vec![7, 9])), "7, 9");
    }
}
