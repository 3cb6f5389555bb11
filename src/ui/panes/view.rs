//! Structure pane rendering
//!
//! One renderer per [`View`] shape:
//!
//! - arrays: one bar per element, the search window marked in the gutter
//! - sequences: a node chain from head (or bottom/front) to the end
//! - trees: an outline rebuilt from the compact level-order projection
//! - graphs: one adjacency line per node
//!
//! Slots are colored by their highest-precedence highlight role.

use super::{pane_block, render_scrolled, role_style, slot_style};
use crate::frame::{Adjacency, Frame, Highlights, Mark, Role, Slot, Token, View};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
};
use std::collections::VecDeque;

/// Render the structure pane for the current frame
pub fn render_view_pane(
    frame: &mut ratatui::Frame,
    area: Rect,
    current: Option<&Frame>,
    title: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" {} ", title);
    let block = pane_block(&title, is_focused);

    let Some(current) = current else {
        let paragraph = Paragraph::new("(no frames)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let highlights = current.highlights();
    let width = area.width.saturating_sub(2) as usize;
    match current.view() {
        View::Sequence(tokens) => {
            let paragraph = Paragraph::new(sequence_lines(tokens, highlights))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        view => {
            let lines = match view {
                View::Array(values) => array_lines(values, highlights, width),
                View::Tree(slots) => tree_lines(slots, highlights),
                View::Graph(adjacency) => graph_lines(adjacency, highlights),
                View::Sequence(_) => Vec::new(),
            };
            let items = if lines.is_empty() {
                vec![ListItem::new(Line::styled(
                    "(empty)",
                    Style::default().fg(DEFAULT_THEME.comment),
                ))]
            } else {
                lines.into_iter().map(ListItem::new).collect()
            };
            render_scrolled(frame, area, block, items, scroll_offset);
        }
    }
}

fn array_lines(values: &[i64], highlights: &Highlights, width: usize) -> Vec<Line<'static>> {
    let max = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0).max(1);
    let label_width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    // index, gutter, spaces and the value label
    let bar_room = width.saturating_sub(4 + 2 + 2 + label_width).max(1);
    let range = highlights.range();

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let in_range = range.is_some_and(|(lo, hi)| lo <= i as isize && i as isize <= hi);
            let gutter = if in_range { "▐ " } else { "  " };
            let len = ((value.unsigned_abs() as u128 * bar_room as u128) / max as u128) as usize;
            let style = slot_style(highlights, Slot::Position(i));
            Line::from(vec![
                Span::styled(format!("{:>4}", i), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(gutter, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled("█".repeat(len.max(1)), style),
                Span::styled(format!(" {}", value), style),
            ])
        })
        .collect()
}

fn sequence_lines(tokens: &[Token], highlights: &Highlights) -> Vec<Line<'static>> {
    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    if tokens.is_empty() {
        return vec![Line::styled("(empty)", arrow)];
    }

    let mut spans = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", arrow));
        }
        spans.push(Span::styled(
            format!("[{}]", token),
            slot_style(highlights, Slot::Position(i)),
        ));
    }
    let ring = highlights.contains(Role::Circular);
    spans.push(Span::styled(if ring { " ↺ head" } else { " → ∅" }, arrow));

    let mut lines = vec![Line::from(spans), Line::default()];
    for (role, mark) in highlights.iter() {
        if role == Role::Circular {
            continue;
        }
        if let Mark::Positions(indices) = mark {
            let at: Vec<String> = indices.iter().map(usize::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>9}", role.name()),
                    Style::default().fg(DEFAULT_THEME.role_color(role)),
                ),
                Span::styled(format!(" @ {}", at.join(", ")), arrow),
            ]));
        }
    }
    lines
}

/// A node placed in the outline
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutlineRow {
    prefix: String,
    side: Option<&'static str>,
    slot: usize,
    value: i64,
}

/// Child slots of each slot in a compact level-order projection.
///
/// Holes only stand in for missing children of real nodes, so children are
/// assigned to real nodes in breadth-first order.
fn decode_children(slots: &[Option<i64>]) -> Vec<(Option<usize>, Option<usize>)> {
    let mut children = vec![(None, None); slots.len()];
    if slots.first().copied().flatten().is_none() {
        return children;
    }
    let mut queue = VecDeque::from([0usize]);
    let mut next = 1;
    while let Some(parent) = queue.pop_front() {
        for right in [false, true] {
            if next >= slots.len() {
                return children;
            }
            if slots[next].is_some() {
                if right {
                    children[parent].1 = Some(next);
                } else {
                    children[parent].0 = Some(next);
                }
                queue.push_back(next);
            }
            next += 1;
        }
    }
    children
}

fn outline(slots: &[Option<i64>]) -> Vec<OutlineRow> {
    fn walk(
        slot: usize,
        slots: &[Option<i64>],
        children: &[(Option<usize>, Option<usize>)],
        lead: &str,
        branch: Option<(&'static str, bool)>,
        rows: &mut Vec<OutlineRow>,
    ) {
        let Some(value) = slots[slot] else { return };
        let (prefix, below, side) = match branch {
            None => (String::new(), String::new(), None),
            Some((side, last)) => (
                format!("{}{}", lead, if last { "└── " } else { "├── " }),
                format!("{}{}", lead, if last { "    " } else { "│   " }),
                Some(side),
            ),
        };
        rows.push(OutlineRow {
            prefix,
            side,
            slot,
            value,
        });
        let (left, right) = children[slot];
        if let Some(l) = left {
            walk(l, slots, children, &below, Some(("L", right.is_none())), rows);
        }
        if let Some(r) = right {
            walk(r, slots, children, &below, Some(("R", true)), rows);
        }
    }

    let children = decode_children(slots);
    let mut rows = Vec::new();
    if !slots.is_empty() {
        walk(0, slots, &children, "", None, &mut rows);
    }
    rows
}

fn tree_lines(slots: &[Option<i64>], highlights: &Highlights) -> Vec<Line<'static>> {
    let branch = Style::default().fg(DEFAULT_THEME.comment);
    outline(slots)
        .into_iter()
        .map(|row| {
            // heaps mark positions, search trees mark values
            let role = highlights
                .role_of(Slot::Node(row.value))
                .or_else(|| highlights.role_of(Slot::Position(row.slot)));
            let style = role_style(role);
            let mut spans = vec![Span::styled(row.prefix, branch)];
            if let Some(side) = row.side {
                spans.push(Span::styled(format!("{}: ", side), branch));
            }
            spans.push(Span::styled(row.value.to_string(), style));
            Line::from(spans)
        })
        .collect()
}

fn graph_lines(adjacency: &Adjacency, highlights: &Highlights) -> Vec<Line<'static>> {
    let muted = Style::default().fg(DEFAULT_THEME.comment);
    adjacency
        .entries()
        .iter()
        .map(|(node, edges)| {
            let mut spans = vec![
                Span::styled(format!("{:>4}", node), slot_style(highlights, Slot::Node(*node))),
                Span::styled(" → ", muted),
            ];
            if edges.is_empty() {
                spans.push(Span::styled("∅", muted));
            }
            for (i, (neighbor, weight)) in edges.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", muted));
                }
                spans.push(Span::styled(
                    neighbor.to_string(),
                    slot_style(highlights, Slot::Node(*neighbor)),
                ));
                spans.push(Span::styled(format!(" ({})", weight), muted));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(slots: &[Option<i64>]) -> Vec<String> {
        outline(slots)
            .into_iter()
            .map(|row| {
                let side = row.side.map(|s| format!("{}: ", s)).unwrap_or_default();
                format!("{}{}{}", row.prefix, side, row.value)
            })
            .collect()
    }

    #[test]
    fn test_outline_of_full_tree() {
        assert_eq!(
            labels(&[Some(2), Some(1), Some(3)]),
            vec!["2", "├── L: 1", "└── R: 3"]
        );
    }

    #[test]
    fn test_outline_skips_holes() {
        // 10 has only a right child 15, which has a left child 12
        assert_eq!(
            labels(&[Some(10), None, Some(15), Some(12)]),
            vec!["10", "└── R: 15", "    └── L: 12"]
        );
    }

    #[test]
    fn test_outline_of_empty_tree() {
        assert!(outline(&[]).is_empty());
    }

    #[test]
    fn test_array_range_gutter() {
        let hl = Highlights::new().with(Role::Range, Mark::Span(1, 2));
        let lines = array_lines(&[4, 8, 2], &hl, 40);
        assert_eq!(lines[0].spans[1].content, "  ");
        assert_eq!(lines[1].spans[1].content, "▐ ");
        assert_eq!(lines[2].spans[1].content, "▐ ");
    }
}
