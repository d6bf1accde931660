use casedesk_core::{AppViewModel, CardView};
use chrono::{DateTime, Local};
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use super::layout;

/// Hit areas for mouse handling, captured from the most recent draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct Screen {
    materials_rows: Rect,
}

impl Screen {
    /// Maps a click position to a 0-based material row, if it lands inside
    /// the list body.
    pub fn material_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.materials_rows;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        inside.then(|| (row - area.y) as usize)
    }
}

/// Rebuilds the whole frame from the view model. The projection is pure, so
/// redrawing with unchanged state yields the same screen.
pub fn render(frame: &mut Frame, view: &AppViewModel, input_focused: bool) -> Screen {
    let panes = layout::compute(frame.area());

    render_input(frame, panes.input, view, input_focused);
    render_materials(frame, panes.materials, view);
    render_cards(frame, panes.briefs, " Briefs (b) ", &view.briefs);
    render_cards(frame, panes.outlines, " Outlines (o) ", &view.outlines);
    render_status(frame, panes.status, view);

    // The alert sits on top of everything and blocks input until dismissed.
    if let Some(message) = &view.alert {
        render_alert(frame, message);
    }

    Screen {
        materials_rows: panes.materials.inner(Margin {
            vertical: 1,
            horizontal: 1,
        }),
    }
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel, focused: bool) {
    let title = if focused {
        " Import path (Enter imports, Esc browses) "
    } else {
        " Import path (press i to edit) "
    };
    let mut block = Block::bordered().title(title);
    if focused {
        block = block.border_style(Style::new().add_modifier(Modifier::BOLD));
    }
    frame.render_widget(Paragraph::new(view.path_input.as_str()).block(block), area);
}

fn render_materials(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let items: Vec<ListItem> = view
        .materials
        .iter()
        .map(|row| {
            let item = ListItem::new(format!("{}. {}", row.position, row.name));
            if row.selected {
                item.style(Style::new().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items).block(Block::bordered().title(" Materials "));
    frame.render_widget(list, area);
}

fn render_cards(frame: &mut Frame, area: Rect, title: &str, cards: &[CardView]) {
    let mut lines: Vec<Line> = Vec::new();
    for card in cards {
        lines.push(Line::from(Span::styled(
            card.title.clone(),
            Style::new().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            card.provenance.clone(),
            Style::new().add_modifier(Modifier::DIM),
        )));
        if let Some(body) = &card.body {
            for text_line in body.lines() {
                lines.push(Line::from(text_line.to_owned()));
            }
        }
        lines.push(Line::default());
    }
    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::bordered().title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    frame.render_widget(Paragraph::new(status_line(view)), area);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = layout::alert_rect(frame.area());
    frame.render_widget(Clear, area);
    let text = Text::from(vec![
        Line::default(),
        Line::from(message.to_owned()),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::new().add_modifier(Modifier::DIM),
        )),
    ]);
    let paragraph = Paragraph::new(text)
        .block(Block::bordered().title(" Notice "))
        .wrap(Wrap { trim: false })
        .centered();
    frame.render_widget(paragraph, area);
}

fn status_line(view: &AppViewModel) -> String {
    if view.materials.is_empty() {
        return "No materials yet. Press i, type a PDF path, then Enter to import.".to_owned();
    }

    let mut status = format!("Materials: {}", view.materials.len());
    if let Some(selected) = view.selected_row() {
        let mut details = format_size(selected.size);
        if let Some(modified) = selected.modified {
            let stamp: DateTime<Local> = modified.into();
            details.push_str(&format!(", {}", stamp.format("%Y-%m-%d %H:%M")));
        }
        status.push_str(&format!(" | Selected: {} ({details})", selected.name));
    }
    if let Some(stats) = view.last_import {
        status.push_str(&format!(
            " | Last import: added {}, skipped {}",
            stats.imported, stats.skipped
        ));
    }
    if view.generating > 0 {
        status.push_str(&format!(" | Generating: {}", view.generating));
    }
    status.push_str(" | b brief, o outline, q quit");
    status
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
