//! Pure layout arithmetic; recomputed on every draw so the panes track the
//! live terminal size.

use ratatui::layout::{Constraint, Layout, Rect};

pub struct Panes {
    pub input: Rect,
    pub materials: Rect,
    pub briefs: Rect,
    pub outlines: Rect,
    pub status: Rect,
}

/// Splits the frame into the import input, the materials list on the left,
/// the two result columns stacked on the right, and a one-row status line.
pub fn compute(area: Rect) -> Panes {
    let [input, main, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [materials, results] =
        Layout::horizontal([Constraint::Percentage(34), Constraint::Percentage(66)]).areas(main);

    let [briefs, outlines] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(results);

    Panes {
        input,
        materials,
        briefs,
        outlines,
        status,
    }
}

/// Centered overlay rect for the alert dialog.
pub fn alert_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).min(60).max(20);
    let height = 7;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
