use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::SUBMIT_WIDTH;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub hint: Rect,
    pub outcome: Rect,
    pub status: Rect,
}

pub fn form_layout(area: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let form_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SUBMIT_WIDTH)])
        .split(rows[1]);

    FormLayout {
        header: rows[0],
        input: form_row[0],
        submit: form_row[1],
        hint: rows[2],
        outcome: rows[3],
        status: rows[4],
    }
}

/// Splits the outcome region into the primary keyword box and the secondary list.
pub fn results_layout(outcome: Rect) -> (Rect, Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(outcome);
    (parts[0], parts[1])
}
