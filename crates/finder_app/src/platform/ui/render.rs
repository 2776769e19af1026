use finder_core::{AppViewModel, ResultsView, HEADING, SUBTITLE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::constants::*;
use super::layout::{form_layout, results_layout};

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let layout = form_layout(frame.area());

    render_header(frame, layout.header);
    render_input(frame, layout.input, view);
    render_submit(frame, layout.submit, view);

    if let Some(hint) = &view.validation_hint {
        frame.render_widget(
            Paragraph::new(hint.as_str()).style(Style::default().fg(Color::Yellow)),
            layout.hint,
        );
    }

    if let Some(error) = &view.error {
        render_error(frame, layout.outcome, error);
    }
    if let Some(results) = &view.results {
        render_results(frame, layout.outcome, results);
    }

    frame.render_widget(
        Paragraph::new(status_text(view)).style(Style::default().fg(Color::DarkGray)),
        layout.status,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(SUBTITLE),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default().borders(Borders::ALL).title(TITLE_INPUT);
    let text = match view.placeholder() {
        Some(placeholder) => Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        None => Span::raw(view.url_input.as_str()),
    };
    // Keep the end of the typed text and the cursor inside the field.
    let inner_width = area.width.saturating_sub(2);
    let typed = u16::try_from(view.url_input.width()).unwrap_or(u16::MAX);
    let offset = typed.saturating_sub(inner_width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .scroll((0, offset))
            .block(block),
        area,
    );
    frame.set_cursor_position((area.x + 1 + (typed - offset), area.y + 1));
}

fn render_submit(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let style = if view.submit_enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(view.submit_label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let style = Style::default().fg(Color::Red);
    frame.render_widget(
        Paragraph::new(error)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(TITLE_ERROR)),
        area,
    );
}

fn render_results(frame: &mut Frame, area: Rect, results: &ResultsView) {
    let (primary_area, secondary_area) = results_layout(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            results.primary_keyword.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL).title(TITLE_PRIMARY)),
        primary_area,
    );

    let items: Vec<ListItem> = results
        .secondary_keywords
        .iter()
        .map(|row| ListItem::new(format!("{}. {}", row.position + 1, row.text)))
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(TITLE_SECONDARY)),
        secondary_area,
    );
}

fn status_text(view: &AppViewModel) -> String {
    match view.in_flight {
        0 => KEY_HELP.to_string(),
        1 => format!("{KEY_HELP} | 1 request in flight"),
        n => format!("{KEY_HELP} | {n} requests in flight"),
    }
}
