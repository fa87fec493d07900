//! Layout components (header, status bar)

use crate::app::App;
use crate::page::ElementId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and main content, reserving the bottom
/// line for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header line: title on the left, clock display on the right
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Span::styled(
        " Contact Us ",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    // The clock element's text is the raw epoch-millisecond string.
    if let Some(time) = app.state.page.text(ElementId::UserTime) {
        let clock = format!("{time} ");
        let clock_area = Rect {
            x: area.x + area.width.saturating_sub(clock.len() as u16),
            y: area.y,
            width: (clock.len() as u16).min(area.width),
            height: 1,
        };
        let widget = Paragraph::new(Span::styled(clock, Style::default().fg(Color::DarkGray)));
        frame.render_widget(widget, clock_area);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = if app.state.form.on_send_button() {
        format!(" Enter:send  Tab:next  {}  Esc:quit", send_hint())
    } else {
        format!(" Tab:next  Shift+Tab:prev  {}  Esc:quit", send_hint())
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];

    // A polite live region announces its content without interrupting;
    // the status bar is where that announcement surfaces.
    if let Some(region) = app.state.page.get(ElementId::SuccessRegion) {
        if region.live_polite && !region.text.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                region.text.clone(),
                Style::default().fg(Color::Green),
            ));
        }
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn send_hint() -> String {
    format!("{}:send", crate::platform::SEND_SHORTCUT)
}
