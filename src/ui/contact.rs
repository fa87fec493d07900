//! Contact form rendering

use super::button::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::page::{ElementId, Page, Role};
use crate::state::FormField;
use crate::validate::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form: each input box is followed by its one-line
/// error container, then the success region and the send button.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get in touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Subject
            Constraint::Length(1),             // Subject error
            Constraint::Min(4),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(1),             // Success region
            Constraint::Length(BUTTON_HEIGHT), // Send button
        ])
        .margin(1)
        .split(area);

    let form = &app.state.form;
    let page = &app.state.page;

    draw_field_with_error(frame, chunks[0], chunks[1], page, &form.name, form.active_index == 0);
    draw_field_with_error(frame, chunks[2], chunks[3], page, &form.email, form.active_index == 1);
    draw_field_with_error(
        frame,
        chunks[4],
        chunks[5],
        page,
        &form.subject,
        form.active_index == 2,
    );
    draw_field_with_error(
        frame,
        chunks[6],
        chunks[7],
        page,
        &form.message,
        form.active_index == 3,
    );

    draw_success_region(frame, chunks[8], page);

    // Send button, left-aligned at a fixed width
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(chunks[9]);
    render_button(frame, button_area[0], "Send", form.on_send_button());
}

/// Draw one input box plus the error line beneath it
fn draw_field_with_error(
    frame: &mut Frame,
    field_area: Rect,
    error_area: Rect,
    page: &Page,
    field: &FormField,
    is_active: bool,
) {
    let is_invalid = page
        .get(ElementId::input_for(field.kind))
        .is_some_and(|input| input.invalid);

    draw_field(frame, field_area, field, is_active, is_invalid);
    draw_error_line(frame, error_area, page, field.kind);
}

/// Draw the error text announced for a field. The input's description
/// link names the element to read; only alert-role content is shown.
fn draw_error_line(frame: &mut Frame, area: Rect, page: &Page, kind: FieldKind) {
    let described_by = page
        .get(ElementId::input_for(kind))
        .and_then(|input| input.described_by);
    let Some(error) = described_by.and_then(|id| page.get(id)) else {
        return;
    };
    if error.role != Some(Role::Alert) || error.text.is_empty() {
        return;
    }
    let widget =
        Paragraph::new(format!("  {}", error.text)).style(Style::default().fg(Color::Red));
    frame.render_widget(widget, area);
}

/// Draw the success region when it carries a status announcement
fn draw_success_region(frame: &mut Frame, area: Rect, page: &Page) {
    let Some(region) = page.get(ElementId::SuccessRegion) else {
        return;
    };
    if region.role != Some(Role::Status) || region.text.is_empty() {
        return;
    }
    let widget = Paragraph::new(format!("  {}", region.text)).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(widget, area);
}
