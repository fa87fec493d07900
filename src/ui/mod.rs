//! UI module for rendering the TUI

mod button;
mod contact;
mod field_renderer;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    contact::draw(frame, main_area, app);
    layout::draw_status_bar(frame, app);
}
