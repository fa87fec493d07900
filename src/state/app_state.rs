//! Application state definitions

use crate::page::Page;
use crate::state::ContactForm;

/// Top-level mutable state shared by the event loop and the renderer
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page model carrying the element and marker contract
    pub page: Page,
    /// Contact form editing state
    pub form: ContactForm,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            form: ContactForm::new(),
        }
    }
}
