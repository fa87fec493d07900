//! Applies validation results to the page model
//!
//! Reproduces the page's annotation contract: error text with an alert
//! role, invalid and description markers on the input, and a polite
//! status region for the success message. Every helper skips silently
//! when its target element is absent.

use crate::page::{ElementId, Page, Role};
use crate::validate::{FieldKind, FormOutcome, FormReport, Validity};

/// Text shown in the success region after a fully valid submission
pub const SUCCESS_TEXT: &str = "Thank you for contacting us! We will respond shortly.";

/// Show a field's error annotation and mark its input invalid
pub fn show_error(page: &mut Page, kind: FieldKind, message: &str) {
    let error_id = ElementId::error_for(kind);
    let Some(error) = page.get_mut(error_id) else {
        return;
    };
    error.text = message.to_owned();
    error.role = Some(Role::Alert);

    if let Some(input) = page.get_mut(ElementId::input_for(kind)) {
        input.invalid = true;
        input.described_by = Some(error_id);
    }
}

/// Clear a field's error annotation and unmark its input
pub fn clear_error(page: &mut Page, kind: FieldKind) {
    let Some(error) = page.get_mut(ElementId::error_for(kind)) else {
        return;
    };
    error.text.clear();
    error.role = None;

    if let Some(input) = page.get_mut(ElementId::input_for(kind)) {
        input.invalid = false;
        input.described_by = None;
    }
}

/// Render one field's check result
pub fn render_field(page: &mut Page, kind: FieldKind, validity: Validity) {
    match validity {
        Validity::Valid => clear_error(page, kind),
        Validity::Invalid(message) => show_error(page, kind, message),
    }
}

/// Fill the success region and mark it as a polite status announcement
pub fn show_success(page: &mut Page) {
    if let Some(region) = page.get_mut(ElementId::SuccessRegion) {
        region.text = SUCCESS_TEXT.to_owned();
        region.role = Some(Role::Status);
        region.live_polite = true;
    }
}

/// Empty the success region and remove its announcement markers
pub fn clear_success(page: &mut Page) {
    if let Some(region) = page.get_mut(ElementId::SuccessRegion) {
        region.text.clear();
        region.role = None;
        region.live_polite = false;
    }
}

/// Render a full submit attempt: every field's error display is
/// refreshed, then the success region is set or cleared.
pub fn render_report(page: &mut Page, report: &FormReport) {
    for (kind, validity) in report.checks() {
        render_field(page, kind, validity);
    }
    match report.outcome() {
        FormOutcome::Success => show_success(page),
        FormOutcome::Failure => clear_success(page),
    }
}
