//! Contact form state

use super::field::FormField;
use crate::validate::{FieldKind, FormValues};

/// Index of the send button in the Tab cycle, after the four fields
pub const SEND_STOP: usize = 4;

/// The contact form: four fields in fixed order plus the send button stop
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldKind::Name, false),
            email: FormField::new(FieldKind::Email, false),
            subject: FormField::new(FieldKind::Subject, false),
            message: FormField::new(FieldKind::Message, true),
            active_index: 0,
        }
    }

    /// Number of Tab stops: the four fields plus the send button
    pub fn stop_count(&self) -> usize {
        SEND_STOP + 1
    }

    /// Move to the next Tab stop (wraps around)
    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % self.stop_count();
    }

    /// Move to the previous Tab stop (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.stop_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// True when the send button is the active stop
    pub fn on_send_button(&self) -> bool {
        self.active_index == SEND_STOP
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            _ => None,
        }
    }

    /// The field under the cursor, if a field (not the send button) is active
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.field(self.active_index)
            .is_some_and(|field| field.is_multiline)
    }

    /// Values as entered, read fresh for a submit attempt
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            subject: self.subject.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Reset every field to empty
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
