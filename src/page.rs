//! In-memory model of the contact page's element tree
//!
//! Element identifiers and their markers are the external contract: the
//! renderer draws from this model, and tests assert against it. Helpers
//! silently no-op when an element is absent so an incomplete page never
//! fails.

use crate::validate::FieldKind;
use std::collections::BTreeMap;

/// Stable identifier for an element on the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementId {
    /// Clock display in the page header
    UserTime,
    NameInput,
    EmailInput,
    SubjectInput,
    MessageInput,
    NameError,
    EmailError,
    SubjectError,
    MessageError,
    /// Global success region below the form
    SuccessRegion,
}

impl ElementId {
    /// Every element of the standard contact page
    pub const ALL: [ElementId; 10] = [
        Self::UserTime,
        Self::NameInput,
        Self::EmailInput,
        Self::SubjectInput,
        Self::MessageInput,
        Self::NameError,
        Self::EmailError,
        Self::SubjectError,
        Self::MessageError,
        Self::SuccessRegion,
    ];

    /// External identifier, as exposed to tooling and tests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserTime => "test-user-time",
            Self::NameInput => "contact-name",
            Self::EmailInput => "contact-email",
            Self::SubjectInput => "contact-subject",
            Self::MessageInput => "contact-message",
            Self::NameError => "error-name",
            Self::EmailError => "error-email",
            Self::SubjectError => "error-subject",
            Self::MessageError => "error-message",
            Self::SuccessRegion => "contact-success",
        }
    }

    /// Input element for a field
    pub fn input_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Name => Self::NameInput,
            FieldKind::Email => Self::EmailInput,
            FieldKind::Subject => Self::SubjectInput,
            FieldKind::Message => Self::MessageInput,
        }
    }

    /// Error container for a field
    pub fn error_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Name => Self::NameError,
            FieldKind::Email => Self::EmailError,
            FieldKind::Subject => Self::SubjectError,
            FieldKind::Message => Self::MessageError,
        }
    }
}

/// Assistive role marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Content is announced immediately
    Alert,
    /// Content is announced as a status update
    Status,
}

/// A single page element: text content plus accessibility markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub role: Option<Role>,
    /// Polite live-region flag: changes are announced without interrupting
    pub live_polite: bool,
    /// Invalid marker, set on inputs while their error is active
    pub invalid: bool,
    /// Link from an input to the element describing its error
    pub described_by: Option<ElementId>,
}

/// The contact page's element tree
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: BTreeMap<ElementId, Element>,
}

impl Page {
    /// Empty page; every helper is a no-op until elements are inserted
    pub fn new() -> Self {
        Self::default()
    }

    /// Page containing every element of the contact page contract
    pub fn standard() -> Self {
        let mut page = Self::new();
        for id in ElementId::ALL {
            page.insert(id);
        }
        page
    }

    /// Insert an empty element, replacing any existing one
    pub fn insert(&mut self, id: ElementId) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    /// Remove an element, disabling features that target it
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Text content of an element, if present
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|element| element.text.as_str())
    }

    /// Overwrite an element's text content; no-op when the element is absent
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.text = text.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_page_contains_every_element() {
        let page = Page::standard();
        for id in ElementId::ALL {
            assert!(page.contains(id), "missing {id:?}");
        }
    }

    #[test]
    fn test_new_page_is_empty() {
        let page = Page::new();
        for id in ElementId::ALL {
            assert!(!page.contains(id));
        }
    }

    #[test]
    fn test_inserted_element_starts_clean() {
        let mut page = Page::new();
        page.insert(ElementId::NameError);
        let element = page.get(ElementId::NameError).unwrap();
        assert_eq!(element.text, "");
        assert_eq!(element.role, None);
        assert!(!element.live_polite);
        assert!(!element.invalid);
        assert_eq!(element.described_by, None);
    }

    #[test]
    fn test_set_text_overwrites() {
        let mut page = Page::standard();
        page.set_text(ElementId::UserTime, "123");
        page.set_text(ElementId::UserTime, "456");
        assert_eq!(page.text(ElementId::UserTime), Some("456"));
    }

    #[test]
    fn test_set_text_on_missing_element_is_noop() {
        let mut page = Page::new();
        page.set_text(ElementId::UserTime, "123");
        assert_eq!(page.text(ElementId::UserTime), None);
    }

    #[test]
    fn test_remove_disables_lookup() {
        let mut page = Page::standard();
        page.remove(ElementId::UserTime);
        assert!(!page.contains(ElementId::UserTime));
        assert_eq!(page.text(ElementId::UserTime), None);
    }

    #[test]
    fn test_external_identifiers() {
        assert_eq!(ElementId::UserTime.as_str(), "test-user-time");
        assert_eq!(ElementId::NameInput.as_str(), "contact-name");
        assert_eq!(ElementId::MessageError.as_str(), "error-message");
        assert_eq!(ElementId::SuccessRegion.as_str(), "contact-success");
    }

    #[test]
    fn test_field_element_mapping() {
        use crate::validate::FieldKind;

        assert_eq!(ElementId::input_for(FieldKind::Email), ElementId::EmailInput);
        assert_eq!(ElementId::error_for(FieldKind::Email), ElementId::EmailError);
        assert_eq!(
            ElementId::error_for(FieldKind::Message),
            ElementId::MessageError
        );
    }
}
