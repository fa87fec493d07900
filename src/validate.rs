//! Pure validation rules for the contact form
//!
//! Every rule operates on the trimmed value and returns a structured
//! result; no page access happens here. Rendering the results is the
//! adapter's job (see `render`).

use regex::Regex;
use std::sync::LazyLock;

/// Compiled email pattern: one run of non-whitespace/non-@ characters,
/// "@", another run, ".", another run, matched against the whole value.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Minimum trimmed length of the message field, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const NAME_REQUIRED: &str = "Please enter your full name.";
pub const EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const EMAIL_FORMAT: &str = "Please enter a valid email (e.g., name@example.com).";
pub const SUBJECT_REQUIRED: &str = "Please enter a subject.";
pub const MESSAGE_TOO_SHORT: &str = "Your message must be at least 10 characters long.";

/// Semantic role of a contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    /// All fields, in validation order
    pub const ALL: [FieldKind; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Field label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Per-field outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(&'static str),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Aggregate outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Success,
    Failure,
}

/// Field values as entered, read fresh at each submit attempt
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Message => &self.message,
        }
    }
}

/// Result of checking every field of one submit attempt, in field order
#[derive(Debug, Clone)]
pub struct FormReport {
    checks: [(FieldKind, Validity); 4],
}

impl FormReport {
    /// Per-field results, in validation order
    pub fn checks(&self) -> impl Iterator<Item = (FieldKind, Validity)> + '_ {
        self.checks.iter().copied()
    }

    /// Result for a single field
    #[allow(dead_code)]
    pub fn validity(&self, kind: FieldKind) -> Validity {
        self.checks
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| *v)
            .unwrap_or(Validity::Valid)
    }

    /// Success only when every field is valid
    pub fn outcome(&self) -> FormOutcome {
        if self.checks.iter().all(|(_, v)| v.is_valid()) {
            FormOutcome::Success
        } else {
            FormOutcome::Failure
        }
    }
}

/// Apply a single field's rule to its trimmed value
pub fn check_field(kind: FieldKind, raw: &str) -> Validity {
    let value = raw.trim();
    match kind {
        FieldKind::Name => {
            if value.is_empty() {
                Validity::Invalid(NAME_REQUIRED)
            } else {
                Validity::Valid
            }
        }
        FieldKind::Email => {
            if value.is_empty() {
                Validity::Invalid(EMAIL_REQUIRED)
            } else if !EMAIL_REGEX.is_match(value) {
                Validity::Invalid(EMAIL_FORMAT)
            } else {
                Validity::Valid
            }
        }
        FieldKind::Subject => {
            if value.is_empty() {
                Validity::Invalid(SUBJECT_REQUIRED)
            } else {
                Validity::Valid
            }
        }
        FieldKind::Message => {
            if value.chars().count() < MIN_MESSAGE_CHARS {
                Validity::Invalid(MESSAGE_TOO_SHORT)
            } else {
                Validity::Valid
            }
        }
    }
}

/// Check every field of a submit attempt. Evaluation of one field never
/// short-circuits the others; all four results are always produced.
pub fn check_form(values: &FormValues) -> FormReport {
    let checks = FieldKind::ALL.map(|kind| (kind, check_field(kind, values.get(kind))));
    FormReport { checks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(name: &str, email: &str, subject: &str, message: &str) -> FormValues {
        FormValues {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    mod name_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                check_field(FieldKind::Name, ""),
                Validity::Invalid(NAME_REQUIRED)
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert_eq!(
                check_field(FieldKind::Name, "   \t  "),
                Validity::Invalid(NAME_REQUIRED)
            );
        }

        #[test]
        fn test_nonempty_is_valid() {
            assert_eq!(check_field(FieldKind::Name, "Jo"), Validity::Valid);
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(check_field(FieldKind::Name, "  Jo  "), Validity::Valid);
        }
    }

    mod email_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_minimal_valid_email() {
            assert_eq!(check_field(FieldKind::Email, "a@b.c"), Validity::Valid);
        }

        #[test]
        fn test_missing_dot_is_format_error() {
            assert_eq!(
                check_field(FieldKind::Email, "a@b"),
                Validity::Invalid(EMAIL_FORMAT)
            );
        }

        #[test]
        fn test_empty_is_required_not_format() {
            assert_eq!(
                check_field(FieldKind::Email, ""),
                Validity::Invalid(EMAIL_REQUIRED)
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert_eq!(
                check_field(FieldKind::Email, "  "),
                Validity::Invalid(EMAIL_REQUIRED)
            );
        }

        #[test]
        fn test_internal_whitespace_is_format_error() {
            assert_eq!(
                check_field(FieldKind::Email, "a b@c.d"),
                Validity::Invalid(EMAIL_FORMAT)
            );
        }

        #[test]
        fn test_double_at_is_format_error() {
            assert_eq!(
                check_field(FieldKind::Email, "a@@b.c"),
                Validity::Invalid(EMAIL_FORMAT)
            );
        }

        #[test]
        fn test_trailing_dot_is_format_error() {
            assert_eq!(
                check_field(FieldKind::Email, "a@b."),
                Validity::Invalid(EMAIL_FORMAT)
            );
        }

        #[test]
        fn test_full_match_required() {
            // The pattern is anchored; a valid core with trailing garbage
            // after internal whitespace must not pass.
            assert_eq!(
                check_field(FieldKind::Email, "x@y.z extra"),
                Validity::Invalid(EMAIL_FORMAT)
            );
        }

        #[test]
        fn test_realistic_address() {
            assert_eq!(
                check_field(FieldKind::Email, "jo@example.com"),
                Validity::Valid
            );
        }
    }

    mod subject_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                check_field(FieldKind::Subject, ""),
                Validity::Invalid(SUBJECT_REQUIRED)
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert_eq!(
                check_field(FieldKind::Subject, " \n "),
                Validity::Invalid(SUBJECT_REQUIRED)
            );
        }

        #[test]
        fn test_nonempty_is_valid() {
            assert_eq!(check_field(FieldKind::Subject, "Hi"), Validity::Valid);
        }
    }

    mod message_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_nine_chars_is_too_short() {
            assert_eq!(
                check_field(FieldKind::Message, "123456789"),
                Validity::Invalid(MESSAGE_TOO_SHORT)
            );
        }

        #[test]
        fn test_ten_chars_is_valid() {
            assert_eq!(check_field(FieldKind::Message, "1234567890"), Validity::Valid);
        }

        #[test]
        fn test_length_counted_after_trimming() {
            // Nine characters padded with whitespace stays too short.
            assert_eq!(
                check_field(FieldKind::Message, "  123456789  "),
                Validity::Invalid(MESSAGE_TOO_SHORT)
            );
        }

        #[test]
        fn test_length_counted_in_characters() {
            // Ten non-ASCII characters are more than ten bytes but still valid.
            assert_eq!(check_field(FieldKind::Message, "éééééééééé"), Validity::Valid);
        }

        #[test]
        fn test_empty_is_too_short() {
            assert_eq!(
                check_field(FieldKind::Message, ""),
                Validity::Invalid(MESSAGE_TOO_SHORT)
            );
        }
    }

    mod form_report {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_valid_is_success() {
            let report = check_form(&values("Jo", "jo@example.com", "Hi", "This is a valid message."));
            assert_eq!(report.outcome(), FormOutcome::Success);
            for (_, validity) in report.checks() {
                assert_eq!(validity, Validity::Valid);
            }
        }

        #[test]
        fn test_any_invalid_is_failure() {
            let report = check_form(&values("Jo", "jo@example.com", "Hi", "short"));
            assert_eq!(report.outcome(), FormOutcome::Failure);
        }

        #[test]
        fn test_all_fields_checked_without_short_circuit() {
            // Every field empty: all four must carry their own message.
            let report = check_form(&values("", "", "", ""));
            assert_eq!(
                report.validity(FieldKind::Name),
                Validity::Invalid(NAME_REQUIRED)
            );
            assert_eq!(
                report.validity(FieldKind::Email),
                Validity::Invalid(EMAIL_REQUIRED)
            );
            assert_eq!(
                report.validity(FieldKind::Subject),
                Validity::Invalid(SUBJECT_REQUIRED)
            );
            assert_eq!(
                report.validity(FieldKind::Message),
                Validity::Invalid(MESSAGE_TOO_SHORT)
            );
        }

        #[test]
        fn test_checks_preserve_field_order() {
            let report = check_form(&values("", "", "", ""));
            let order: Vec<FieldKind> = report.checks().map(|(kind, _)| kind).collect();
            assert_eq!(order, FieldKind::ALL.to_vec());
        }

        #[test]
        fn test_revalidation_is_idempotent() {
            let valid = values("Jo", "jo@example.com", "Hi", "This is a valid message.");
            let first = check_form(&valid);
            let second = check_form(&valid);
            assert_eq!(first.outcome(), FormOutcome::Success);
            assert_eq!(second.outcome(), FormOutcome::Success);
            for (kind, validity) in second.checks() {
                assert_eq!(validity, first.validity(kind));
            }
        }

        #[test]
        fn test_mixed_scenario() {
            let report = check_form(&values("", "x@y.com", "Hi", "short"));
            assert_eq!(report.outcome(), FormOutcome::Failure);
            assert_eq!(
                report.validity(FieldKind::Name),
                Validity::Invalid(NAME_REQUIRED)
            );
            assert_eq!(report.validity(FieldKind::Email), Validity::Valid);
            assert_eq!(report.validity(FieldKind::Subject), Validity::Valid);
            assert_eq!(
                report.validity(FieldKind::Message),
                Validity::Invalid(MESSAGE_TOO_SHORT)
            );
        }
    }
}
