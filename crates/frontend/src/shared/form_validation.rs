//! Проверка форм перед отправкой.
//!
//! Обязательные поля (`[required]`) не должны быть пустыми; непустые поля
//! `type="email"` и `type="tel"` должны иметь корректный формат. Любая ошибка
//! подсвечивает поле классом `is-invalid`, блокирует отправку и показывает
//! одно сводное уведомление.

use crate::shared::alerts::{AlertService, Severity};
use crate::shared::dom_utils::{element_value, listen, query_all, query_document, toggle_class};
use web_sys::{Document, Element};

pub const INVALID_CLASS: &str = "is-invalid";
pub const FIELD_SELECTOR: &str = "[required], input[type=\"email\"], input[type=\"tel\"]";
pub const MISSING_FIELDS_MESSAGE: &str = "Please complete all required fields";
pub const MALFORMED_FIELDS_MESSAGE: &str = "Please check the highlighted fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

impl FieldKind {
    /// By the `type` attribute of an `<input>`.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type.map(|t| t.to_ascii_lowercase()).as_deref() {
            Some("email") => FieldKind::Email,
            Some("tel") => FieldKind::Phone,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Malformed,
}

/// Checks one field value. Blank optional fields are always valid.
pub fn check_field(value: &str, required: bool, kind: FieldKind) -> Option<FieldIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return required.then_some(FieldIssue::Missing);
    }
    let well_formed = match kind {
        FieldKind::Text => true,
        FieldKind::Email => validate_email(value),
        FieldKind::Phone => validate_phone(value),
    };
    (!well_formed).then_some(FieldIssue::Malformed)
}

/// `local@domain.tld` without whitespace and with exactly one `@`.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, spaces, `-`, `+`, `(` and `)` only.
pub fn validate_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "-+()".contains(c))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormReport {
    pub missing: usize,
    pub malformed: usize,
}

impl FormReport {
    pub fn record(&mut self, issue: Option<FieldIssue>) {
        match issue {
            Some(FieldIssue::Missing) => self.missing += 1,
            Some(FieldIssue::Malformed) => self.malformed += 1,
            None => {}
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing == 0 && self.malformed == 0
    }

    /// Text of the single summary alert, if the form is invalid.
    pub fn summary(&self) -> Option<&'static str> {
        if self.missing > 0 {
            Some(MISSING_FIELDS_MESSAGE)
        } else if self.malformed > 0 {
            Some(MALFORMED_FIELDS_MESSAGE)
        } else {
            None
        }
    }
}

// ── DOM binding ──────────────────────────────────────────────────────────────

/// Marks invalid fields of `form` and returns the report.
pub fn validate_form(form: &Element) -> FormReport {
    let mut report = FormReport::default();
    for field in query_all(form, FIELD_SELECTOR) {
        let kind = if field.tag_name().eq_ignore_ascii_case("input") {
            FieldKind::from_input_type(field.get_attribute("type").as_deref())
        } else {
            FieldKind::Text
        };
        let issue = check_field(
            &element_value(&field),
            field.has_attribute("required"),
            kind,
        );
        toggle_class(&field, INVALID_CLASS, issue.is_some());
        report.record(issue);
    }
    report
}

/// Validates every `<form>` on submit. Returns the number of bound forms.
pub fn bind_form_validation(document: &Document, alerts: AlertService) -> usize {
    let forms = query_document(document, "form");
    for form in &forms {
        let form_ref = form.clone();
        listen(form, "submit", move |event| {
            let report = validate_form(&form_ref);
            if let Some(message) = report.summary() {
                event.prevent_default();
                log::debug!(
                    "form blocked: {} missing, {} malformed",
                    report.missing,
                    report.malformed
                );
                alerts.raise(message, Severity::Error);
            }
        });
    }
    forms.len()
}
