use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Permissive `local@domain.tld` check, not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// In-progress booking values, persisted between visits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        true
    }

    pub fn is_email(self) -> bool {
        matches!(self, Field::Email)
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Message => 3,
        }
    }
}

/// Blur-time check: blank required fields and malformed non-empty emails fail.
pub fn field_is_valid(field: Field, value: &str) -> bool {
    if field.required() && value.trim().is_empty() {
        return false;
    }
    !(field.is_email() && !value.is_empty() && !is_valid_email(value))
}

/// Payload handed to the submission collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
}

impl BookingRequest {
    pub fn from_draft(draft: &Draft, now: DateTime<Utc>) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            message: draft.message.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    draft: Draft,
    errors: [bool; 4],
    phase: FormPhase,
}

impl BookingForm {
    pub fn with_draft(draft: Draft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors[field.index()]
    }

    /// Updates one field. The caller persists the returned draft.
    pub fn input(&mut self, field: Field, value: String) -> &Draft {
        *self.draft.slot(field) = value;
        &self.draft
    }

    pub fn blur(&mut self, field: Field) {
        self.errors[field.index()] = !field_is_valid(field, self.draft.get(field));
    }

    pub fn focus(&mut self, field: Field) {
        self.errors[field.index()] = false;
    }

    /// Snapshots the fields for submission. `None` while a submission is in
    /// flight or after success, so a double click sends one request.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<BookingRequest> {
        if self.phase != FormPhase::Editing {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(BookingRequest::from_draft(&self.draft, now))
    }

    pub fn submit_succeeded(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Succeeded;
        }
    }

    /// Back to editing with every value intact.
    pub fn submit_failed(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    /// Delayed reset after success. The form stays hidden.
    pub fn reset_fields(&mut self) {
        self.draft = Draft::default();
        self.errors = [false; 4];
    }

    pub fn form_visible(&self) -> bool {
        self.phase != FormPhase::Succeeded
    }

    pub fn success_visible(&self) -> bool {
        self.phase == FormPhase::Succeeded
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn field_style(&self, field: Field) -> &'static str {
        if self.has_error(field) {
            "border-color: #e74c3c;"
        } else {
            ""
        }
    }
}
