use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::models::{StatusCheckPayload, SubmissionKind, SubmissionPayload};

const NAME_MAX: usize = 100;
const COMPANY_MAX: usize = 120;
const MESSAGE_MAX: usize = 2000;

// Standard local part, dotted domain. Bare domains ("user@host") are
// rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

/// A submission that passed validation, ready to be stamped with an id and
/// timestamp.
#[derive(Debug)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub source_page: Option<String>,
}

/// Check a form payload against the constraints for its kind, collecting
/// every violation rather than stopping at the first.
pub fn validate_submission(
    kind: SubmissionKind,
    payload: &SubmissionPayload,
) -> Result<ValidSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = payload.name.clone().unwrap_or_default();
    if name.is_empty() {
        errors.push(FieldError::new("name", "is required and must not be empty"));
    } else if name.chars().count() > NAME_MAX {
        errors.push(FieldError::new(
            "name",
            format!("must be at most {NAME_MAX} characters"),
        ));
    }

    let email = payload.email.clone().unwrap_or_default();
    if email.is_empty() {
        errors.push(FieldError::new("email", "is required"));
    } else if !EMAIL_RE.is_match(&email) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }

    if let Some(company) = &payload.company {
        if company.chars().count() > COMPANY_MAX {
            errors.push(FieldError::new(
                "company",
                format!("must be at most {COMPANY_MAX} characters"),
            ));
        }
    }

    match &payload.message {
        Some(message) if message.chars().count() > MESSAGE_MAX => {
            errors.push(FieldError::new(
                "message",
                format!("must be at most {MESSAGE_MAX} characters"),
            ));
        }
        Some(message) if kind.requires_message() && message.is_empty() => {
            errors.push(FieldError::new(
                "message",
                "is required and must not be empty",
            ));
        }
        None if kind.requires_message() => {
            errors.push(FieldError::new("message", "is required"));
        }
        _ => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        name,
        email,
        company: payload.company.clone(),
        message: payload.message.clone(),
        source_page: payload.source_page.clone(),
    })
}

/// Status checks only require the client name to be present; an empty
/// string is accepted.
pub fn validate_status_check(payload: &StatusCheckPayload) -> Result<String, Vec<FieldError>> {
    match &payload.client_name {
        Some(client_name) => Ok(client_name.clone()),
        None => Err(vec![FieldError::new("client_name", "is required")]),
    }
}
