use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored form submission. Training proposals, WEM requests, and contact
/// messages share this shape; each kind lives in its own table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub source_page: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Incoming payload for the three submission forms. Every field parses as
/// optional so the validation layer can report all missing or out-of-range
/// fields in one pass instead of failing at deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmissionPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub source_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Proposal,
    WemRequest,
    Contact,
}

impl SubmissionKind {
    /// Table backing this kind. The closed set here is the only source of
    /// identifiers ever formatted into a query.
    pub fn table(self) -> &'static str {
        match self {
            SubmissionKind::Proposal => "proposals",
            SubmissionKind::WemRequest => "wem_requests",
            SubmissionKind::Contact => "contacts",
        }
    }

    /// Contact messages are the only form where the body is mandatory.
    pub fn requires_message(self) -> bool {
        matches!(self, SubmissionKind::Contact)
    }
}
