pub mod status_check;
pub mod submission;

pub use status_check::{StatusCheck, StatusCheckPayload};
pub use submission::{Submission, SubmissionKind, SubmissionPayload};
