use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Liveness record written by the status widget on the marketing site.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StatusCheckPayload {
    pub client_name: Option<String>,
}
