use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::email::Notifier;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub notifier: Notifier,
}
