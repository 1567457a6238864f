pub mod status;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/", get(status::root))
        .route("/api/status", get(status::list).post(status::create))
        .route(
            "/api/proposals",
            get(submissions::list_proposals).post(submissions::create_proposal),
        )
        .route(
            "/api/wem-requests",
            get(submissions::list_wem_requests).post(submissions::create_wem_request),
        )
        .route(
            "/api/contacts",
            get(submissions::list_contacts).post(submissions::create_contact),
        )
}
