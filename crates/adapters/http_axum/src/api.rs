//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod average;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod temperatures;

use axum::Router;
use axum::routing::{get, post};

use roomtemp_app::ports::{ReadingRepository, RoomRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<RR, TR>() -> Router<AppState<RR, TR>>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/room", post(rooms::create::<RR, TR>))
        .route("/temperature", post(temperatures::create::<RR, TR>))
        .route("/average", get(average::get::<RR, TR>))
}
