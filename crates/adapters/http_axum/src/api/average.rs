//! JSON REST handler for the global average.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use roomtemp_app::ports::{ReadingRepository, RoomRepository};
use roomtemp_domain::average::GlobalAverage;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the average endpoint.
pub enum GetResponse {
    Ok(Json<GlobalAverage>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/average`
pub async fn get<RR, TR>(
    State(state): State<AppState<RR, TR>>,
) -> Result<GetResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let average = state.reading_service.global_average().await?;
    Ok(GetResponse::Ok(Json(average)))
}
