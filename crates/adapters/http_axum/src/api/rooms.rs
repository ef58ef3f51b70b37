//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roomtemp_app::ports::{ReadingRepository, RoomRepository};
use roomtemp_domain::error::ValidationError;
use roomtemp_domain::id::RoomId;
use roomtemp_domain::room::NewRoom;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room.
///
/// Fields are optional so that an absent value is reported as a missing
/// field rather than a deserialization failure.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: Option<String>,
}

/// Body returned once the room exists.
#[derive(Serialize)]
pub struct RoomCreated {
    pub id: RoomId,
    pub message: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RoomCreated>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/room`
pub async fn create<RR, TR>(
    State(state): State<AppState<RR, TR>>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let name = req.name.ok_or(ValidationError::MissingField("name"))?;

    let room = state.room_service.create_room(NewRoom::new(name)).await?;
    Ok(CreateResponse::Created(Json(RoomCreated {
        id: room.id,
        message: room.created_message(),
    })))
}
