//! JSON REST handlers for temperature readings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roomtemp_app::ports::{ReadingRepository, RoomRepository};
use roomtemp_domain::id::RoomId;
use roomtemp_domain::reading::TemperatureReading;
use roomtemp_domain::time::parse_reading_date;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording a reading.
#[derive(Deserialize)]
pub struct RecordTemperatureRequest {
    pub temperature: Option<f64>,
    pub room: Option<RoomId>,
    /// `MM-DD-YYYY HH:MM:SS`, read as UTC. Defaults to the current time.
    pub date: Option<String>,
}

/// Body returned once the reading is stored.
#[derive(Serialize)]
pub struct TemperatureAdded {
    pub message: &'static str,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<TemperatureAdded>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/temperature`
pub async fn create<RR, TR>(
    State(state): State<AppState<RR, TR>>,
    payload: Result<Json<RecordTemperatureRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = TemperatureReading::builder();
    if let Some(temperature) = req.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(room) = req.room {
        builder = builder.room_id(room);
    }
    if let Some(date) = req.date.as_deref() {
        builder = builder.date(parse_reading_date(date)?);
    }

    state
        .reading_service
        .record_temperature(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(TemperatureAdded {
        message: "Temperature added.",
    })))
}
