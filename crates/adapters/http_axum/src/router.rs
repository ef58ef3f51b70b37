//! Axum router assembly.

use std::time::Duration;

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use roomtemp_app::ports::{ReadingRepository, RoomRepository};

use crate::error::{error_response, json_error_body};
use crate::state::AppState;

/// Timeout applied to every request when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api`, the greeting at `/` and a liveness check
/// at `/health`. Every request is logged by a [`TraceLayer`] and answered with
/// `408 Request Timeout` once `request_timeout` elapses. Error responses
/// always carry a JSON `{"message"}` body, including timeouts, unknown routes
/// and rejected methods.
pub fn build<RR, TR>(state: AppState<RR, TR>, request_timeout: Duration) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(json_error_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    "Hello World."
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("no route for {method} {uri}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use roomtemp_app::services::reading_service::ReadingService;
    use roomtemp_app::services::room_service::RoomService;
    use roomtemp_domain::average::GlobalAverage;
    use roomtemp_domain::error::{ConflictError, RoomTempError};
    use roomtemp_domain::id::RoomId;
    use roomtemp_domain::reading::TemperatureReading;
    use roomtemp_domain::room::{NewRoom, Room};
    use roomtemp_domain::time::{now, parse_reading_date};
    use serde_json::{Value, json};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Shared in-memory store standing in for both repositories, so readings
    /// can only reference rooms created through the API.
    #[derive(Clone, Default)]
    struct MemoryStore {
        rooms: Arc<Mutex<Vec<Room>>>,
        readings: Arc<Mutex<Vec<TemperatureReading>>>,
    }

    impl RoomRepository for MemoryStore {
        async fn create(&self, room: NewRoom) -> Result<Room, RoomTempError> {
            let mut rooms = self.rooms.lock().unwrap();
            let id = RoomId::new(i32::try_from(rooms.len()).unwrap() + 1);
            let room = room.with_id(id);
            rooms.push(room.clone());
            Ok(room)
        }
    }

    impl ReadingRepository for MemoryStore {
        async fn record(
            &self,
            reading: TemperatureReading,
        ) -> Result<TemperatureReading, RoomTempError> {
            let known = self
                .rooms
                .lock()
                .unwrap()
                .iter()
                .any(|room| room.id == reading.room_id);
            if !known {
                return Err(ConflictError::UnknownRoom(reading.room_id).into());
            }
            self.readings.lock().unwrap().push(reading.clone());
            Ok(reading)
        }

        async fn global_average(&self) -> Result<GlobalAverage, RoomTempError> {
            let readings = self.readings.lock().unwrap();
            if readings.is_empty() {
                return Ok(GlobalAverage::empty());
            }
            let days: HashSet<_> = readings.iter().map(|r| r.date.date_naive()).collect();
            #[allow(clippy::cast_precision_loss)]
            let mean = readings.iter().map(|r| r.temperature).sum::<f64>() / readings.len() as f64;
            Ok(GlobalAverage::from_raw(
                Some(mean),
                i64::try_from(days.len()).unwrap(),
            ))
        }
    }

    struct FailingStore;

    impl RoomRepository for FailingStore {
        async fn create(&self, _room: NewRoom) -> Result<Room, RoomTempError> {
            Err(RoomTempError::Storage("connection refused".into()))
        }
    }

    impl ReadingRepository for FailingStore {
        async fn record(
            &self,
            _reading: TemperatureReading,
        ) -> Result<TemperatureReading, RoomTempError> {
            Err(RoomTempError::Storage("connection refused".into()))
        }

        async fn global_average(&self) -> Result<GlobalAverage, RoomTempError> {
            Err(RoomTempError::Storage("connection refused".into()))
        }
    }

    /// Store whose every call outlives any short request timeout.
    struct SlowStore;

    const SLOW_STORE_DELAY: Duration = Duration::from_millis(500);

    impl RoomRepository for SlowStore {
        async fn create(&self, room: NewRoom) -> Result<Room, RoomTempError> {
            tokio::time::sleep(SLOW_STORE_DELAY).await;
            Ok(room.with_id(RoomId::new(1)))
        }
    }

    impl ReadingRepository for SlowStore {
        async fn record(
            &self,
            reading: TemperatureReading,
        ) -> Result<TemperatureReading, RoomTempError> {
            tokio::time::sleep(SLOW_STORE_DELAY).await;
            Ok(reading)
        }

        async fn global_average(&self) -> Result<GlobalAverage, RoomTempError> {
            tokio::time::sleep(SLOW_STORE_DELAY).await;
            Ok(GlobalAverage::empty())
        }
    }

    fn app(store: &MemoryStore) -> Router {
        let state = AppState::new(
            RoomService::new(store.clone()),
            ReadingService::new(store.clone()),
        );
        build(state, DEFAULT_REQUEST_TIMEOUT)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create_room(store: &MemoryStore, name: &str) -> i64 {
        let (status, body) =
            send_json(app(store), post_json("/api/room", &json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn should_greet_on_root() {
        let (status, body) = send(app(&MemoryStore::default()), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Hello World.");
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _) = send(app(&MemoryStore::default()), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_room_and_return_id_with_message() {
        let store = MemoryStore::default();

        let (status, body) = send_json(
            app(&store),
            post_json("/api/room", &json!({ "name": "Kitchen" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["message"], "Room Kitchen created.");
        assert_eq!(store.rooms.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_room_without_name() {
        let store = MemoryStore::default();

        let (status, body) = send_json(app(&store), post_json("/api/room", &json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "missing required field `name`");
        assert!(store.rooms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_non_json_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/room")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("name=Kitchen"))
            .unwrap();

        let (status, body) = send_json(app(&MemoryStore::default()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn should_reject_body_without_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/room")
            .body(Body::from(r#"{"name":"Kitchen"}"#))
            .unwrap();

        let (status, body) = send_json(app(&MemoryStore::default()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn should_reject_room_id_of_wrong_type() {
        let (status, _) = send_json(
            app(&MemoryStore::default()),
            post_json("/api/temperature", &json!({ "temperature": 20.0, "room": "one" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_record_temperature_with_explicit_date() {
        let store = MemoryStore::default();
        let room = create_room(&store, "Kitchen").await;

        let (status, body) = send_json(
            app(&store),
            post_json(
                "/api/temperature",
                &json!({ "temperature": 21.5, "room": room, "date": "01-15-2024 10:00:00" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Temperature added.");
        let readings = store.readings.lock().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(
            readings[0].date,
            parse_reading_date("01-15-2024 10:00:00").unwrap()
        );
    }

    #[tokio::test]
    async fn should_default_date_to_now_when_absent() {
        let store = MemoryStore::default();
        let room = create_room(&store, "Kitchen").await;

        let (status, _) = send_json(
            app(&store),
            post_json("/api/temperature", &json!({ "temperature": 19, "room": room })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let readings = store.readings.lock().unwrap();
        let drift = now() - readings[0].date;
        assert!(drift.num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn should_reject_temperature_without_room() {
        let store = MemoryStore::default();

        let (status, body) = send_json(
            app(&store),
            post_json("/api/temperature", &json!({ "temperature": 21.5 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "missing required field `room`");
    }

    #[tokio::test]
    async fn should_reject_reading_without_temperature() {
        let store = MemoryStore::default();
        let room = create_room(&store, "Kitchen").await;

        let (status, body) = send_json(
            app(&store),
            post_json("/api/temperature", &json!({ "room": room })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "missing required field `temperature`");
        assert!(store.readings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_malformed_date_before_storing() {
        let store = MemoryStore::default();
        let room = create_room(&store, "Kitchen").await;

        let (status, body) = send_json(
            app(&store),
            post_json(
                "/api/temperature",
                &json!({ "temperature": 21.5, "room": room, "date": "2024-01-15T10:00:00Z" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("invalid date"));
        assert!(store.readings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_conflict_when_room_does_not_exist() {
        let store = MemoryStore::default();

        let (status, body) = send_json(
            app(&store),
            post_json("/api/temperature", &json!({ "temperature": 21.5, "room": 404 })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "room 404 does not exist");
        assert!(store.readings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_average_readings_across_rooms() {
        let store = MemoryStore::default();
        let kitchen = create_room(&store, "Kitchen").await;
        let cellar = create_room(&store, "Cellar").await;
        for (room, temperature, date) in [
            (kitchen, 20.0, "01-15-2024 10:00:00"),
            (cellar, 22.0, "01-16-2024 10:00:00"),
        ] {
            let (status, _) = send_json(
                app(&store),
                post_json(
                    "/api/temperature",
                    &json!({ "temperature": temperature, "room": room, "date": date }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, first) = send_json(app(&store), get_request("/api/average")).await;
        let (_, second) = send_json(app(&store), get_request("/api/average")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, json!({ "average": 21.0, "days": 2 }));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_return_null_average_when_no_readings() {
        let (status, body) = send_json(app(&MemoryStore::default()), get_request("/api/average")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "average": null, "days": 0 }));
    }

    #[tokio::test]
    async fn should_hide_storage_failure_behind_internal_error() {
        let state = AppState::new(RoomService::new(FailingStore), ReadingService::new(FailingStore));
        let app = build(state, DEFAULT_REQUEST_TIMEOUT);

        let (status, body) = send_json(app, get_request("/api/average")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "internal server error" }));
    }

    #[tokio::test]
    async fn should_answer_with_json_timeout_when_store_is_slow() {
        let state = AppState::new(RoomService::new(SlowStore), ReadingService::new(SlowStore));
        let app = build(state, Duration::from_millis(20));

        let (status, body) = send_json(app, get_request("/api/average")).await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, json!({ "message": "Request Timeout" }));
    }

    #[tokio::test]
    async fn should_answer_with_json_when_method_is_not_allowed() {
        let response = app(&MemoryStore::default())
            .oneshot(get_request("/api/room"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Method Not Allowed" }));
    }

    #[tokio::test]
    async fn should_answer_with_json_when_route_is_unknown() {
        let (status, body) =
            send_json(app(&MemoryStore::default()), get_request("/api/rooms")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "no route for GET /api/rooms" }));
    }
}
