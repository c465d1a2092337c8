pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::overpass;
use crate::state::SharedState;

#[derive(Clone)]
pub struct State {
    pub app: SharedState,
    pub client: overpass::Client,
}

impl State {
    pub fn new(app: SharedState, client: overpass::Client) -> Self {
        Self { app, client }
    }
}

impl axum::extract::FromRef<State> for overpass::Client {
    fn from_ref(input: &State) -> Self {
        input.client.clone()
    }
}

impl axum::extract::FromRef<State> for SharedState {
    fn from_ref(input: &State) -> Self {
        input.app.clone()
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl types::ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}
