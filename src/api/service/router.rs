use axum::routing::{get, post, put};

use super::State;
use super::endpoints::*;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/api/viewport", put(set_viewport))
        .route("/api/bounds", get(get_bounds))
        .route("/api/toilets", get(get_markers))
        .route("/api/toilets/fetch", post(fetch_toilets))
        .route("/api/toilets/{id}", get(get_element))
        .with_state(state)
}
