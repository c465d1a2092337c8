use axum::extract::{Json, Path, State};

use crate::api::overpass;
use crate::bounds::{self, GeoBoundingBox, Viewport};
use crate::state::{AppState, SharedState};

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

fn markers(app: &AppState) -> MarkersResponse {
    MarkersResponse {
        markers: app.results().iter().map(Marker::from).collect(),
    }
}

pub async fn set_viewport(
    State(app): State<SharedState>,
    Json(viewport): Json<Viewport>,
) -> Json<GeoBoundingBox> {
    let bounds = bounds::compute_bounds(&viewport);
    log::debug!("viewport {viewport:?} -> bounds {bounds:?}");

    app.write().await.set_bounds(bounds);

    Json(bounds)
}

pub async fn get_bounds(State(app): State<SharedState>) -> Json<GeoBoundingBox> {
    Json(app.read().await.bounds())
}

pub async fn get_markers(State(app): State<SharedState>) -> Json<MarkersResponse> {
    Json(markers(&*app.read().await))
}

/// Failures are logged and otherwise swallowed: the caller always gets the
/// markers currently held, whether or not this fetch replaced them.
pub async fn fetch_toilets(
    State(app): State<SharedState>,
    State(client): State<overpass::Client>,
) -> Json<MarkersResponse> {
    let ticket = app.write().await.begin_fetch();

    match client.fetch_toilets(&ticket.bounds).await {
        Ok(results) => {
            let count = results.len();
            let mut app = app.write().await;

            if app.set_results(ticket, results) {
                log::info!("fetched {count} toilets within {:?}", ticket.bounds);
            } else {
                log::debug!(
                    "discarding {count} toilets from superseded fetch #{}",
                    ticket.generation
                );
            }
        }
        Err(e) => log::warn!("fetching toilets from {} failed: {e}", client.endpoint()),
    }

    Json(markers(&*app.read().await))
}

pub async fn get_element(
    State(app): State<SharedState>,
    Path(r): Path<GetElementRequest>,
) -> Result<Json<ElementDetailResponse>> {
    let app = app.read().await;
    let element = app
        .find(r.id)
        .ok_or_else(|| ErrorResponse::not_found(format!("no element with id {}", r.id)))?;

    Ok(Json(ElementDetailResponse {
        title: element.title().to_string(),
        region: Viewport::around(element.lat, element.lon),
        tags: element.tag_rows(),
        element: element.clone(),
    }))
}
