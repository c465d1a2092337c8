use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::overpass::PointOfInterest;
use crate::bounds::Viewport;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub title: String,
}

impl From<&PointOfInterest> for Marker {
    fn from(poi: &PointOfInterest) -> Self {
        Self {
            id: poi.id,
            lat: poi.lat,
            lon: poi.lon,
            title: poi.title().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MarkersResponse {
    pub markers: Vec<Marker>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetElementRequest {
    pub id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ElementDetailResponse {
    pub title: String,
    pub element: PointOfInterest,
    pub region: Viewport,
    pub tags: Vec<[String; 2]>,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
}
