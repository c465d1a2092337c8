use anyhow::anyhow;
use reqwest::Url;
use thiserror::Error;

use crate::bounds::GeoBoundingBox;

use super::query::toilet_query;
use super::types::*;

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let endpoint = endpoint
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", endpoint, e))?;

        Ok(Self {
            inner: client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues one interpreter request for the toilets inside `bounds`.
    pub async fn fetch_toilets(
        &self,
        bounds: &GeoBoundingBox,
    ) -> Result<Vec<PointOfInterest>, FetchError> {
        let body = self
            .inner
            .post(self.endpoint.clone())
            .body(toilet_query(bounds))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: InterpreterResponse = serde_json::from_str(&body)?;

        Ok(response.elements)
    }
}
