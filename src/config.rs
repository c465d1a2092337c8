use std::env::VarError;
use std::str::FromStr;

use anyhow::anyhow;

use crate::api::overpass::DEFAULT_ENDPOINT;
use crate::bounds::Viewport;

pub const REQUIRED_VARIABLES: &[&str] = &["LISTEN_PORT"];

const DEFAULT_LATITUDE: f64 = 35.681262;
const DEFAULT_LONGITUDE: f64 = 139.766403;

pub struct Config {
    pub listen_port: u16,
    pub overpass_url: String,
    pub initial_viewport: Viewport,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let listen_port = parse("LISTEN_PORT", &env("LISTEN_PORT")?)?;
        let overpass_url = optional("OVERPASS_URL")?.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let latitude = match optional("INITIAL_LATITUDE")? {
            Some(v) => parse("INITIAL_LATITUDE", &v)?,
            None => DEFAULT_LATITUDE,
        };
        let longitude = match optional("INITIAL_LONGITUDE")? {
            Some(v) => parse("INITIAL_LONGITUDE", &v)?,
            None => DEFAULT_LONGITUDE,
        };

        Ok(Self {
            listen_port,
            overpass_url,
            initial_viewport: Viewport::around(latitude, longitude),
        })
    }

    pub fn log(&self) {
        log::info!("listen port: {}", self.listen_port);
        log::info!("overpass endpoint: {}", self.overpass_url);
        log::info!(
            "initial viewport: ({}, {})",
            self.initial_viewport.center_latitude,
            self.initial_viewport.center_longitude
        );
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}

fn optional(name: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(name) {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}

fn parse<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| anyhow!("{name}={value:?} is invalid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_variable_name() {
        let err = parse::<u16>("LISTEN_PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("LISTEN_PORT"));

        assert_eq!(parse::<u16>("LISTEN_PORT", " 8080 ").unwrap(), 8080);
        assert_eq!(parse::<f64>("INITIAL_LATITUDE", "35.5").unwrap(), 35.5);
    }
}
