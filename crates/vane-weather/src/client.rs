//! Blocking Open-Meteo client.

use log::debug;
use thiserror::Error;

use crate::model::{CityCandidate, ForecastResponse, GeocodingResponse, WeatherSnapshot};

/// Failure modes of the weather/geocoding collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no geocoding match for `{0}`")]
    NoMatch(String),
}

/// The surface each screen fetches through. Implemented by
/// [`OpenMeteoClient`]; screens take the trait so tests can stub it.
pub trait WeatherProvider {
    fn fetch_weather_by_name(&self, name: &str) -> Result<WeatherSnapshot, FetchError>;

    fn fetch_weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, FetchError>;

    fn search_cities(&self, query: &str) -> Result<Vec<CityCandidate>, FetchError>;
}

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Maximum autocomplete candidates requested per search.
const SEARCH_LIMIT: usize = 10;

pub struct OpenMeteoClient {
    http: reqwest::blocking::Client,
    forecast_url: String,
    geocoding_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("vane/0.1")
            .build()?;
        Ok(Self {
            http,
            forecast_url: FORECAST_URL.to_owned(),
            geocoding_url: GEOCODING_URL.to_owned(),
        })
    }

    /// Point the client at alternate endpoints (local stub server).
    pub fn with_endpoints(
        forecast_url: impl Into<String>,
        geocoding_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let mut client = Self::new()?;
        client.forecast_url = forecast_url.into();
        client.geocoding_url = geocoding_url.into();
        Ok(client)
    }

    fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        let response = self.http.get(url).query(query).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

impl WeatherProvider for OpenMeteoClient {
    fn fetch_weather_by_name(&self, name: &str) -> Result<WeatherSnapshot, FetchError> {
        let candidates = self.search_cities(name)?;
        let city = candidates
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoMatch(name.to_owned()))?;
        let mut snapshot = self.fetch_weather_by_coordinates(city.latitude, city.longitude)?;
        snapshot.city = city.label();
        Ok(snapshot)
    }

    fn fetch_weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, FetchError> {
        debug!("fetching weather for {latitude},{longitude}");
        let body = self.get_text(
            &self.forecast_url,
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_owned()),
            ],
        )?;
        let forecast: ForecastResponse = serde_json::from_str(&body)?;
        Ok(forecast.into_snapshot(format!("{latitude:.2},{longitude:.2}")))
    }

    fn search_cities(&self, query: &str) -> Result<Vec<CityCandidate>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        debug!("geocoding `{query}`");
        let body = self.get_text(
            &self.geocoding_url,
            &[
                ("name", query.to_owned()),
                ("count", SEARCH_LIMIT.to_string()),
            ],
        )?;
        let decoded: GeocodingResponse = serde_json::from_str(&body)?;
        Ok(decoded.results)
    }
}
