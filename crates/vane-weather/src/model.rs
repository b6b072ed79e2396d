//! Typed views of the Open-Meteo geocoding and forecast payloads.

use serde::{Deserialize, Serialize};

/// One geocoding autocomplete hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityCandidate {
    pub name: String,
    /// First-level administrative area, when the geocoder knows one.
    #[serde(default, rename = "admin1")]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityCandidate {
    /// Display label: "Name, Region, Country" with absent parts skipped.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        for part in [&self.region, &self.country].into_iter().flatten() {
            label.push_str(", ");
            label.push_str(part);
        }
        label
    }
}

/// Envelope of the geocoding search endpoint. A query with no hits comes
/// back without the `results` field at all.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<CityCandidate>,
}

/// Current weather for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Display name of the city this snapshot was fetched for.
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f32,
    pub wind_speed_kmh: f32,
    /// WMO weather interpretation code.
    pub weather_code: u8,
    /// Local time of the observation, as reported by the service.
    pub observed_at: String,
}

/// Wire shape of the forecast endpoint's `current_weather` block.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f32,
    pub windspeed: f32,
    pub weathercode: u8,
    pub time: String,
}

impl ForecastResponse {
    /// Fold the wire shape into a snapshot labeled with `city`.
    pub fn into_snapshot(self, city: String) -> WeatherSnapshot {
        WeatherSnapshot {
            city,
            latitude: self.latitude,
            longitude: self.longitude,
            temperature_c: self.current_weather.temperature,
            wind_speed_kmh: self.current_weather.windspeed,
            weather_code: self.current_weather.weathercode,
            observed_at: self.current_weather.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_geocoding_results() {
        let payload = r#"{
            "results": [
                {"name": "Lisbon", "latitude": 38.71667, "longitude": -9.13333,
                 "country": "Portugal", "admin1": "Lisbon"},
                {"name": "Lisbon", "latitude": 44.03, "longitude": -70.1,
                 "country": "United States", "admin1": "Maine"}
            ],
            "generationtime_ms": 0.7
        }"#;
        let decoded: GeocodingResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(decoded.results.len(), 2);
        assert_eq!(decoded.results[0].name, "Lisbon");
        assert_eq!(decoded.results[0].label(), "Lisbon, Lisbon, Portugal");
        assert_eq!(decoded.results[1].region.as_deref(), Some("Maine"));
    }

    #[test]
    fn empty_geocoding_envelope_decodes_to_no_results() {
        let decoded: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.3}"#).unwrap();
        assert!(decoded.results.is_empty());
    }

    #[test]
    fn decodes_forecast_into_snapshot() {
        let payload = r#"{
            "latitude": 52.52, "longitude": 13.42,
            "generationtime_ms": 0.2, "utc_offset_seconds": 7200,
            "current_weather": {
                "temperature": 18.3, "windspeed": 11.2, "winddirection": 230,
                "weathercode": 3, "is_day": 1, "time": "2024-06-01T15:00"
            }
        }"#;
        let decoded: ForecastResponse = serde_json::from_str(payload).unwrap();
        let snapshot = decoded.into_snapshot("Berlin".to_owned());
        assert_eq!(snapshot.city, "Berlin");
        assert_eq!(snapshot.temperature_c, 18.3);
        assert_eq!(snapshot.wind_speed_kmh, 11.2);
        assert_eq!(snapshot.weather_code, 3);
        assert_eq!(snapshot.observed_at, "2024-06-01T15:00");
    }

    #[test]
    fn label_skips_missing_parts() {
        let candidate = CityCandidate {
            name: "Null Island".to_owned(),
            region: None,
            country: None,
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(candidate.label(), "Null Island");
    }
}
