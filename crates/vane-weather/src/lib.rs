//! Weather and geocoding collaborators for Vane.
//!
//! Everything the navigation core treats as external lives here: the typed
//! Open-Meteo client, the debounced single-flight city search, and the
//! saved-default-city store. Navigating between tabs never touches any of
//! this; each screen owns its own fetches.

pub mod client;
pub mod model;
pub mod search;
pub mod store;

pub use client::{FetchError, OpenMeteoClient, WeatherProvider};
pub use model::{CityCandidate, WeatherSnapshot};
pub use search::{RequestToken, SearchDebouncer, SearchRequest, DEBOUNCE_MILLIS};
pub use store::{CityStore, SavedCity};
