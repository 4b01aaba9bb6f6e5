//! Google Places text search client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::PlaceCandidate;

/// Text search endpoint.
pub const SEARCH_URL: &str = "https://places.googleapis.com/v1/places:searchText";

/// Response field mask: id, display name, formatted address, place types.
pub const FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.types";

/// Location bias center: downtown Los Angeles.
pub const BIAS_CENTER: (f64, f64) = (34.0522, -118.2437);

/// Location bias radius in meters.
pub const BIAS_RADIUS_METERS: f64 = 50_000.0;

/// A places search collaborator the lookup engine can query.
///
/// The lookup engine only ever needs one operation, so test doubles can
/// script responses without any HTTP machinery.
#[async_trait]
pub trait PlaceSearch {
    /// Run one free-text search, returning every candidate match.
    async fn search_text(&self, query: &str) -> Result<Vec<PlaceCandidate>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    text_query: &'a str,
    location_bias: LocationBias,
}

#[derive(Serialize)]
struct LocationBias {
    circle: Circle,
}

#[derive(Serialize)]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct SearchResponse {
    places: Option<Vec<WirePlace>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlace {
    id: Option<String>,
    display_name: Option<WireText>,
    formatted_address: Option<String>,
    types: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct WireText {
    text: Option<String>,
}

impl From<WirePlace> for PlaceCandidate {
    fn from(place: WirePlace) -> Self {
        Self {
            id: place.id.unwrap_or_default(),
            name: place
                .display_name
                .and_then(|text| text.text)
                .unwrap_or_default(),
            address: place.formatted_address.unwrap_or_default(),
            types: place.types.unwrap_or_default(),
        }
    }
}

fn search_body(query: &str) -> SearchBody<'_> {
    SearchBody {
        text_query: query,
        location_bias: LocationBias {
            circle: Circle {
                center: LatLng {
                    latitude: BIAS_CENTER.0,
                    longitude: BIAS_CENTER.1,
                },
                radius: BIAS_RADIUS_METERS,
            },
        },
    }
}

/// HTTP client for the Places text search endpoint.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
}

impl PlacesClient {
    /// Create a client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PlaceSearch for PlacesClient {
    async fn search_text(&self, query: &str) -> Result<Vec<PlaceCandidate>> {
        let response = self
            .http
            .post(SEARCH_URL)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&search_body(query))
            .send()
            .await
            .map_err(|err| Error::search(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::search(format!(
                "search returned {status}: {}",
                detail.trim()
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|err| Error::search(format!("could not decode search response: {err}")))?;

        Ok(parsed
            .places
            .unwrap_or_default()
            .into_iter()
            .map(PlaceCandidate::from)
            .collect())
    }
}
