use crate::{
    error::{Error, Result},
    types::{Coordinates, GeocodeResult},
};

use super::WeatherClient;

impl WeatherClient {
    /// Resolves a place name to coordinates.
    ///
    /// Returns `Ok(None)` when the geocoder has no match (or the place name is
    /// blank). Transport failures and non-2xx responses are errors; there are
    /// no retries.
    pub async fn geocode(&self, place: &str) -> Result<Option<Coordinates>> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/search", self.geocode_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        let results = response.json::<Vec<GeocodeResult>>().await?;
        let Some(first) = results.into_iter().next() else {
            return Ok(None);
        };

        // Nominatim returns coordinates as strings
        match (first.lat.parse::<f64>(), first.lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => Ok(Some(Coordinates {
                latitude,
                longitude,
            })),
            _ => Ok(None),
        }
    }
}
