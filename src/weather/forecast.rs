use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    types::{Coordinates, ForecastPeriod, ForecastResponse, PointsResponse},
    warning,
};

use super::WeatherClient;

impl WeatherClient {
    /// Looks up the NWS forecast endpoint for a pair of coordinates.
    ///
    /// Returns `None` (after logging) on HTTP or network errors, or when the
    /// point has no forecast office, e.g. coordinates outside the US.
    pub async fn gridpoint(&self, coords: Coordinates) -> Option<String> {
        // The points endpoint redirects for more than 4 decimal places
        let url = format!(
            "{}/points/{:.4},{:.4}",
            self.nws_url, coords.latitude, coords.longitude
        );

        let points = self.fetch_nws::<PointsResponse>(&url).await?;
        if points.properties.forecast.is_none() {
            warning!("No forecast office found for {}", url);
        }
        points.properties.forecast
    }

    /// Fetches all upcoming forecast periods for a place, nearest first.
    ///
    /// Short forecasts are lowercased. `Ok(None)` means "no data": the place
    /// could not be geocoded or the NWS did not answer.
    pub async fn forecast_periods(&self, place: &str) -> Result<Option<Vec<ForecastPeriod>>> {
        let Some(coords) = self.geocode(place).await? else {
            warning!("No coordinates found for {}", place);
            return Ok(None);
        };

        let Some(forecast_url) = self.gridpoint(coords).await else {
            return Ok(None);
        };

        let Some(forecast) = self.fetch_nws::<ForecastResponse>(&forecast_url).await else {
            return Ok(None);
        };

        let periods = forecast
            .properties
            .periods
            .into_iter()
            .map(|p| ForecastPeriod {
                name: p.name,
                short_forecast: p.short_forecast.to_lowercase(),
            })
            .collect();

        Ok(Some(periods))
    }

    /// Short forecast of the nearest period, e.g. `"light rain"`.
    pub async fn short_forecast(&self, place: &str) -> Result<Option<String>> {
        let periods = self.forecast_periods(place).await?;
        Ok(periods.and_then(|p| p.into_iter().next().map(|p| p.short_forecast)))
    }

    async fn fetch_nws<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warning!("Failed to reach NWS server. Reason: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warning!(
                "Error trying to retrieve data from NWS. Error code: {}",
                response.status().as_u16()
            );
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warning!("Unexpected response from NWS: {}", e);
                None
            }
        }
    }
}
