use tabled::Table;

use crate::{error, types::ForecastTableRow, warning, weather::WeatherClient};

use super::spinner;

pub async fn forecast(place: String) {
    let client = match WeatherClient::new() {
        Ok(c) => c,
        Err(e) => error!("Cannot create weather client. Err: {}", e),
    };

    let pb = spinner(&format!("Fetching forecast for {}...", place));
    let result = client.forecast_periods(&place).await;
    pb.finish_and_clear();

    match result {
        Ok(Some(periods)) => {
            let rows: Vec<ForecastTableRow> = periods
                .into_iter()
                .map(|p| ForecastTableRow {
                    period: p.name.unwrap_or_default(),
                    forecast: p.short_forecast,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Ok(None) => warning!("No forecast data for {}", place),
        Err(e) => error!("Failed to geocode {}. Err: {}", place, e),
    }
}
