use axum::{
    Extension, Router,
    routing::get,
};
use std::{net::SocketAddr, str::FromStr};

use crate::{
    api, config,
    error::{Error, Result},
    info,
    types::SessionState,
};

/// Routes served by the application.
pub fn router(state: SessionState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/results", get(api::results_form).post(api::results))
        .layer(Extension(state))
}

pub async fn start_api_server(state: SessionState) -> Result<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| Error::Config(format!("Failed to parse server address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
