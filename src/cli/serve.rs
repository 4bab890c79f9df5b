use std::sync::Arc;

use crate::{
    api::{EnvClientSecret, ExchangeService},
    config, error, info, server, warning,
};

/// Runs the token exchange backend until interrupted.
///
/// The client secret is looked up per request, so the server starts (and
/// answers `500`) even when it is not configured yet.
pub async fn serve() {
    let addr = match config::exchange_server_addr() {
        Ok(addr) => addr,
        Err(e) => error!("{}", e),
    };
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };
    let redirect_uri = match config::spotify_redirect_uri() {
        Ok(uri) => uri,
        Err(e) => error!("{}", e),
    };

    if config::spotify_client_secret().is_none() {
        warning!("SPOTIFY_API_AUTH_CLIENT_SECRET is not set; exchanges will fail until it is");
    }

    let service = ExchangeService::new(
        config::spotify_apitoken_url(),
        client_id,
        redirect_uri.to_string(),
        Box::new(EnvClientSecret),
    );

    let listener = match server::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Token exchange listening on http://{}{}", addr, server::EXCHANGE_PATH);
    if let Err(e) = server::serve(listener, server::exchange_router(Arc::new(service))).await {
        error!("Token exchange server stopped: {}", e);
    }
}
