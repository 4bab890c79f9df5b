use std::{net::SocketAddr, sync::Arc};

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    Res,
    api::{self, ExchangeService},
    auth::LoginFlow,
};

/// Path of the exchange endpoint on the backend.
pub const EXCHANGE_PATH: &str = "/api/exchange-token";

/// Routes of the local redirect page. `callback_path` is the path of the
/// configured redirect URI.
pub fn callback_router(flow: Arc<Mutex<LoginFlow>>, callback_path: &str) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(callback_path, get(api::callback).layer(Extension(flow)))
}

/// Routes of the token exchange backend.
pub fn exchange_router(service: Arc<ExchangeService>) -> Router {
    Router::new().route("/health", get(api::health)).route(
        EXCHANGE_PATH,
        post(api::exchange_token)
            .fallback(api::method_not_allowed)
            .layer(Extension(service)),
    )
}

pub async fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    TcpListener::bind(addr).await
}

/// Serves `app` on `listener` until the task is dropped or aborted.
pub async fn serve(listener: TcpListener, app: Router) -> Res<()> {
    axum::serve(listener, app).await?;
    Ok(())
}
