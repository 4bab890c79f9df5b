use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    auth::{AuthorizeParams, BrowserPage, ExchangeClient, LoginFlow, SystemBrowser},
    config,
    error::AuthError,
    info, server,
    types::Session,
};

/// Runs a complete login and returns the session it produced.
///
/// 1. **Callback Server**: binds the redirect page on `SERVER_ADDRESS`
/// 2. **Redirect**: fresh PKCE pair, verifier into session storage, browser
///    to the authorization endpoint
/// 3. **Callback**: the redirect page parses the result and, given a code,
///    calls the exchange backend
/// 4. **Wait**: polls the flow until it reaches a terminal state or the
///    login timeout runs out
///
/// The session is never written to disk; every command logs in again.
pub async fn login() -> Result<Session, AuthError> {
    let redirect_uri = config::spotify_redirect_uri()?;
    let params = AuthorizeParams {
        client_id: config::spotify_client_id()?,
        redirect_uri: redirect_uri.clone(),
        scope: config::spotify_scope(),
    };
    let endpoint = config::spotify_apiauth_url()?;
    let exchange = ExchangeClient::new(config::exchange_token_url()?);
    let timeout = config::login_timeout()?;

    let flow = Arc::new(Mutex::new(LoginFlow::new(
        BrowserPage::new(redirect_uri.clone()),
        exchange,
    )));

    let listener = server::bind(config::server_addr()?).await?;
    let app = server::callback_router(Arc::clone(&flow), redirect_uri.path());
    let server_task = tokio::spawn(server::serve(listener, app));

    flow.lock().await.begin(&endpoint, &params, &SystemBrowser);
    info!("Waiting for Spotify to redirect back to {}", redirect_uri);

    let outcome = wait_for_outcome(flow, timeout).await;
    server_task.abort();
    outcome
}

/// Polls the shared flow once a second until the login attempt is over.
async fn wait_for_outcome(
    shared_flow: Arc<Mutex<LoginFlow>>,
    max_wait: Duration,
) -> Result<Session, AuthError> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let mut flow = shared_flow.lock().await;
        if let Some(outcome) = flow.take_outcome() {
            return outcome;
        }
        drop(flow);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Err(AuthError::TimedOut {
        secs: max_wait.as_secs(),
    })
}
