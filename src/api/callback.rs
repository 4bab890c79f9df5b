use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use tokio::sync::Mutex;

use crate::{
    auth::{LoginFlow, LoginState},
    error::AuthError,
    warning,
};

/// The redirect page. Every hit is a page load of the redirect URI carrying
/// whatever query the authorization server appended.
pub async fn callback(
    RawQuery(query): RawQuery,
    Extension(shared_flow): Extension<Arc<Mutex<LoginFlow>>>,
) -> Html<&'static str> {
    let mut flow = shared_flow.lock().await;

    let mut url = flow.page().location().clone();
    url.set_query(query.as_deref());
    flow.load(url);

    match flow.handle_callback().await {
        LoginState::Authenticated(_) => {
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        LoginState::Failed(AuthError::AuthorizationDenied { reason }) => {
            warning!("Authorization error: {}", reason);
            Html("<h4>Authorization denied.</h4><p>Run the command again to retry.</p>")
        }
        LoginState::Failed(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4><p>Run the command again to retry.</p>")
        }
        LoginState::Idle | LoginState::AwaitingCallback => {
            Html("<h4>Missing authorization code.</h4>")
        }
    }
}
