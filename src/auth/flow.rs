use url::Url;

use super::{
    authorize::{self, AuthorizeParams},
    callback::{self, CallbackResult},
    exchange::ExchangeClient,
    page::{BrowserPage, Navigator, VERIFIER_KEY},
    pkce::PkcePair,
};
use crate::{error::AuthError, types::Session};

#[derive(Debug)]
pub enum LoginState {
    Idle,
    AwaitingCallback,
    Authenticated(Session),
    Failed(AuthError),
}

impl LoginState {
    /// `Authenticated` and `Failed` end a login attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoginState::Authenticated(_) | LoginState::Failed(_))
    }
}

/// One login: the page it runs on, where it stands, and the exchange backend.
///
/// `Idle -> AwaitingCallback -> Authenticated | Failed`. Starting over from
/// `Failed` begins a brand new attempt with a new PKCE pair.
#[derive(Debug)]
pub struct LoginFlow {
    page: BrowserPage,
    state: LoginState,
    exchange: ExchangeClient,
}

impl LoginFlow {
    pub fn new(page: BrowserPage, exchange: ExchangeClient) -> Self {
        Self {
            page,
            state: LoginState::Idle,
            exchange,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn page(&self) -> &BrowserPage {
        &self.page
    }

    /// Generates a fresh PKCE pair and hands the browser to the authorization server.
    pub fn begin(&mut self, endpoint: &Url, params: &AuthorizeParams, navigator: &dyn Navigator) {
        let pkce = PkcePair::generate();
        authorize::redirect(endpoint, params, &pkce, &mut self.page, navigator);
        self.state = LoginState::AwaitingCallback;
    }

    /// The browser landed on `url`.
    pub fn load(&mut self, url: Url) {
        self.page.load(url);
    }

    /// Runs the current page location through the callback parser and moves
    /// the state machine accordingly.
    ///
    /// A finished attempt ignores further page loads, so a refresh of the
    /// redirect URI cannot overwrite its outcome.
    pub async fn handle_callback(&mut self) -> &LoginState {
        if self.state.is_terminal() {
            return &self.state;
        }

        match callback::parse_callback(self.page.location()) {
            CallbackResult::Absent => {}
            CallbackResult::AuthError(reason) => {
                self.page.storage_mut().remove(VERIFIER_KEY);
                self.state = LoginState::Failed(AuthError::AuthorizationDenied { reason });
            }
            CallbackResult::Code(code) => {
                self.state = match self.exchange.exchange_token(&code, &mut self.page).await {
                    Ok(token) => LoginState::Authenticated(Session::new(token)),
                    Err(e) => LoginState::Failed(e.into()),
                };
            }
        }

        &self.state
    }

    /// Moves the outcome out once the attempt is over, leaving the flow `Idle`.
    pub fn take_outcome(&mut self) -> Option<Result<Session, AuthError>> {
        if !self.state.is_terminal() {
            return None;
        }

        match std::mem::replace(&mut self.state, LoginState::Idle) {
            LoginState::Authenticated(session) => Some(Ok(session)),
            LoginState::Failed(e) => Some(Err(e)),
            _ => None,
        }
    }
}
