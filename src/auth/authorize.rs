use url::Url;

use super::{
    page::{BrowserPage, Navigator, VERIFIER_KEY},
    pkce::PkcePair,
};

/// Client-side settings that go into every authorization request.
#[derive(Debug, Clone)]
pub struct AuthorizeParams {
    pub client_id: String,
    pub redirect_uri: Url,
    pub scope: String,
}

/// The query sent to the authorization endpoint. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    client_id: String,
    redirect_uri: String,
    scope: String,
    code_challenge: String,
}

impl AuthorizationRequest {
    pub const RESPONSE_TYPE: &'static str = "code";
    pub const CHALLENGE_METHOD: &'static str = "S256";

    pub fn new(params: &AuthorizeParams, code_challenge: &str) -> Self {
        Self {
            client_id: params.client_id.clone(),
            redirect_uri: params.redirect_uri.to_string(),
            scope: params.scope.clone(),
            code_challenge: code_challenge.to_string(),
        }
    }

    /// The authorization endpoint with all parameters encoded into its query.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", Self::RESPONSE_TYPE)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scope)
            .append_pair("code_challenge", &self.code_challenge)
            .append_pair("code_challenge_method", Self::CHALLENGE_METHOD);
        url
    }
}

/// Stores the verifier on the page and sends the browser to the authorization
/// server. Nothing comes back from here: the outcome arrives on the redirect URI.
pub fn redirect(
    endpoint: &Url,
    params: &AuthorizeParams,
    pkce: &PkcePair,
    page: &mut BrowserPage,
    navigator: &dyn Navigator,
) {
    page.storage_mut().set(VERIFIER_KEY, pkce.verifier.clone());

    let url = AuthorizationRequest::new(params, &pkce.challenge).to_url(endpoint);
    navigator.navigate(&url);
}
