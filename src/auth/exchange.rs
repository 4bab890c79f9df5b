use reqwest::Client;
use url::Url;

use super::page::{BrowserPage, VERIFIER_KEY};
use crate::{
    error::ExchangeError,
    types::{AccessToken, ExchangeErrorBody, ExchangeRequest, ExchangeResponse},
};

/// Talks to the token exchange backend, which holds the client secret.
///
/// The upstream token endpoint is never called from here.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    http: Client,
    endpoint: Url,
}

impl ExchangeClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Trades `code` and the verifier stored on `page` for an access token.
    ///
    /// Fails with [`ExchangeError::MissingVerifier`] without touching the
    /// network when the verifier is gone. Once a request was sent the verifier
    /// is erased whatever the outcome. On success the query is also stripped
    /// from the page location so a reload cannot submit the code again.
    pub async fn exchange_token(
        &self,
        code: &str,
        page: &mut BrowserPage,
    ) -> Result<AccessToken, ExchangeError> {
        let code_verifier = page
            .storage()
            .get(VERIFIER_KEY)
            .ok_or(ExchangeError::MissingVerifier)?
            .to_string();

        let request = ExchangeRequest {
            code: code.to_string(),
            code_verifier,
        };
        let result = self.send(&request).await;
        page.storage_mut().remove(VERIFIER_KEY);

        let token = result?;
        let mut clean = page.location().clone();
        clean.set_query(None);
        clean.set_fragment(None);
        page.replace_state(clean);

        Ok(token)
    }

    async fn send(&self, request: &ExchangeRequest) -> Result<AccessToken, ExchangeError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<ExchangeErrorBody>()
                .await
                .unwrap_or_default();
            let reason = if body.error.is_empty() {
                "Token exchange failed".to_string()
            } else {
                body.error
            };

            return Err(ExchangeError::Rejected {
                status: status.as_u16(),
                reason,
                description: body.error_description.unwrap_or_default(),
            });
        }

        let json = response.json::<ExchangeResponse>().await?;
        Ok(AccessToken::new(json.access_token, json.expires_in))
    }
}
