use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{config, types::ExchangeResponse, warning};

/// Where the backend gets the client secret from. Asked on every request so a
/// secret added or removed at runtime takes effect immediately.
pub trait ClientSecret: Send + Sync {
    fn client_secret(&self) -> Option<String>;
}

/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`.
pub struct EnvClientSecret;

impl ClientSecret for EnvClientSecret {
    fn client_secret(&self) -> Option<String> {
        config::spotify_client_secret()
    }
}

/// A fixed secret, or none at all.
pub struct StaticClientSecret(pub Option<String>);

impl ClientSecret for StaticClientSecret {
    fn client_secret(&self) -> Option<String> {
        self.0.clone().filter(|s| !s.trim().is_empty())
    }
}

/// The confidential half of the login: holds the client secret and calls the
/// upstream token endpoint on behalf of the CLI.
pub struct ExchangeService {
    http: Client,
    token_url: String,
    client_id: String,
    redirect_uri: String,
    secret: Box<dyn ClientSecret>,
}

impl ExchangeService {
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        secret: Box<dyn ClientSecret>,
    ) -> Self {
        Self {
            http: Client::new(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            secret,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExchangeTokenBody {
    code: Option<String>,
    code_verifier: Option<String>,
}

type JsonReply = (StatusCode, Json<Value>);

fn reply(status: StatusCode, body: Value) -> JsonReply {
    (status, Json(body))
}

fn internal_error() -> JsonReply {
    reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error" }),
    )
}

pub async fn method_not_allowed() -> JsonReply {
    reply(
        StatusCode::METHOD_NOT_ALLOWED,
        json!({ "error": "Method not allowed" }),
    )
}

/// `POST {code, code_verifier}` -> `{access_token, expires_in}`.
///
/// A missing client secret is always a `500`, whatever the request looked
/// like. Upstream refusals keep the upstream status.
pub async fn exchange_token(
    Extension(service): Extension<Arc<ExchangeService>>,
    payload: Result<Json<ExchangeTokenBody>, JsonRejection>,
) -> JsonReply {
    let Some(client_secret) = service.secret.client_secret() else {
        warning!("Token exchange refused: client secret is not configured");
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Server configuration error: Client secret not found" }),
        );
    };

    let (code, code_verifier) = match payload {
        Ok(Json(ExchangeTokenBody {
            code: Some(code),
            code_verifier: Some(code_verifier),
        })) if !code.is_empty() && !code_verifier.is_empty() => (code, code_verifier),
        _ => {
            return reply(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing code or code_verifier" }),
            );
        }
    };

    let response = service
        .http
        .post(&service.token_url)
        .basic_auth(&service.client_id, Some(client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", service.redirect_uri.as_str()),
            ("code_verifier", code_verifier.as_str()),
        ])
        .send()
        .await;

    let response = match response {
        Ok(r) => r,
        Err(e) => {
            warning!("Token endpoint unreachable: {}", e);
            return internal_error();
        }
    };

    let status = response.status();
    let data: Value = match response.json().await {
        Ok(v) => v,
        Err(e) => {
            warning!("Token endpoint returned an unreadable body: {}", e);
            return internal_error();
        }
    };

    if !status.is_success() {
        warning!("Token endpoint refused the code with status {}", status);
        let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        return reply(
            status,
            json!({
                "error": data["error"].as_str().unwrap_or("Token exchange failed"),
                "error_description": data["error_description"].as_str().unwrap_or(""),
                "details": data,
            }),
        );
    }

    match serde_json::from_value::<ExchangeResponse>(data) {
        Ok(token) => reply(
            StatusCode::OK,
            json!({
                "access_token": token.access_token,
                "expires_in": token.expires_in,
            }),
        ),
        Err(e) => {
            warning!("Token endpoint returned an unexpected body: {}", e);
            internal_error()
        }
    }
}
