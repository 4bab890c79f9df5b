use serde_json::json;
use spotop::{
    auth::{BrowserPage, CallbackResult, ExchangeClient, VERIFIER_KEY, parse_callback},
    error::ExchangeError,
    types::AccessToken,
};
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn exchange_client(server: &MockServer) -> ExchangeClient {
    ExchangeClient::new(Url::parse(&format!("{}/api/exchange-token", server.uri())).unwrap())
}

fn callback_page(query: &str, verifier: Option<&str>) -> BrowserPage {
    let mut page = BrowserPage::new(
        Url::parse(&format!("http://127.0.0.1:8888/callback{}", query)).unwrap(),
    );
    if let Some(v) = verifier {
        page.storage_mut().set(VERIFIER_KEY, v.to_string());
    }
    page
}

#[tokio::test]
async fn test_missing_verifier_fails_without_network() {
    let server = MockServer::start().await;
    let client = exchange_client(&server);
    let mut page = callback_page("?code=abc", None);

    let result = client.exchange_token("abc", &mut page).await;

    assert!(matches!(result, Err(ExchangeError::MissingVerifier)));
    assert!(server.received_requests().await.unwrap().is_empty());
    // The code stays visible; nothing was attempted
    assert_eq!(
        parse_callback(page.location()),
        CallbackResult::Code("abc".to_string())
    );
}

#[tokio::test]
async fn test_successful_exchange_cleans_up() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/exchange-token"))
        .and(body_json(json!({ "code": "abc", "code_verifier": "verifier-123" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "tok-1", "expires_in": 3600 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = exchange_client(&server);
    let mut page = callback_page("?code=abc", Some("verifier-123"));

    let token = client.exchange_token("abc", &mut page).await.unwrap();

    assert_eq!(token.secret(), "tok-1");
    assert_eq!(token.expires_in(), 3600);
    assert!(!token.is_expired());
    assert!(page.storage().get(VERIFIER_KEY).is_none());
    assert_eq!(page.location().as_str(), "http://127.0.0.1:8888/callback");
    assert_eq!(parse_callback(page.location()), CallbackResult::Absent);
}

#[tokio::test]
async fn test_rejected_exchange_reports_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/exchange-token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code",
            "details": { "error": "invalid_grant" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = exchange_client(&server);
    let mut page = callback_page("?code=used", Some("verifier-123"));

    match client.exchange_token("used", &mut page).await {
        Err(ExchangeError::Rejected {
            status,
            reason,
            description,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(reason, "invalid_grant");
            assert_eq!(description, "Invalid authorization code");
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    // The attempt is over; a retry has to start from a new pair
    assert!(page.storage().get(VERIFIER_KEY).is_none());
}

#[tokio::test]
async fn test_rejected_exchange_with_unreadable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = exchange_client(&server);
    let mut page = callback_page("?code=abc", Some("verifier-123"));

    match client.exchange_token("abc", &mut page).await {
        Err(ExchangeError::Rejected {
            status,
            reason,
            description,
        }) => {
            assert_eq!(status, 502);
            assert_eq!(reason, "Token exchange failed");
            assert!(description.is_empty());
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_configuration_error_is_not_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Server configuration error: Client secret not found"
        })))
        .mount(&server)
        .await;

    let client = exchange_client(&server);
    let mut page = callback_page("?code=abc", Some("verifier-123"));

    match client.exchange_token("abc", &mut page).await {
        Err(ExchangeError::Rejected { status, reason, .. }) => {
            assert_eq!(status, 500);
            assert!(reason.starts_with("Server configuration error"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_access_token_debug_is_redacted() {
    let token = AccessToken::new("very-secret-value".to_string(), 3600);
    let debug = format!("{:?}", token);
    assert!(!debug.contains("very-secret-value"));
    assert!(debug.contains("redacted"));
}

#[test]
fn test_access_token_expiry() {
    assert!(AccessToken::new("t".to_string(), 0).is_expired());
    assert!(!AccessToken::new("t".to_string(), 3600).is_expired());
}
