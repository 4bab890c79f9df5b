use url::Url;

/// What the redirect page found in its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackResult {
    Code(String),
    AuthError(String),
    /// The page was loaded without an authorization attempt coming back.
    Absent,
}

/// Reads `code` and `error` from the query string of `url`.
///
/// The fragment is ignored, empty values count as missing and `error` wins
/// over `code`.
pub fn parse_callback(url: &Url) -> CallbackResult {
    let mut code = None;
    let mut error = None;

    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "code" if code.is_none() => code = Some(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    match (error, code) {
        (Some(reason), _) => CallbackResult::AuthError(reason),
        (None, Some(code)) => CallbackResult::Code(code),
        (None, None) => CallbackResult::Absent,
    }
}
