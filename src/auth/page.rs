use std::collections::HashMap;

use url::Url;

use crate::warning;

/// Key under which the PKCE verifier waits for the callback.
pub const VERIFIER_KEY: &str = "spotify_code_verifier";

/// Session-scoped key/value storage. Kept in memory for the life of the page
/// and never written anywhere else.
#[derive(Debug, Default)]
pub struct SessionStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

/// The page hosting the login: its visible location and its session storage.
#[derive(Debug)]
pub struct BrowserPage {
    location: Url,
    storage: SessionStorage,
}

impl BrowserPage {
    pub fn new(location: Url) -> Self {
        Self {
            location,
            storage: SessionStorage::new(),
        }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// A page load at `url`, e.g. the authorization server sending the user back.
    /// Session storage survives it.
    pub fn load(&mut self, url: Url) {
        self.location = url;
    }

    /// Swaps the visible location without loading anything.
    pub fn replace_state(&mut self, url: Url) {
        self.location = url;
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut SessionStorage {
        &mut self.storage
    }
}

/// Top-level navigation away from the current page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url);
}

/// Opens the URL in the user's default browser.
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &Url) {
        if webbrowser::open(url.as_str()).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }
}
