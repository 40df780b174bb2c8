//! Local pages served via the `hover://` custom protocol, and the
//! navigation guard.

use std::borrow::Cow;
use std::collections::HashMap;

pub const SCHEME: &str = "hover";

/// Pages bundled with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalPage {
    /// The drag bar above the content view.
    Chrome,
    /// First-run walkthrough shown in place of the content view.
    Onboarding,
}

impl LocalPage {
    pub fn path(self) -> &'static str {
        match self {
            LocalPage::Chrome => "chrome.html",
            LocalPage::Onboarding => "onboarding.html",
        }
    }

    pub fn url(self) -> String {
        format!("{SCHEME}://localhost/{}", self.path())
    }

    fn source(self) -> &'static str {
        match self {
            LocalPage::Chrome => include_str!("../assets/chrome.html"),
            LocalPage::Onboarding => include_str!("../assets/onboarding.html"),
        }
    }
}

/// Serves bundled pages from memory.
///
/// `hover://localhost/chrome.html` resolves to the chrome page; anything
/// not registered is a 404.
pub struct ContentProvider {
    assets: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// Provider preloaded with every [`LocalPage`].
    pub fn bundled() -> Self {
        let mut provider = Self {
            assets: HashMap::new(),
        };
        for page in [LocalPage::Chrome, LocalPage::Onboarding] {
            provider.add_asset(page.path(), "text/html", page.source());
        }
        provider
    }

    pub fn add_asset(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.assets.insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let clean = clean.trim_start_matches('/');
        let (mime, data) = self.assets.get(clean)?;
        Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    /// Strip the scheme and host from a `hover://` request URI.
    pub fn request_path(uri: &str) -> &str {
        uri.strip_prefix("hover://localhost/")
            .or_else(|| uri.strip_prefix("hover://localhost"))
            // WebView2 rewrites custom protocols to http://<scheme>.localhost
            .or_else(|| uri.strip_prefix("http://hover.localhost/"))
            .or_else(|| uri.strip_prefix("https://hover.localhost/"))
            .or_else(|| uri.strip_prefix("hover://"))
            .unwrap_or("")
    }
}

/// Which navigations a view accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Remote content: anything except local files.
    Remote,
    /// Local pages: only the bundled protocol.
    LocalOnly,
}

impl NavigationPolicy {
    pub fn allows(self, url: &str) -> bool {
        let lower = url.trim().to_ascii_lowercase();
        match self {
            NavigationPolicy::Remote => !lower.starts_with("file:"),
            NavigationPolicy::LocalOnly => {
                lower.starts_with("hover://")
                    || lower.starts_with("http://hover.localhost")
                    || lower.starts_with("https://hover.localhost")
                    || lower == "about:blank"
            }
        }
    }
}
