//! Remote content settings.

use serde::{Deserialize, Serialize};

/// What every content view loads and how it identifies itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Address loaded into new content views.
    pub url: String,
    /// User agent presented by content views.
    pub user_agent: String,
    /// Directory name of the storage partition shared by all views.
    pub partition: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            url: "https://gemini.google.com/app".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into(),
            partition: "gemini-session".into(),
        }
    }
}
