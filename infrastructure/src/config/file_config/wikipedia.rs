//! Encyclopedia client configuration from TOML (`[wikipedia]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikipediaConfig {
    /// MediaWiki Action API endpoint
    pub api_url: String,
    /// Number of search results requested
    pub search_limit: u32,
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FileWikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            search_limit: 10,
            timeout_seconds: 30,
            user_agent: concat!("wikibot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
