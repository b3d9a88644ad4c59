//! Wikipedia client over the MediaWiki Action API.
//!
//! - search: `action=query&list=search`, titles in relevance order
//! - fetch: `action=query&prop=extracts&explaintext`, plain text of exactly
//!   the given title (no `redirects`, no suggestion)

use crate::config::FileWikipediaConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use wikibot_application::ports::reference_corpus::{CorpusError, ReferenceCorpus};

pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
    search_limit: u32,
}

impl WikipediaClient {
    pub fn new(config: &FileWikipediaConfig) -> Result<Self, CorpusError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CorpusError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            search_limit: config.search_limit,
        })
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<String, CorpusError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(convert_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorpusError::RequestFailed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response.text().await.map_err(convert_reqwest_error)
    }
}

#[async_trait]
impl ReferenceCorpus for WikipediaClient {
    async fn search(&self, term: &str) -> Result<Vec<String>, CorpusError> {
        let limit = self.search_limit.to_string();
        let body = self
            .query(&[
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", &limit),
                ("srprop", ""),
            ])
            .await?;

        let titles = parse_search_response(&body)?;
        debug!(term, results = titles.len(), "Wikipedia search");
        Ok(titles)
    }

    async fn fetch(&self, title: &str) -> Result<String, CorpusError> {
        let body = self
            .query(&[
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("titles", title),
            ])
            .await?;

        let text = parse_extract_response(&body, title)?;
        debug!(title, bytes = text.len(), "Wikipedia fetch");
        Ok(text)
    }
}

fn convert_reqwest_error(err: reqwest::Error) -> CorpusError {
    if err.is_timeout() {
        CorpusError::Timeout
    } else {
        CorpusError::RequestFailed(err.to_string())
    }
}

// ─── Wire format ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiResponse<Q> {
    query: Option<Q>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
}

fn decode<Q: serde::de::DeserializeOwned>(body: &str) -> Result<Option<Q>, CorpusError> {
    let response: ApiResponse<Q> =
        serde_json::from_str(body).map_err(|e| CorpusError::InvalidResponse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(CorpusError::RequestFailed(format!(
            "MediaWiki error {}: {}",
            error.code, error.info
        )));
    }

    Ok(response.query)
}

/// Titles from a `list=search` response, best match first.
fn parse_search_response(body: &str) -> Result<Vec<String>, CorpusError> {
    let query: Option<SearchQuery> = decode(body)?;
    Ok(query
        .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
        .unwrap_or_default())
}

/// Plain text of the single page in a `prop=extracts` response.
fn parse_extract_response(body: &str, title: &str) -> Result<String, CorpusError> {
    let query: Option<PagesQuery> = decode(body)?;
    let page = query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| CorpusError::InvalidResponse("response contains no page".to_string()))?;

    if page.missing || page.invalid {
        return Err(CorpusError::NotFound(title.to_string()));
    }

    page.extract
        .ok_or_else(|| CorpusError::InvalidResponse(format!("no extract for '{}'", title)))
}
