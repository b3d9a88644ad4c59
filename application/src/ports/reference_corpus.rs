//! Reference corpus port.
//!
//! Defines the interface to the encyclopedia the `get_article` tool reads
//! from. Infrastructure adapters implement this over a concrete service
//! (e.g. the MediaWiki Action API).

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during corpus lookups.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The exact title does not exist
    #[error("Article not found: {0}")]
    NotFound(String),

    /// The request could not be completed (network, HTTP status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service answered with something that could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Port for searching and reading reference articles.
#[async_trait]
pub trait ReferenceCorpus: Send + Sync {
    /// Search article titles; best match first.
    async fn search(&self, term: &str) -> Result<Vec<String>, CorpusError>;

    /// Fetch the full plain-text content of exactly this title.
    ///
    /// No suggestion or redirect resolution takes place.
    async fn fetch(&self, title: &str) -> Result<String, CorpusError>;
}
