//! get_article tool: look up a term on the reference corpus and return the
//! full text of the best-matching article.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use wikibot_application::ports::reference_corpus::{CorpusError, ReferenceCorpus};
use wikibot_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};

use super::registry::ToolHandler;

pub use wikibot_domain::tool::GET_ARTICLE;

/// Get the tool definition for get_article
pub fn get_article_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ARTICLE,
        "A tool to retrieve an up to date Wikipedia article.",
    )
    .with_parameter(
        ToolParameter::new(
            "search_term",
            "The search term to find a wikipedia article by title",
            true,
        )
        .with_type("string"),
    )
}

/// Handler that resolves a search term to an article.
///
/// The first search result is fetched as-is; ambiguous terms resolve to
/// whatever the search ranks highest.
pub struct ArticleTool {
    corpus: Arc<dyn ReferenceCorpus>,
}

impl ArticleTool {
    pub fn new(corpus: Arc<dyn ReferenceCorpus>) -> Self {
        Self { corpus }
    }

    async fn lookup(&self, term: &str) -> Result<(String, String), ToolError> {
        let titles = self.corpus.search(term).await.map_err(convert_corpus_error)?;

        let Some(title) = titles.into_iter().next() else {
            return Err(ToolError::not_found(format!("article for '{}'", term))
                .with_details("no search results"));
        };

        let content = self
            .corpus
            .fetch(&title)
            .await
            .map_err(convert_corpus_error)?;
        Ok((title, content))
    }
}

#[async_trait]
impl ToolHandler for ArticleTool {
    fn definition(&self) -> ToolDefinition {
        get_article_definition()
    }

    async fn handle(&self, call: &ToolCall) -> ToolResult {
        let start = Instant::now();

        let term = match call.require_string("search_term") {
            Ok(t) => t.trim(),
            Err(e) => return ToolResult::failure(GET_ARTICLE, ToolError::invalid_argument(e)),
        };
        if term.is_empty() {
            return ToolResult::failure(
                GET_ARTICLE,
                ToolError::invalid_argument("search_term cannot be empty"),
            );
        }

        match self.lookup(term).await {
            Ok((title, content)) => {
                info!(term, title = %title, bytes = content.len(), "Article retrieved");
                ToolResult::success(GET_ARTICLE, content)
                    .with_title(title)
                    .with_duration(start.elapsed().as_millis() as u64)
            }
            Err(e) => ToolResult::failure(GET_ARTICLE, e)
                .with_duration(start.elapsed().as_millis() as u64),
        }
    }
}

fn convert_corpus_error(err: CorpusError) -> ToolError {
    match err {
        CorpusError::NotFound(title) => ToolError::not_found(format!("article '{}'", title)),
        CorpusError::Timeout => ToolError::timeout("Wikipedia request"),
        other => ToolError::execution_failed(other.to_string()),
    }
}
