//! Tool implementations
//!
//! - [`article`]: the `get_article` tool backed by a
//!   [`ReferenceCorpus`](wikibot_application::ReferenceCorpus)
//! - [`registry`]: name → (declaration, handler) table implementing
//!   [`ToolExecutorPort`](wikibot_application::ToolExecutorPort)
//! - [`schema`]: JSON Schema conversion of tool declarations

pub mod article;
pub mod registry;
pub mod schema;

pub use article::{ArticleTool, GET_ARTICLE, get_article_definition};
pub use registry::{ToolHandler, ToolRegistry};
pub use schema::JsonSchemaToolConverter;

use std::sync::Arc;
use wikibot_application::ports::reference_corpus::ReferenceCorpus;

/// Registry with every built-in tool, reading articles from `corpus`.
pub fn default_registry(corpus: Arc<dyn ReferenceCorpus>) -> ToolRegistry {
    ToolRegistry::new().register(ArticleTool::new(corpus))
}
