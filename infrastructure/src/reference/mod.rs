//! Reference corpus adapters.
//!
//! Provides infrastructure implementations of the
//! [`ReferenceCorpus`](wikibot_application::ReferenceCorpus) port.

mod wikipedia;

pub use wikipedia::WikipediaClient;
