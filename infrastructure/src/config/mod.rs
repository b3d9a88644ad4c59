//! Configuration file loading for wikibot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `WIKIBOT_*` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./wikibot.toml` or `./.wikibot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wikibot/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top of the result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileBedrockConfig, FileConfig, FileLoggingConfig,
    FileReplConfig, FileWikipediaConfig,
};
pub use loader::ConfigLoader;
