//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides (`WIKIBOT_AGENT__MAX_TOOL_TURNS=3`)
const ENV_PREFIX: &str = "WIKIBOT_";

const PROJECT_CONFIG_FILES: [&str; 2] = ["wikibot.toml", ".wikibot.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `WIKIBOT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./wikibot.toml` or `./.wikibot.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/wikibot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Build the merged figment without extracting it.
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/wikibot/config.toml if set,
    /// otherwise falls back to ~/.config/wikibot/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wikibot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] --config: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./wikibot.toml or ./.wikibot.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.agent.max_tool_turns, 10);
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("wikibot/config.toml"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[agent]\nmax_tool_turns = 3\n\n[wikipedia]\nsearch_limit = 1\n",
        )
        .unwrap();

        let config: FileConfig = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(&path))
            .extract()
            .unwrap();

        assert_eq!(config.agent.max_tool_turns, 3);
        assert_eq!(config.wikipedia.search_limit, 1);
        // Untouched sections keep their defaults
        assert_eq!(config.bedrock.max_tokens, 4096);
    }

    #[test]
    fn test_later_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.toml");
        let high = dir.path().join("high.toml");
        fs::write(&low, "[bedrock]\nmodel = \"claude-3.5-haiku\"\nmax_tokens = 100\n").unwrap();
        fs::write(&high, "[bedrock]\nmodel = \"claude-sonnet-4\"\n").unwrap();

        let config: FileConfig = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(&low))
            .merge(Toml::file(&high))
            .extract()
            .unwrap();

        assert_eq!(config.bedrock.model, "claude-sonnet-4");
        assert_eq!(config.bedrock.max_tokens, 100);
    }

    #[test]
    fn test_project_config_lookup_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        fs::write(dir.path().join(".wikibot.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join(".wikibot.toml"))
        );

        fs::write(dir.path().join("wikibot.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("wikibot.toml"))
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[agent]\nmax_tool_turns = \"many\"\n").unwrap();

        let result: Result<FileConfig, _> = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(&path))
            .extract();
        assert!(result.is_err());
    }
}
