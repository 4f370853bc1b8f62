//! Configuration for provider routing defaults and API keys.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Complete router configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Provider defaults and API keys
    pub providers: ProviderSettings,
}

/// Provider defaults and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider used when no specialization rule or explicit preference applies
    pub default_provider: String,
    /// API keys for the concrete providers
    pub api_keys: ApiKeys,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            default_provider: "gpt4".to_owned(),
            api_keys: ApiKeys::default(),
        }
    }
}

/// API keys for the concrete providers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeys {
    /// Anthropic API key for Claude
    pub claude_api_key: Option<String>,
    /// `OpenAI` API key for GPT-4
    pub openai_api_key: Option<String>,
    /// xAI API key for Grok
    pub xai_api_key: Option<String>,
}

impl RouterConfig {
    /// Get the default config directory path (`~/.appforge`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".appforge"))
    }

    /// Get the default config file path (`~/.appforge/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location (`~/.appforge/config.toml`)
    /// If the config doesn't exist, creates it with default values
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        tracing::debug!(
            "Loaded config from {:?}: default_provider={}, claude_api_key={}, openai_api_key={}, xai_api_key={}",
            path,
            config.providers.default_provider,
            if config.providers.api_keys.claude_api_key.is_some() {
                "present"
            } else {
                "missing"
            },
            if config.providers.api_keys.openai_api_key.is_some() {
                "present"
            } else {
                "missing"
            },
            if config.providers.api_keys.xai_api_key.is_some() {
                "present"
            } else {
                "missing"
            }
        );

        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|error| Error::Config(format!("Failed to serialize config: {error}")))?;

        let header = "# AppForge Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))?;

        Ok(())
    }

    /// Get API key for a provider, checking config first, then environment variables
    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        match provider {
            "claude" => self
                .providers
                .api_keys
                .claude_api_key
                .clone()
                .or_else(|| env::var("CLAUDE_API_KEY").ok()),
            "gpt4" => self
                .providers
                .api_keys
                .openai_api_key
                .clone()
                .or_else(|| env::var("OPENAI_API_KEY").ok()),
            "grok" => self
                .providers
                .api_keys
                .xai_api_key
                .clone()
                .or_else(|| env::var("XAI_API_KEY").ok()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, to_string};

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.providers.default_provider, "gpt4");
        assert!(config.providers.api_keys.claude_api_key.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = RouterConfig::default();
        let json = match to_string(&config) {
            Ok(serialized_json) => serialized_json,
            Err(error) => panic!("serialize failed: {error}"),
        };
        let deserialized: RouterConfig = match from_str(&json) {
            Ok(value) => value,
            Err(error) => panic!("deserialize failed: {error}"),
        };
        assert_eq!(
            config.providers.default_provider,
            deserialized.providers.default_provider
        );
    }

    #[test]
    fn test_api_key_loading_from_toml() {
        use std::io::Write as _;
        use tempfile::NamedTempFile;

        let toml_content = r#"
[providers]
default_provider = "claude"

[providers.api_keys]
claude_api_key = "test_claude_key_123"
openai_api_key = "test_openai_key_456"
xai_api_key = "test_xai_key_789"
"#;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write to temp file");

        let config = RouterConfig::load_from_file(temp_file.path())
            .expect("Failed to load config from temp file");

        assert_eq!(config.providers.default_provider, "claude");
        assert_eq!(
            config.providers.api_keys.claude_api_key,
            Some("test_claude_key_123".to_owned())
        );

        assert_eq!(
            config.get_api_key("claude"),
            Some("test_claude_key_123".to_owned())
        );
        assert_eq!(
            config.get_api_key("gpt4"),
            Some("test_openai_key_456".to_owned())
        );
        assert_eq!(
            config.get_api_key("grok"),
            Some("test_xai_key_789".to_owned())
        );
        assert_eq!(config.get_api_key("unknown"), None);
    }

    #[test]
    fn test_save_and_reload() {
        use tempfile::TempDir;

        let temp = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp.path().join("nested").join("config.toml");

        let mut config = RouterConfig::default();
        config.providers.default_provider = "grok".to_owned();
        config.providers.api_keys.xai_api_key = Some("saved_key".to_owned());

        config
            .save_to_file(&config_path)
            .expect("Failed to save config");

        let written = fs::read_to_string(&config_path).expect("Failed to read config back");
        assert!(written.starts_with("# AppForge Configuration File"));

        let reloaded =
            RouterConfig::load_from_file(&config_path).expect("Failed to reload config");
        assert_eq!(reloaded.providers.default_provider, "grok");
        assert_eq!(
            reloaded.providers.api_keys.xai_api_key,
            Some("saved_key".to_owned())
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        use std::io::Write as _;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"this is not toml [")
            .expect("Failed to write to temp file");

        let error = match RouterConfig::load_from_file(temp_file.path()) {
            Ok(_) => panic!("expected invalid TOML to fail"),
            Err(error) => error,
        };
        assert!(error.is_config());
    }
}
