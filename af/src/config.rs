//! AppForge configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main AppForge configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Session workspace configuration
    pub workspace: WorkspaceConfig,

    /// Simulated execution configuration
    pub execution: ExecutionConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Call this early in startup to fail fast with clear error messages.
    /// Only commands that reach the provider need the API key, so callers
    /// validate right before creating a client.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .appforge.yml
        let local_config = PathBuf::from(".appforge.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/appforge/appforge.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("appforge").join("appforge.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-output-tokens")]
    pub max_output_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash-preview-04-17".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_output_tokens: 8192,
            timeout_ms: 120_000,
        }
    }
}

/// Session workspace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Base path under which session working directories are derived
    #[serde(rename = "base-path")]
    pub base_path: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            base_path: "/tmp/appforge/sessions".to_string(),
        }
    }
}

/// Simulated execution configuration
///
/// The delays stand in for real subprocess/filesystem latency; a real
/// backend ignores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Artificial delay per simulated command, in milliseconds
    #[serde(rename = "command-delay-ms")]
    pub command_delay_ms: u64,

    /// Artificial delay per simulated file write, in milliseconds
    #[serde(rename = "file-delay-ms")]
    pub file_delay_ms: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            command_delay_ms: 50,
            file_delay_ms: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.workspace.base_path, "/tmp/appforge/sessions");
        assert_eq!(config.execution.command_delay_ms, 50);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: gemini
  model: gemini-2.0-pro
  api-key-env: MY_API_KEY
  base-url: https://example.com/v1beta
  max-output-tokens: 4096
  timeout-ms: 60000

workspace:
  base-path: /var/lib/appforge

execution:
  command-delay-ms: 5
  file-delay-ms: 1
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-2.0-pro");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_output_tokens, 4096);
        assert_eq!(config.workspace.base_path, "/var/lib/appforge");
        assert_eq!(config.execution.command_delay_ms, 5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gemini-experimental
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-experimental");
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.workspace.base_path, "/tmp/appforge/sessions");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "workspace:\n  base-path: /srv/forge\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.workspace.base_path, "/srv/forge");
    }

    #[test]
    fn test_load_explicit_path_missing_file_fails() {
        let result = Config::load(Some(&PathBuf::from("/definitely/not/here.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "NONEXISTENT_TEST_API_KEY_98765".to_string();

        let result = config.validate();

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("NONEXISTENT_TEST_API_KEY_98765"));
    }
}
