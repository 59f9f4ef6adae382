use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub providers: ProvidersConfig,
    /// Identifier of the pre-configured remote assistant.
    pub assistant_id: String,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Session ceilings and pacing. All durations in whole seconds.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct LimitsConfig {
    #[serde(default = "LimitsConfig::default_max_questions")]
    pub max_questions: u32,
    #[serde(default = "LimitsConfig::default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "LimitsConfig::default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    #[serde(default = "LimitsConfig::default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "LimitsConfig::default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_questions: Self::default_max_questions(),
            max_retries: Self::default_max_retries(),
            retry_delay_secs: Self::default_retry_delay_secs(),
            poll_interval_secs: Self::default_poll_interval_secs(),
            poll_timeout_secs: Self::default_poll_timeout_secs(),
        }
    }
}

impl LimitsConfig {
    const fn default_max_questions() -> u32 {
        500
    }

    const fn default_max_retries() -> u32 {
        3
    }

    const fn default_retry_delay_secs() -> u64 {
        2
    }

    const fn default_poll_interval_secs() -> u64 {
        1
    }

    const fn default_poll_timeout_secs() -> u64 {
        120
    }
}

/// Limits and credentials for the text-acquisition collaborators.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IntakeConfig {
    /// WebScrapingAPI key for job-posting URL intake; omit to disable URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraper_api_key: Option<String>,
    #[serde(default = "IntakeConfig::default_max_job_description_len")]
    pub max_job_description_len: usize,
    #[serde(default = "IntakeConfig::default_max_profile_bytes")]
    pub max_profile_bytes: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            scraper_api_key: None,
            max_job_description_len: Self::default_max_job_description_len(),
            max_profile_bytes: Self::default_max_profile_bytes(),
        }
    }
}

impl IntakeConfig {
    const fn default_max_job_description_len() -> usize {
        50_000
    }

    const fn default_max_profile_bytes() -> usize {
        5 * 1024 * 1024
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'jobreach init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("jobreach"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  },
  "assistant_id": "your-assistant-id-here",
  "limits": {
    "max_questions": 500,
    "max_retries": 3,
    "retry_delay_secs": 2,
    "poll_interval_secs": 1,
    "poll_timeout_secs": 120
  },
  "intake": {
    "max_job_description_len": 50000,
    "max_profile_bytes": 5242880
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key and assistant id");
        println!("   2. Optionally add intake.scraper_api_key to enable job-URL intake");
        println!("   3. Run 'jobreach chat' to start a session");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn limits_default_when_section_missing() {
        let raw = r#"{
            "providers": { "openai": { "api_key": "k" } },
            "assistant_id": "asst_1"
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.limits.max_questions, 500);
        assert_eq!(config.limits.max_retries, 3);
        assert_eq!(config.limits.retry_delay_secs, 2);
        assert_eq!(config.limits.poll_interval_secs, 1);
        assert_eq!(config.intake.max_job_description_len, 50_000);
        assert!(config.intake.scraper_api_key.is_none());
    }

    #[test]
    fn partial_limits_fill_in_defaults() {
        let raw = r#"{
            "providers": { "openai": { "api_key": "k" } },
            "assistant_id": "asst_1",
            "limits": { "max_questions": 10 }
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.limits.max_questions, 10);
        assert_eq!(config.limits.poll_timeout_secs, 120);
    }
}
