use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Environment variable carrying the completion credential. The key is
/// injected at process start and never compiled into distributed artifacts.
pub const API_KEY_ENV: &str = "AYUSHMITRA_LLM_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible completions API.
    pub api_endpoint: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    /// Deadline for one completion call; an expired call takes the failure
    /// path instead of leaving the session latched.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_temperature() -> f64 {
    1.0
}

fn default_max_tokens() -> i32 {
    1024
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[llm]
api_endpoint = "https://api.groq.com/openai/v1"
model = "llama-3.3-70b-versatile"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();
static API_KEY: OnceCell<String> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Read the completion credential from the environment.
///
/// Fails when the variable is absent or blank: the process must not start
/// without the injected credential.
pub fn load_api_key() -> anyhow::Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => anyhow::bail!(
            "{} is not set; the completion credential must be injected at process start",
            API_KEY_ENV
        ),
    }
}

/// Install the loaded configuration and credential process-wide.
pub fn init(config: Config, api_key: String) {
    CONFIG.set(config).expect("config initialized twice");
    API_KEY.set(api_key).expect("api key initialized twice");
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("config not initialized")
}

pub fn api_key() -> &'static str {
    API_KEY.get().expect("api key not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.llm.api_endpoint, "https://api.groq.com/openai/v1");
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.request_timeout_secs, 30);
    }

    #[test]
    fn tuning_fields_are_optional() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            api_endpoint = "http://localhost:8080/v1"
            model = "test-model"
            "#,
        )
        .unwrap();
        assert_eq!(config.llm.temperature, 1.0);
        assert_eq!(config.llm.max_tokens, 1024);
    }

    #[test]
    fn explicit_timeout_overrides_default() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            api_endpoint = "http://localhost:8080/v1"
            model = "test-model"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.llm.request_timeout_secs, 5);
    }
}
