use std::env;
use secrecy::SecretString;

const DEV_API_KEY: &str = "dev_api_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub generation_api_base_url: String,
    pub generation_api_key: SecretString,
    pub generation_model: String,
    pub generation_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            generation_api_base_url: env::var("GENERATION_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            generation_api_key: SecretString::from(
                env::var("GENERATION_API_KEY").unwrap_or_else(|_| DEV_API_KEY.to_string()),
            ),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            generation_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if the generation API key is still the default
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.generation_api_key.expose_secret();

        if api_key == DEV_API_KEY || api_key.is_empty() {
            panic!(
                "FATAL: GENERATION_API_KEY is using default value! Set GENERATION_API_KEY environment variable."
            );
        }

        if self.generation_timeout_secs == 0 {
            panic!("FATAL: GENERATION_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            generation_api_base_url: "http://127.0.0.1:9".to_string(),
            generation_api_key: SecretString::from("test_api_key".to_string()),
            generation_model: "test-model".to_string(),
            generation_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
