use std::env;

use crate::error::AppError;

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub coingecko_api_url: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub gemini_api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            AppEnv::Development => "debug",
            AppEnv::Production | AppEnv::Test => "info",
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let app_env = AppEnv::parse(&env::var("APP_ENV").unwrap_or_else(|_| "development".into()));

        // Upstream config
        let coingecko_api_url = base_url_from_env("COINGECKO_API_URL", DEFAULT_COINGECKO_API_URL);
        let gemini_api_url = base_url_from_env("GEMINI_API_URL", DEFAULT_GEMINI_API_URL);
        let gemini_model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::ConfigError("GEMINI_API_KEY must be set".into()))?;

        Ok(Self {
            port,
            host,
            app_env,
            coingecko_api_url,
            gemini_api_url,
            gemini_model,
            gemini_api_key,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn base_url_from_env(key: &str, default: &str) -> String {
    let url = env::var(key).unwrap_or_else(|_| default.into());
    url.trim_end_matches('/').to_string()
}
