use axum::http::HeaderValue;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini REST endpoint used unless `GEMINI_API_BASE` overrides it.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The only model the relay asks for.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Web front-end allowed to call the relay cross-origin.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://chatbotproyectofinal.web.app";

const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// Empty when unset outside production; calls then fail upstream.
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

impl CorsSettings {
    pub fn allowed_origin_header(&self) -> Result<HeaderValue, AppError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "ALLOWED_ORIGIN '{}' is not a valid header value: {}",
                self.allowed_origin,
                e
            ))
        })
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let mut common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        // Hosting platforms assign the port through PORT; empty means unset.
        if let Some(port) = env::var("PORT").ok().filter(|p| !p.is_empty()) {
            common.port = port.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("PORT '{}' is not a valid port: {}", port, e))
            })?;
        }

        let timeout_secs = get_env(
            "GEMINI_TIMEOUT_SECS",
            Some(&DEFAULT_GEMINI_TIMEOUT_SECS.to_string()),
            false,
        )?;

        let config = RelayConfig {
            common,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), false)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), false)?,
                timeout_secs: timeout_secs.parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "GEMINI_TIMEOUT_SECS '{}' is not a number: {}",
                        timeout_secs,
                        e
                    ))
                })?,
            },
            cors: CorsSettings {
                allowed_origin: get_env("ALLOWED_ORIGIN", Some(DEFAULT_ALLOWED_ORIGIN), false)?,
            },
        };

        config.cors.allowed_origin_header()?;

        Ok(config)
    }

    /// Configuration for an ephemeral local instance, with no credential.
    pub fn local(allowed_origin: &str) -> Self {
        RelayConfig {
            common: core_config::Config { port: 0 },
            gemini: GeminiSettings {
                api_key: String::new(),
                model: DEFAULT_GEMINI_MODEL.to_string(),
                api_base: DEFAULT_GEMINI_API_BASE.to_string(),
                timeout_secs: DEFAULT_GEMINI_TIMEOUT_SECS,
            },
            cors: CorsSettings {
                allowed_origin: allowed_origin.to_string(),
            },
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
