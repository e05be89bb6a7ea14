use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "SHELF_ENV";
const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub images: ImageSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `SHELF_`-prefixed variables (`__` separates nested keys).
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit directory and environment name.
    pub fn load_from(config_dir: &std::path::Path, environment: &str) -> anyhow::Result<Self> {
        let environment: Environment = environment.parse()?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment_name(&environment)));

        let cfg = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("SHELF")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = environment;
        Ok(settings)
    }
}

fn environment_name(environment: &Environment) -> &'static str {
    match environment {
        Environment::Local => "local",
        Environment::Staging => "staging",
        Environment::Production => "production",
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Location of the books API this application fronts.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
}

impl ApiSettings {
    fn default_base_url() -> String {
        "http://localhost:8080/api".to_string()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    /// Items requested per list page.
    #[serde(default = "UiSettings::default_page_size")]
    pub page_size: u32,
    /// Quiet period after the last keystroke before a search is committed.
    #[serde(default = "UiSettings::default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl UiSettings {
    fn default_page_size() -> u32 {
        10
    }

    fn default_search_debounce_ms() -> u64 {
        300
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: Self::default_page_size(),
            search_debounce_ms: Self::default_search_debounce_ms(),
        }
    }
}

/// A remote origin book cover images may be loaded from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: String,
    /// Exact host, or `**.domain` to match any subdomain of `domain`.
    pub hostname: String,
    #[serde(default)]
    pub port: Option<u16>,
}

impl RemotePattern {
    fn https(hostname: &str) -> Self {
        Self {
            protocol: "https".to_string(),
            hostname: hostname.to_string(),
            port: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSettings {
    #[serde(default = "ImageSettings::default_remote_patterns")]
    pub remote_patterns: Vec<RemotePattern>,
}

impl ImageSettings {
    fn default_remote_patterns() -> Vec<RemotePattern> {
        let mut patterns: Vec<RemotePattern> = [
            "example.com",
            "images.unsplash.com",
            "picsum.photos",
            "via.placeholder.com",
            "upload.wikimedia.org",
            "**.amazonaws.com",
            "**.cloudinary.com",
            "**.imgur.com",
            "**.githubusercontent.com",
            "**.wikipedia.org",
            "**.wikimedia.org",
            "**.googleusercontent.com",
            "**.googleapis.com",
            "**.amazon.com",
            "**.goodreads.com",
            "**.bookdepository.com",
        ]
        .into_iter()
        .map(RemotePattern::https)
        .collect();

        for protocol in ["http", "https"] {
            patterns.push(RemotePattern {
                protocol: protocol.to_string(),
                hostname: "localhost".to_string(),
                port: Some(8080),
            });
            patterns.push(RemotePattern {
                protocol: protocol.to_string(),
                hostname: "rgt-robotics-integration.up.railway.app".to_string(),
                port: None,
            });
        }
        patterns
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            remote_patterns: Self::default_remote_patterns(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// `tracing-subscriber` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info,tower_http=info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
