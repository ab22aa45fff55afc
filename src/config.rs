use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::analysis::{DEFAULT_HEALTH_PATH, DEFAULT_TRANSCRIPT_PATH};
use crate::upload::DEFAULT_MAX_BYTES;

/// Config file picked up from the working directory when no path is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the transcript analysis service
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
    pub upload: UploadConfig,
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
    pub request_timeout_secs: u64,
    pub timeout_disabled: bool,
}

/// Where and how to reach the transcript analysis service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisConfig {
    pub base_url: String,
    pub transcript_path: String,
    pub health_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkspaceConfig {
    pub idle_timeout_secs: u64,
    pub cleanup_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".into(),
                static_dir: "static".into(),
                request_timeout_secs: 180,
                timeout_disabled: false,
            },
            analysis: AnalysisConfig {
                base_url: "http://localhost:8000".into(),
                transcript_path: DEFAULT_TRANSCRIPT_PATH.into(),
                health_path: DEFAULT_HEALTH_PATH.into(),
                timeout_secs: 150,
            },
            upload: UploadConfig {
                max_bytes: DEFAULT_MAX_BYTES,
            },
            workspace: WorkspaceConfig {
                idle_timeout_secs: 30 * 60,
                cleanup_interval_secs: 60,
            },
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Effective request timeout; a disabled timeout becomes one year.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        if self.timeout_disabled {
            Duration::from_secs(365 * 24 * 60 * 60)
        } else {
            Duration::from_secs(self.request_timeout_secs)
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WorkspaceConfig {
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    #[must_use]
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs.max(1))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder.add_source(Config::try_from(&AppConfig::default())?);

        // 2. Config file: explicit path wins, otherwise ./config.yaml if present
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
        }

        // 3. Prefixed environment, e.g. INCIDENT_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("INCIDENT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their env fallbacks) override everything
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.api_base_url.filter(|u| !u.trim().is_empty()) {
            builder = builder.set_override("analysis.base_url", url)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("server.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
