use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
    pub export: ExportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let catalog_path = env::var("CATALOG_PATH").unwrap_or_else(|_| "housing_data.json".to_string());

        let top_n = env::var("MATCH_TOP_N")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopN)?;

        let export_dir = env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig {
                path: PathBuf::from(catalog_path),
            },
            matching: MatchingConfig { top_n },
            export: ExportConfig {
                dir: PathBuf::from(export_dir),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the agency catalog JSON lives.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

/// Ranking knobs that the CLI can override per run.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub top_n: usize,
}

/// Destination directory for the session CSV export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN => write!(f, "MATCH_TOP_N must be a non-negative integer"),
        }
    }
}

impl std::error::Error for ConfigError {}
