//! Service configuration from the environment.

use std::path::Path;

use anyhow::Context;
use quiz_core::GraderConfig;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub grader: GraderConfig,
}

impl Config {
    /// Read `HOST`, `PORT` and `GRADER_CONFIG`.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let grader = match std::env::var("GRADER_CONFIG") {
            Ok(path) => load_grader_config(Path::new(&path))?,
            Err(_) => {
                tracing::info!("GRADER_CONFIG not set, using default grading rules");
                GraderConfig::default()
            }
        };

        Ok(Self { host, port, grader })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load grading rules from a JSON file. Missing fields keep their defaults.
pub fn load_grader_config(path: &Path) -> anyhow::Result<GraderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading grader config {}", path.display()))?;
    let config: GraderConfig = serde_json::from_str(&content)
        .with_context(|| format!("parsing grader config {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        stop_words = config.stop_words.len(),
        date_patterns = config.date_patterns.len(),
        "loaded grader config"
    );
    Ok(config)
}
