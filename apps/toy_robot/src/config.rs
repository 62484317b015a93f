use std::{fs, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "toy_robot.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    fn parse(raw: &str) -> Option<Self> {
        Self::from_str(raw.trim(), true).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub report_format: ReportFormat,
    pub report_prefix: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::Text,
            report_prefix: true,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    report_format: Option<ReportFormat>,
    report_prefix: Option<bool>,
    log_filter: Option<String>,
}

/// Defaults, then the TOML file, then environment overrides.
///
/// An explicit `config_path` must exist; the default `toy_robot.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with_env(config_path, |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_with_env(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match config_path {
        Some(path) => Some(read_file_settings(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Some(read_file_settings(Path::new(DEFAULT_CONFIG_FILE))?)
        }
        None => None,
    };

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.report_format {
            settings.report_format = v;
        }
        if let Some(v) = file_cfg.report_prefix {
            settings.report_prefix = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("APP__REPORT_FORMAT").as_deref().and_then(ReportFormat::parse) {
        settings.report_format = v;
    }
    if let Some(v) = env("APP__REPORT_PREFIX").and_then(|v| v.trim().parse::<bool>().ok()) {
        settings.report_prefix = v;
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
