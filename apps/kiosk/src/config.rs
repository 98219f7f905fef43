use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{
    Order, DEFAULT_DRINK_NAME, DEFAULT_DRINK_SIZE, DEFAULT_SHOT_COUNT, MAX_SHOT_COUNT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub drink_name: String,
    pub drink_size: String,
    pub shot_count: u32,
    pub is_iced: bool,
    pub max_shots: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drink_name: DEFAULT_DRINK_NAME.into(),
            drink_size: DEFAULT_DRINK_SIZE.into(),
            shot_count: DEFAULT_SHOT_COUNT,
            is_iced: false,
            max_shots: MAX_SHOT_COUNT,
        }
    }
}

impl Settings {
    pub fn starting_order(&self) -> Order {
        Order::new(
            self.shot_count,
            self.is_iced,
            self.drink_name.as_str(),
            self.drink_size.as_str(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    drink_name: Option<String>,
    drink_size: Option<String>,
    shot_count: Option<u32>,
    is_iced: Option<bool>,
    max_shots: Option<u32>,
}

/// Defaults, then the TOML file at `path` if it exists, then `KIOSK_*` / `APP__*` variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = parse_settings_file(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn parse_settings_file(raw: &str) -> anyhow::Result<FileSettings> {
    Ok(toml::from_str::<FileSettings>(raw)?)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.drink_name {
        settings.drink_name = v;
    }
    if let Some(v) = file_cfg.drink_size {
        settings.drink_size = v;
    }
    if let Some(v) = file_cfg.shot_count {
        settings.shot_count = v;
    }
    if let Some(v) = file_cfg.is_iced {
        settings.is_iced = v;
    }
    if let Some(v) = file_cfg.max_shots {
        settings.max_shots = v;
    }
}

/// `APP__*` wins over `KIOSK_*` when both are set.
fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| {
        lookup(&format!("APP__{name}")).or_else(|| lookup(&format!("KIOSK_{name}")))
    };

    if let Some(v) = var("DRINK_NAME") {
        settings.drink_name = v;
    }
    if let Some(v) = var("DRINK_SIZE") {
        settings.drink_size = v;
    }
    if let Some(v) = var("SHOT_COUNT") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.shot_count = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring unparsable SHOT_COUNT"),
        }
    }
    if let Some(v) = var("IS_ICED") {
        match parse_flag(&v) {
            Some(parsed) => settings.is_iced = parsed,
            None => tracing::warn!(value = %v, "ignoring unparsable IS_ICED"),
        }
    }
    if let Some(v) = var("MAX_SHOTS") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.max_shots = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring unparsable MAX_SHOTS"),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `RUST_LOG`, then `APP__LOG_FILTER` / `KIOSK_LOG_FILTER`, then `info`.
pub fn log_filter(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["RUST_LOG", "APP__LOG_FILTER", "KIOSK_LOG_FILTER"]
        .into_iter()
        .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "info".to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
