use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use shared::protocol::REQUEST_CALL_PATH;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const DEFAULT_SETTINGS_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub call_request_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            call_request_url: format!("{DEFAULT_SERVER_URL}{REQUEST_CALL_PATH}"),
        }
    }
}

impl ClientSettings {
    pub fn call_request_endpoint(&self) -> anyhow::Result<Url> {
        parse_call_request_url(&self.call_request_url)
    }

    /// Applies a command-line override on top of file/env settings.
    pub fn with_call_request_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.call_request_url = url;
        }
        self
    }
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |key| {
        std::env::var(key).ok()
    })
}

/// Defaults, then the settings file, then environment variables.
pub fn load_settings_from(
    settings_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(settings_file) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("call_request_url") {
                    settings.call_request_url = v.clone();
                }
            }
            Err(err) => tracing::warn!(
                path = %settings_file.display(),
                error = %err,
                "ignoring unparseable client settings file"
            ),
        }
    }

    if let Some(v) = env("CALL_REQUEST_URL") {
        settings.call_request_url = v;
    }
    if let Some(v) = env("APP__CALL_REQUEST_URL") {
        settings.call_request_url = v;
    }

    settings
}

pub fn parse_call_request_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("invalid call request url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "unsupported scheme '{}' in call request url '{raw}'; expected http or https",
            url.scheme()
        );
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
