use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::options::{DEFAULT_PARAMS, find_option};
use crate::params::{ArticleParams, ParamKey};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ARTICLE_PARAMS_CONFIG";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
/// Option values the article starts with, by field.
pub struct ArticleSettings {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_color: Option<String>,
    pub background_color: Option<String>,
    pub content_width: Option<String>,
}

impl ArticleSettings {
    fn value(&self, key: ParamKey) -> Option<&str> {
        match key {
            ParamKey::FontFamily => self.font_family.as_deref(),
            ParamKey::FontSize => self.font_size.as_deref(),
            ParamKey::FontColor => self.font_color.as_deref(),
            ParamKey::BackgroundColor => self.background_color.as_deref(),
            ParamKey::ContentWidth => self.content_width.as_deref(),
        }
    }

    /// Builds the startup params; unknown values keep that field's default.
    pub fn resolve(&self) -> ArticleParams {
        ParamKey::ALL
            .into_iter()
            .fold(DEFAULT_PARAMS, |params, key| {
                let Some(raw) = self.value(key) else {
                    return params;
                };
                match find_option(key, raw) {
                    Ok(opt) => params.with_field(key, opt),
                    Err(err) => {
                        tracing::warn!("ignoring configured {}: {}", key.name(), err);
                        params
                    }
                }
            })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted window settings and the article's startup presentation.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    #[serde(default)]
    pub article: ArticleSettings,
}

impl AppConfig {
    /// Returns the config file path, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(raw) = std::env::var(CONFIG_PATH_ENV) {
            if !raw.trim().is_empty() {
                return Some(PathBuf::from(raw));
            }
        }
        dirs::config_dir().map(|d| d.join("article-params").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|err| {
            tracing::warn!("config is not valid TOML, using defaults: {}", err);
            Self::default()
        })
    }

    /// Writes config to disk, ignoring filesystem/serialization errors.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(s) = toml::to_string_pretty(self) {
            let _ = std::fs::write(&path, s);
        }
    }
}
