//! Layered configuration.
//!
//! Uses Figment to merge built-in defaults, `config.toml`, `config.<env>.toml`
//! and `APP_*` env vars (`APP_RECOMMEND__TOP_K=3`). Paths in the config are
//! expanded (`~`, `${VAR}`) and resolved against the config directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{DEFAULT_MIN_RATING, DEFAULT_TOP_K, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: "games.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendSettings {
    pub top_k: usize,
    pub default_min_rating: f32,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            default_min_rating: DEFAULT_MIN_RATING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub recommend: RecommendSettings,
    pub logging: LoggingSettings,
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Load from the current directory.
    pub fn load() -> Result<Self> {
        let base_dir = env::current_dir().map_err(|source| Error::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Self::load_in(&base_dir)
    }

    /// Load from `base_dir` using `RUST_ENV` (default `dev`).
    pub fn load_in(base_dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(base_dir, &env_name)
    }

    pub fn load_from(base_dir: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base_dir.join("config.toml")));
        match env_name {
            "dev" | "development" => {
                figment = figment.merge(Toml::file(base_dir.join("config.dev.toml")));
            }
            "prod" | "production" => {
                figment = figment.merge(Toml::file(base_dir.join("config.prod.toml")));
            }
            "test" | "testing" => {
                figment = figment.merge(Toml::file(base_dir.join("config.test.toml")));
            }
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self {
            figment,
            base_dir: base_dir.to_path_buf(),
        };
        config.settings()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    /// Extract and validate the typed settings.
    pub fn settings(&self) -> Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        validate(&settings)?;
        Ok(settings)
    }

    /// Catalog location with `~`/`$VAR` expanded and relative paths anchored
    /// at the config directory.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        let settings = self.settings()?;
        Ok(resolve_with_base(&self.base_dir, &settings.catalog.path))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.recommend.top_k == 0 {
        return Err(Error::InvalidConfig(
            "recommend.top_k must be at least 1".to_string(),
        ));
    }
    let rating = settings.recommend.default_min_rating;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::InvalidConfig(format!(
            "recommend.default_min_rating {rating} is outside {MIN_RATING}..={MAX_RATING}"
        )));
    }
    if settings.catalog.path.trim().is_empty() {
        return Err(Error::InvalidConfig("catalog.path is empty".to_string()));
    }
    Ok(())
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
