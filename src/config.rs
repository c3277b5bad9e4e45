//! Process-wide settings: file paths, input encoding and backend credentials.
//!
//! Loaded once at startup from `config.json` in the platform config
//! directory (or an explicit path), then overridden by `GOLF_*` variables.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canonical catalog consumed by the app
    pub catalog_path: PathBuf,
    pub backup_path: PathBuf,
    /// Pending additions produced by `analyze`
    pub missing_path: PathBuf,
    /// Government facility export
    pub csv_path: PathBuf,
    /// WHATWG label of the export's text encoding
    pub csv_encoding: String,
    pub backend: BackendConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub service_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Password given to every generated demo account
    pub password: Option<String>,
    /// Account that receives requests, messages and notifications
    pub dev_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("src/data/golfCourses.json"),
            backup_path: PathBuf::from("src/data/golfCourses.backup.json"),
            missing_path: PathBuf::from("scripts/missing_courses.json"),
            csv_path: PathBuf::from("골프장현황.csv"),
            csv_encoding: "euc-kr".to_string(),
            backend: BackendConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            timeout_secs: 30,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            password: None,
            dev_email: "dev@bottlecorp.kr".to_string(),
        }
    }
}

/// Resolved backend endpoint and key
#[derive(Debug, Clone)]
pub struct BackendCredentials {
    pub url: String,
    pub service_key: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Default location: `<config dir>/golf-catalog/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "golf-catalog")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from `custom` or the default path, then apply the environment.
    /// A missing file at the default path means defaults; an explicit path must exist.
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        let mut config = match custom {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|var| std::env::var(var).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse config: {:?}", path))
    }

    /// Apply `GOLF_*` overrides; blank values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("GOLF_CATALOG_PATH") {
            self.catalog_path = v.into();
        }
        if let Some(v) = get("GOLF_CATALOG_BACKUP") {
            self.backup_path = v.into();
        }
        if let Some(v) = get("GOLF_CATALOG_MISSING") {
            self.missing_path = v.into();
        }
        if let Some(v) = get("GOLF_CATALOG_CSV") {
            self.csv_path = v.into();
        }
        if let Some(v) = get("GOLF_CATALOG_CSV_ENCODING") {
            self.csv_encoding = v;
        }
        if let Some(v) = get("GOLF_BACKEND_URL") {
            self.backend.url = Some(v.trim_end_matches('/').to_string());
        }
        if let Some(v) = get("GOLF_BACKEND_KEY") {
            self.backend.service_key = Some(v);
        }
        if let Some(v) = get("GOLF_HTTP_TIMEOUT_SECS") {
            match v.trim().parse() {
                Ok(secs) => self.backend.timeout_secs = secs,
                Err(_) => tracing::warn!(
                    var = "GOLF_HTTP_TIMEOUT_SECS",
                    value = %v,
                    default = self.backend.timeout_secs,
                    "invalid env var value, using default"
                ),
            }
        }
        if let Some(v) = get("GOLF_SEED_PASSWORD") {
            self.seed.password = Some(v);
        }
        if let Some(v) = get("GOLF_DEV_EMAIL") {
            self.seed.dev_email = v;
        }
    }

    pub fn backend_credentials(&self) -> Result<BackendCredentials> {
        let url = self
            .backend
            .url
            .clone()
            .context("Backend URL not configured (set GOLF_BACKEND_URL or backend.url)")?;
        let service_key = self
            .backend
            .service_key
            .clone()
            .context("Backend key not configured (set GOLF_BACKEND_KEY or backend.service_key)")?;

        Ok(BackendCredentials {
            url,
            service_key,
            timeout_secs: self.backend.timeout_secs,
        })
    }

    pub fn seed_password(&self) -> Result<&str> {
        self.seed
            .password
            .as_deref()
            .context("Seed password not configured (set GOLF_SEED_PASSWORD or seed.password)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("GOLF_CATALOG_PATH", "/data/courses.json"),
            ("GOLF_CATALOG_CSV_ENCODING", "utf-8"),
            ("GOLF_BACKEND_URL", "https://example.supabase.co/"),
            ("GOLF_BACKEND_KEY", "secret"),
            ("GOLF_HTTP_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.catalog_path, PathBuf::from("/data/courses.json"));
        assert_eq!(config.csv_encoding, "utf-8");
        let creds = config.backend_credentials().unwrap();
        assert_eq!(creds.url, "https://example.supabase.co");
        assert_eq!(creds.service_key, "secret");
        assert_eq!(creds.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_and_blank_values_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("GOLF_HTTP_TIMEOUT_SECS", "soon"),
            ("GOLF_DEV_EMAIL", "   "),
        ]));

        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.seed.dev_email, "dev@bottlecorp.kr");
    }

    #[test]
    fn test_missing_credentials_are_errors() {
        let config = Config::default();
        assert!(config.backend_credentials().is_err());
        assert!(config.seed_password().is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"csv_encoding": "utf-8", "seed": {"password": "pw"}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.csv_encoding, "utf-8");
        assert_eq!(config.seed_password().unwrap(), "pw");
        assert_eq!(config.seed.dev_email, "dev@bottlecorp.kr");
        assert_eq!(config.catalog_path, Config::default().catalog_path);
    }
}
