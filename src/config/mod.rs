use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Gemini API key. The GEMINI_API_KEY env var takes precedence so the
    /// secret never has to live in the config file at all.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_weekly_target")]
    pub weekly_target_hours: f64,
    #[serde(default = "default_quarter_budget")]
    pub quarter_budget_hours: f64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_weekly_target() -> f64 {
    20.0
}
fn default_quarter_budget() -> f64 {
    480.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            api_key: None,
            model: default_model(),
            weekly_target_hours: default_weekly_target(),
            quarter_budget_hours: default_quarter_budget(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("focuslog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".focuslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("focuslog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("focuslog.sqlite")
    }

    /// Parse a config file body. Split out so the error path is testable.
    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that exists but does not parse is reported loudly before
    /// falling back: silently switching to a default database path would
    /// make the operator's data appear to vanish.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        warning(format!(
                            "Config file {:?} is invalid ({}); falling back to defaults.",
                            path, e
                        ));
                        Config::default()
                    }
                },
                Err(e) => {
                    warning(format!(
                        "Config file {:?} could not be read ({}); falling back to defaults.",
                        path, e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Resolve the Gemini API key (env var first, then config file).
    /// Missing key is fatal for the feature that needs it, checked before
    /// any request is built.
    pub fn resolve_api_key(&self) -> AppResult<String> {
        if let Ok(k) = env::var("GEMINI_API_KEY")
            && !k.trim().is_empty()
        {
            return Ok(k);
        }
        match &self.api_key {
            Some(k) if !k.trim().is_empty() => Ok(k.clone()),
            _ => Err(AppError::MissingApiKey),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fills_missing_fields_with_defaults() {
        let cfg = Config::parse("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.weekly_target_hours, 20.0);
        assert_eq!(cfg.quarter_budget_hours, 480.0);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn parse_rejects_corrupt_yaml() {
        assert!(Config::parse("database: [unclosed\n").is_err());
        assert!(Config::parse("weekly_target_hours: not-a-number\n").is_err());
    }
}
