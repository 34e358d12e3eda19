use crate::analysis::keywords::{DEFAULT_MAX_WORDS, DEFAULT_MIN_LENGTH};
use crate::errors::{AppError, AppResult};
use crate::models::MoodThresholds;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub thresholds: MoodThresholds,
    #[serde(default = "default_min_length")]
    pub keyword_min_length: usize,
    #[serde(default = "default_max_words")]
    pub keyword_max_words: usize,
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}
fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}
fn default_top_keywords() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            thresholds: MoodThresholds::default(),
            keyword_min_length: default_min_length(),
            keyword_max_words: default_max_words(),
            extra_stop_words: Vec::new(),
            top_keywords: default_top_keywords(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rmoodlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rmoodlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmoodlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rmoodlog.sqlite")
    }

    /// Where a user-supplied database path points: `~` is expanded and a
    /// relative path lives under [`Config::config_dir`]. Used for `--db`
    /// and the `database` key alike.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name.trim());
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {}", e)))?;

        cfg.database = Self::resolve_db_path(&cfg.database)
            .to_string_lossy()
            .to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.thresholds.validate()?;

        if self.keyword_min_length == 0 {
            return Err(AppError::Config(
                "keyword_min_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
