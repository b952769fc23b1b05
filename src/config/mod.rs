use crate::errors::{AppError, AppResult};
use crate::models::resource::Resource;
use crate::utils::path::resolve_in;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_visible_days")]
    pub visible_days: u32,
    #[serde(default = "default_grid_width")]
    pub grid_width: f64,
    #[serde(default = "default_resources")]
    pub resources: Vec<Resource>,

    /// Runtime clock override (`--today`), never written to the file.
    #[serde(skip)]
    pub today: Option<NaiveDate>,
}

fn default_visible_days() -> u32 {
    10
}
fn default_grid_width() -> f64 {
    default_visible_days() as f64 * 160.0
}
fn default_resources() -> Vec<Resource> {
    [
        "Raphael",
        "Abner Orra",
        "Adalberto Kumagaia",
        "Alan Wliam",
        "Alexandre Meneghel",
        "Antônio Leal",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| Resource::new((i + 1).to_string(), *name))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            visible_days: default_visible_days(),
            grid_width: default_grid_width(),
            resources: default_resources(),
            today: None,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rplanner")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rplanner")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rplanner.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rplanner.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        cfg.database = resolve_in(&Self::config_dir(), &cfg.database)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.visible_days == 0 {
            return Err(AppError::Config("visible_days must be at least 1".into()));
        }
        if !(self.grid_width.is_finite() && self.grid_width > 0.0) {
            return Err(AppError::Config("grid_width must be a positive number".into()));
        }

        let mut seen = std::collections::HashSet::new();
        for r in &self.resources {
            if !seen.insert(r.id.as_str()) {
                return Err(AppError::Config(format!("duplicate resource id '{}'", r.id)));
            }
        }
        Ok(())
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, &name),
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
            .map_err(|e: io::Error| AppError::Config(e.to_string()))?;
        Ok(())
    }
}
