use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming an optional JSON settings file
pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";

/// Main settings structure, built once at startup and passed down explicitly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub assets: AssetSettings,
    pub logging: LoggingSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Project database location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub db_path: PathBuf,
}

/// Stylesheets and project images served under /static
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub static_dir: PathBuf,
}

/// Log file settings; stderr logging is always on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub file_logging: bool,
    pub logs_dir: PathBuf,
    pub keep_files: usize,
}

/// `projects.db` next to the running executable, or in the working
/// directory if the executable path is unavailable.
fn default_db_path() -> PathBuf {
    let file_name = "projects.db";
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(file_name)))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("portfolio-site").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_logging: false,
            logs_dir: default_logs_dir(),
            keep_files: 5,
        }
    }
}

impl Settings {
    /// Loads settings from the process environment
    ///
    /// Order: defaults, then the JSON file named by `PORTFOLIO_CONFIG` (if set),
    /// then `PORTFOLIO_HOST` / `PORTFOLIO_PORT` / `PORTFOLIO_DB_PATH` /
    /// `PORTFOLIO_STATIC_DIR` overrides. The result is validated.
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`] with an injectable variable lookup
    pub fn load_with<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        settings.apply_overrides(&lookup)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads a JSON settings file. Missing sections and fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to parse settings file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PORTFOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORTFOLIO_PORT") {
            self.server.port = port.trim().parse().map_err(|e| {
                AppError::ConfigError(format!("Invalid PORTFOLIO_PORT '{}': {}", port, e))
            })?;
        }
        if let Some(db_path) = lookup("PORTFOLIO_DB_PATH") {
            self.storage.db_path = PathBuf::from(db_path);
        }
        if let Some(static_dir) = lookup("PORTFOLIO_STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(static_dir);
        }
        Ok(())
    }

    /// Validates settings constraints
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - host is empty or port is 0
    /// - host:port is not a socket address
    /// - db_path is empty
    /// - keep_files is 0
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::ConfigError("Server host cannot be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(AppError::ConfigError("Server port must be non-zero".to_string()));
        }
        self.listen_addr()?;

        if self.storage.db_path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("Database path cannot be empty".to_string()));
        }
        if self.logging.keep_files == 0 {
            return Err(AppError::ConfigError(
                "Logging keep_files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(format!(
                    "Invalid listen address '{}:{}': {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
