//! Application configuration loaded from environment variables.

use std::fmt;
use std::path::PathBuf;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8085`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `CONTENT_PATH` — persisted content document (default: `"content.json"`)
/// - `STATIC_DIR` — site assets, `index.html` and `dashboard.html` (default: `"public"`)
/// - `UPLOADS_DIR` — where uploaded images are written (default: `"uploads"`)
/// - `ADMIN_USERNAME` — dashboard username (default: `"nikma"`)
/// - `ADMIN_PASSWORD` — dashboard password (no default; unset rejects every login)
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub content_path: PathBuf,
    pub static_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every key it does not answer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            content_path: lookup("CONTENT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_path),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            uploads_dir: lookup("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.uploads_dir),
            admin_username: lookup("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8085,
            log_level: "info".to_string(),
            content_path: PathBuf::from("content.json"),
            static_dir: PathBuf::from("public"),
            uploads_dir: PathBuf::from("uploads"),
            admin_username: "nikma".to_string(),
            admin_password: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("content_path", &self.content_path)
            .field("static_dir", &self.static_dir)
            .field("uploads_dir", &self.uploads_dir)
            .field("admin_username", &self.admin_username)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
