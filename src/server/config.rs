use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_DB_FILE: &str = "app.db";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Enables debug level logging and SQL statement logging.
    pub debug: bool,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr)` - A variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = match std::env::var("DB_URI") {
            Ok(url) => url,
            Err(_) => default_database_url()?,
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let debug = match std::env::var("DEBUG") {
            Ok(value) => parse_debug_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "DEBUG".to_string(),
                value,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            host,
            port,
            debug,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Sqlite file in the working directory, created on first connect.
fn default_database_url() -> Result<String, AppError> {
    let path = std::env::current_dir()?.join(DEFAULT_DB_FILE);

    Ok(format!("sqlite://{}?mode=rwc", path.display()))
}

fn parse_debug_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
