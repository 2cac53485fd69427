use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration read from the environment.
pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` present and `PORT` (if set) a valid port number
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or unparsable `PORT`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
