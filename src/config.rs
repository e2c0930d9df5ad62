use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on ($PORT, default 8000).
    pub port: u16,
    /// Master bearer token ($MASTER_API_KEY). Its absence is not an
    /// error here; the authenticator rejects requests with 500 until
    /// the operator sets it.
    pub master_api_key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}: expected an integer port number")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("MASTER_API_KEY").ok(),
        )
    }

    // split out from from_env so tests don't have to mutate process env
    fn from_vars(
        port: Option<String>,
        master_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            master_api_key,
        })
    }
}
