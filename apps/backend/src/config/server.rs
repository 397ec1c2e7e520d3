use std::env;

use crate::domain::rolling_log::DEFAULT_LOG_CAPACITY;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_PLAYER_NAMES: &str = "Mimi,Aet,Martin,Markus,Liisbet,Madli,Ben";
const DEFAULT_CHAT_COLORS: &str = "pink,red,orange,yellow,green,blue,purple,white";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:4200,http://127.0.0.1:4200";

/// Process configuration read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API.
    pub cors_allowed_origins: Vec<String>,
    pub chat_log_size: usize,
    pub action_log_size: usize,
    pub initial_player_names: Vec<String>,
    pub chat_colors: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("BACKEND_PORT must be a port number, got '{raw}': {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        let mut cors_allowed_origins: Vec<String> = split_list(
            var("CORS_ALLOWED_ORIGINS")
                .as_deref()
                .unwrap_or(DEFAULT_CORS_ORIGINS),
        )
        .into_iter()
        .filter(|o| o != "null" && (o.starts_with("http://") || o.starts_with("https://")))
        .collect();
        if cors_allowed_origins.is_empty() {
            cors_allowed_origins = split_list(DEFAULT_CORS_ORIGINS);
        }

        let chat_log_size = log_size("CHAT_LOG_SIZE", var("CHAT_LOG_SIZE"))?;
        let action_log_size = log_size("ACTION_LOG_SIZE", var("ACTION_LOG_SIZE"))?;

        let initial_player_names = split_list(
            var("INITIAL_PLAYER_NAMES")
                .as_deref()
                .unwrap_or(DEFAULT_PLAYER_NAMES),
        );
        let chat_colors =
            split_list(var("CHAT_COLORS").as_deref().unwrap_or(DEFAULT_CHAT_COLORS));
        if chat_colors.is_empty() {
            return Err(AppError::config("CHAT_COLORS must name at least one color"));
        }

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            chat_log_size,
            action_log_size,
            initial_player_names,
            chat_colors,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: split_list(DEFAULT_CORS_ORIGINS),
            chat_log_size: DEFAULT_LOG_CAPACITY,
            action_log_size: DEFAULT_LOG_CAPACITY,
            initial_player_names: split_list(DEFAULT_PLAYER_NAMES),
            chat_colors: split_list(DEFAULT_CHAT_COLORS),
        }
    }
}

fn log_size(key: &str, raw: Option<String>) -> Result<usize, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LOG_CAPACITY);
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AppError::config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
