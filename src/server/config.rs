use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 4;
const MIN_JWT_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub jwt_secret: String,
    pub token_ttl_hours: i64,

    /// Credentials for the admin account created on first start.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let token_ttl_hours = match optional("TOKEN_TTL_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "TOKEN_TTL_HOURS".to_string(),
                    reason: format!("'{}' is not a positive number of hours", value),
                })?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            jwt_secret,
            token_ttl_hours,
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
