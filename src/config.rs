use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_MONGO_CONN_STRING: &str = "mongodb://localhost:27017";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub sessions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| DEFAULT_MONGO_CONN_STRING.to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "assessments-local".to_string()),
            sessions_collection: env::var("SESSIONS_COLLECTION")
                .unwrap_or_else(|_| "assessment_sessions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects development defaults when running with `APP_ENV=production`.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if !self.is_production() {
            return Ok(());
        }

        if self.mongo_conn_string.expose_secret() == DEFAULT_MONGO_CONN_STRING {
            return Err(AppError::ValidationError(
                "MONGO_CONN_STRING is using the local default; set it for production".to_string(),
            ));
        }

        if self.cors_allowed_origin == "*" || self.cors_allowed_origin == DEFAULT_CORS_ORIGIN {
            return Err(AppError::ValidationError(format!(
                "CORS_ALLOWED_ORIGIN '{}' is not allowed in production",
                self.cors_allowed_origin
            )));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from(DEFAULT_MONGO_CONN_STRING.to_string()),
            mongo_db_name: "assessments-test".to_string(),
            sessions_collection: "assessment_sessions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
            app_env: "test".to_string(),
        }
    }
}
