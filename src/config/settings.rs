//! Typed settings for the catalog server, loaded from files and the
//! environment.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration for the catalog server.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server binding
    pub server: ServerSettings,

    /// PostgreSQL connection and pool sizing
    pub database: DatabaseSettings,

    /// Snowflake generator identity
    pub snowflake: SnowflakeSettings,

    /// CORS origin list
    pub cors: CorsSettings,

    /// Deployment environment name (development, staging, production)
    pub environment: String,
}

/// HTTP listener binding.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind, e.g. "0.0.0.0"
    pub host: String,

    /// TCP port to listen on
    pub port: u16,
}

/// PostgreSQL connection and pool sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection URL, e.g. postgres://localhost/catalog
    pub url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Minimum number of connections kept warm
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection before giving up
    pub acquire_timeout: u64,
}

/// Snowflake generator identity.
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeSettings {
    /// Worker id baked into minted ids (0-1023)
    pub machine_id: u16,
}

/// Browser access policy.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings, later sources overriding earlier ones:
    /// built-in defaults, then `config/default.toml`, then
    /// `config/{RUN_ENV}.toml`, then environment variables.
    ///
    /// `DATABASE_URL` has no built-in default and must come from a config
    /// file or the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a required
    /// value is missing.
    pub fn load() -> Result<Self, ConfigError> {
        // Pull in .env for local development; absence is not an error.
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("snowflake.machine_id", 1)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        // Unprefixed shorthands for the values operators set most often.
        builder
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "snowflake.machine_id",
                std::env::var("SNOWFLAKE_MACHINE_ID").ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// The address the HTTP listener binds to, as `host:port`.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    /// Connection URL as configured.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
