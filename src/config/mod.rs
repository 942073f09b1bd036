use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

/// Fallback signing secret. Fine for local development, never for production.
pub static INSECURE_JWT_SECRET: &str = "supersecret";

#[derive(Debug, Deserialize)]
pub struct Config {
    host: Host,
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_jwt")]
    jwt: String,
    database_uri: String,
    #[serde(default = "default_static_dir")]
    static_dir: String,
    #[serde(default)]
    docs: bool,
}

fn default_jwt() -> String {
    INSECURE_JWT_SECRET.to_string()
}

fn default_static_dir() -> String {
    String::from("public")
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let read_cfg = |use_local| -> ConfigResult<Self> {
                    let bytes = read_config(use_local)?;
                    let config: Self = toml::from_str(&String::from_utf8_lossy(&bytes))?;
                    Ok(config)
                };

                let mut config = match read_cfg(use_local) {
                    Ok(c) => c,
                    Err(e) => {
                        if !matches!(e, error::ConfigError::ConfigNotFound) {
                            crate::error::log_error(&e);
                        }
                        tracing::error!("Config not found.");
                        std::process::exit(1);
                    }
                };

                config.apply_env_overrides();
                config
            })
            .await
    }

    /// Environment wins over the file: `DATABASE_URL` and `JWT_SECRET`.
    fn apply_env_overrides(&mut self) {
        if let Ok(uri) = std::env::var("DATABASE_URL") {
            self.app.database_uri = uri;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.app.jwt = secret;
        }

        if self.app.jwt == INSECURE_JWT_SECRET {
            tracing::warn!("using the built-in JWT secret; set JWT_SECRET before deploying");
        }
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn jwt(&self) -> &str {
        &self.jwt
    }

    #[inline]
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    #[inline]
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn config_test() {
        let config = Config::get_or_init(true).await;
        assert_eq!(config.host().bindto(), "127.0.0.1:10000"); // defaults
    }

    #[test]
    fn env_overrides_test() {
        let mut config: Config = toml::from_str(
            r#"
            [host]
            bindto = "127.0.0.1:10000"

            [app]
            database_uri = "postgres://localhost/overridden"
            "#,
        )
        .unwrap();

        assert_eq!(config.app().jwt(), INSECURE_JWT_SECRET);
        assert_eq!(config.app().static_dir(), "public");
        assert!(!config.app().docs());

        unsafe {
            std::env::set_var("JWT_SECRET", "from-env");
        }
        config.apply_env_overrides();
        assert_eq!(config.app().jwt(), "from-env");
        unsafe {
            std::env::remove_var("JWT_SECRET");
        }
    }
}
