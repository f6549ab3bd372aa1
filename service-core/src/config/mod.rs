use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Listener settings shared by every HTTP service.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a service configuration from an optional `configuration.*` file
/// overridden by `APP__`-prefixed environment variables.
///
/// Keys listed in `list_keys` (dotted, lower-case) are parsed from
/// comma-separated environment values into arrays.
pub fn load<T: DeserializeOwned>(list_keys: &[&str]) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let mut env = Environment::with_prefix("APP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);
    if !list_keys.is_empty() {
        env = env.list_separator(",");
        for key in list_keys {
            env = env.with_list_parse_key(key);
        }
    }

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(env)
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_bind_all_interfaces_on_3001() {
        let server = ServerConfig::default();
        assert_eq!(server.address(), "0.0.0.0:3001");
    }

    #[test]
    fn missing_server_fields_fall_back_to_defaults() {
        let server: ServerConfig = serde_json::from_str(r#"{"port": 0}"#).unwrap();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 0);
    }
}
