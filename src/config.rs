//! Listening address, read from the custom-handler environment.
//!
//! The Functions host exports `FUNCTIONS_CUSTOMHANDLER_PORT` before starting
//! the handler process. `FUNCTIONS_CUSTOMHANDLER_HOST` may override the bind
//! host for local runs.

use std::net::SocketAddr;

use serde::Deserialize;

const ENV_PREFIX: &str = "FUNCTIONS_CUSTOMHANDLER";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads from the process environment, falling back to `127.0.0.1:3000`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads from an explicit environment source. Tests pass a fixed map via
    /// [`config::Environment::source`].
    pub fn load_from(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .add_source(env.prefix_separator("_").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, config::ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| config::ConfigError::Message(format!("invalid address {}:{}: {e}", self.host, self.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<config::Map<String, String>>();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::load_from(env(&[])).unwrap();
        assert_eq!(cfg, Config { host: "127.0.0.1".into(), port: 3000 });
        assert_eq!(cfg.socket_addr().unwrap(), "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn port_from_host_environment() {
        let cfg = Config::load_from(env(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "7071")])).unwrap();
        assert_eq!(cfg.port, 7071);
        assert_eq!(cfg.host, "127.0.0.1");
    }

    #[test]
    fn host_override() {
        let cfg = Config::load_from(env(&[
            ("FUNCTIONS_CUSTOMHANDLER_HOST", "0.0.0.0"),
            ("FUNCTIONS_CUSTOMHANDLER_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(cfg.socket_addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        assert!(Config::load_from(env(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "http")])).is_err());
    }

    #[test]
    fn unparsable_host_is_an_error() {
        let cfg = Config { host: "not a host".into(), port: 1 };
        assert!(cfg.socket_addr().is_err());
    }
}
