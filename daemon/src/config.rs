// Configuration parameters.
// This is using a toml file with the following syntax:
// [general]
// host = "0.0.0.0"
// port = 3000
// verbose_log = false
//
// [http]
// root_path = "./public"
//
// [env]
// path = "../.env"
// data_dir = "./data"
// strategy = "quoted-escaped"

use envfile::Strategy;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO Error: {0}")]
    Io(#[from] ::std::io::Error),
}

type Result<T> = ::std::result::Result<T, Error>;

#[derive(Clone, Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub verbose_log: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnvFileConfig {
    #[serde(default = "default_env_path")]
    pub path: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub http: HttpConfig,
    pub env: EnvFileConfig,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_root_path() -> String {
    "./public".into()
}

// The env file lives one directory above the installer itself.
fn default_env_path() -> String {
    "../.env".into()
}

fn default_data_dir() -> String {
    "./data".into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: GeneralConfig {
                host: default_host(),
                port: default_port(),
                verbose_log: false,
            },
            http: HttpConfig {
                root_path: default_root_path(),
            },
            env: EnvFileConfig {
                path: default_env_path(),
                data_dir: default_data_dir(),
                strategy: Strategy::default(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let mut file = File::open(path.into().as_ref() as &Path)?;
        let mut source = String::new();
        file.read_to_string(&mut source)?;
        toml::from_str(&source).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use envfile::Strategy;

    #[test]
    fn unknown_config() {
        let err = Config::from_file("unknown_test_config.toml").unwrap_err();
        // The logged message must carry the underlying os cause.
        let message = format!("{}", err);
        assert!(message.starts_with("IO Error: "));
        assert!(message.len() > "IO Error: ".len());
    }

    #[test]
    fn invalid_config() {
        let config = Config::from_file("invalid_test_config.toml");
        assert!(config.is_err());
    }

    #[test]
    fn valid_config() {
        let config = Config::from_file("valid_test_config.toml").unwrap();
        assert_eq!(config.general.host, "127.0.0.1");
        assert_eq!(config.general.port, 8081);
        assert_eq!(config.general.verbose_log, false);
        assert_eq!(config.http.root_path, "./tests/public");
        assert_eq!(config.env.path, "/tmp/.env");
        assert_eq!(config.env.data_dir, "./data");
        assert_eq!(config.env.strategy, Strategy::UnquotedTrimmed);
    }

    #[test]
    fn defaults_match_the_installer_literals() {
        let config = Config::default();
        assert_eq!(config.general.port, 3000);
        assert_eq!(config.http.root_path, "./public");
        assert_eq!(config.env.path, "../.env");
        assert_eq!(config.env.data_dir, "./data");
        assert_eq!(config.env.strategy, Strategy::QuotedEscaped);
    }
}
