use std::{
    env::{self, VarError},
    path::PathBuf,
};

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";
const DESCRIPTIONS_PATH_KEY: &str = "DESCRIPTIONS_PATH";

const DEFAULT_SERVER_PORT: &str = "3000";
const DEFAULT_DESCRIPTIONS_PATH: &str = "descriptions.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub descriptions_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Config>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let server_port = load_or_default(&lookup, SERVER_PORT_KEY, DEFAULT_SERVER_PORT)?;
        server_port
            .parse::<u16>()
            .with_context(|| format!("{} is not a valid port: {}", SERVER_PORT_KEY, server_port))?;

        let descriptions_path =
            load_or_default(&lookup, DESCRIPTIONS_PATH_KEY, DEFAULT_DESCRIPTIONS_PATH)?.into();

        Ok(Config {
            server_port,
            descriptions_path,
        })
    }
}

fn load_or_default<F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(err) => Err(err).with_context(|| format!("failed to load environment variable {}", key)),
    }
}
