//! Runtime configuration.
//!
//! Environment variables take precedence over built-in defaults; there is no
//! config file. The session snapshot lives under the data directory.

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

const ENV_API_URL: &str = "JOBCMD_API_URL";
const ENV_DATA_DIR: &str = "JOBCMD_DATA_DIR";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let raw = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| anyhow!("Invalid {}: {}", ENV_API_URL, e))?;

        let data_dir = match env::var(ENV_DATA_DIR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .ok_or_else(|| anyhow!("Could not determine a data directory"))?
                .join("jobcmd"),
        };

        Ok(Self { api_url, data_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_parses() {
        let url = Url::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(url.scheme(), "http");
    }
}
