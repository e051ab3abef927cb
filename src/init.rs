///
/// init.rs
///
/// Instantiates the console client Config from file
///
/// Uses a console.yaml to configure the Client
///

use std::{collections::HashMap, fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::core::config::{
    ApiToken, ClientConfig, HttpConfig, LoggingConfig, RetryConfig
};

/************ Configuration Load Errors *******************/

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("io: {0}")]
    IO(#[from] std::io::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("url parse: {0}")]
    Url(#[from] url::ParseError),
    #[error("missing api token env var '{0}'")]
    MissingToken(String)
}

/************ RawClient ***********************************/
/* Same as ClientConfig but wraps over RawHttp which is necessary
 * as we must load the api token from environment so we cannot
 * directly instantiate immediately
 */
#[derive(Debug, Deserialize)]
struct RawClient {
    http: RawHttp,
    #[serde(default)]
    log: LoggingConfig,
}

/************ RawHttp *************************************/
/* See RawClient for explanation. */
#[derive(Debug, Deserialize)]
struct RawHttp {
    base_url: String,
    #[serde(default)]
    token_env: Option<String>,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default = "default_max_redirects")]
    max_redirects: u8,
    #[serde(default)]
    retry: RetryConfig,
    #[serde(default)]
    default_headers: HashMap<String, String>
}

/************ Default Helpers *****************************/
fn default_user_agent() -> String { "settings-console/0.1".into() }
fn default_timeout_secs() -> u64  { 30 }
fn default_max_redirects() -> u8  { 5 }

/************ load_client_from_yaml() *********************/
/* Loads new ClientConfig from YAML
 *
 * Caller Provides:
 *   path to console.yaml
 */
pub fn load_client_from_yaml(path: impl AsRef<Path>)
    -> Result<ClientConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path)?;
    let raw_client: RawClient = serde_yaml::from_str(&raw)?;

    let token = match &raw_client.http.token_env {
        Some(env) => {
            let value = std::env::var(env)
                .map_err(|_| ConfigLoadError::MissingToken(env.clone()))?;
            Some(ApiToken(value))
        }
        None => None
    };

    let http = HttpConfig {
        base_url: Url::parse(&raw_client.http.base_url)?,
        token,
        user_agent: raw_client.http.user_agent.clone(),
        timeout: Duration::from_secs(raw_client.http.timeout_secs),
        max_redirects: raw_client.http.max_redirects,
        retry: raw_client.http.retry.clone(),
        default_headers: raw_client.http.default_headers.clone()
    };

    Ok(ClientConfig {
        http,
        log: raw_client.log.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_minimal_config_with_defaults() {
        let file = write_config("http:\n  base_url: \"https://console.example/api/v1/\"\n");
        let config = load_client_from_yaml(file.path()).unwrap();

        assert_eq!(config.http.base_url.as_str(), "https://console.example/api/v1/");
        assert!(config.http.token.is_none());
        assert_eq!(config.http.timeout, Duration::from_secs(30));
        assert_eq!(config.http.max_redirects, 5);
        assert_eq!(config.http.retry.max_retries, 3);
    }

    #[test]
    fn missing_token_env_is_an_error() {
        let file = write_config(concat!(
            "http:\n",
            "  base_url: \"https://console.example/api/v1/\"\n",
            "  token_env: \"SETTINGS_CONSOLE_TOKEN_DOES_NOT_EXIST\"\n"
        ));
        let err = load_client_from_yaml(file.path()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingToken(_)));
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let file = write_config("http:\n  base_url: \"not a url\"\n");
        let err = load_client_from_yaml(file.path()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Url(_)));
    }
}
