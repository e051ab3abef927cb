///
/// config.rs
///
/// Configuration structures for the console API client base.
///
/// Client is thread safe assuming configuration provided is valid
///

use std::collections::HashMap;
use std::time::Duration;

use serde::{Serialize, Deserialize};
use url::Url;

/************ ClientConfig ********************************/
/* Parent Configuration fully detailing behavior of the Client
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub http: HttpConfig,
    #[serde(default)]
    pub log: LoggingConfig,
}

/************ HttpConfig **********************************/
/* Stores default information passed over https to the console API
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub base_url: Url,
    #[serde(default)]
    pub token: Option<ApiToken>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u8,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub default_headers: HashMap<String, String>
}

/************ ApiToken ************************************/
/* Explicit binding over String */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToken(pub String);

/************ RetryConfig *********************************/
/* Configurable information for client retrying a single endpoint
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub backoff: BackoffConfig,
    #[serde(default)]
    pub retryable_statuses: Vec<u16>,
    #[serde(default)]
    pub retryable_errors: Vec<String>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff: BackoffConfig::default(),
            retryable_statuses: Vec::new(),
            retryable_errors: Vec::new()
        }
    }
}

/************ BackoffConfig *******************************/
/* Configurable information for client waiting before retry
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    #[serde(default = "default_backoff_base")]
    pub base: Duration,
    #[serde(default = "default_backoff_max")]
    pub max: Duration,
    #[serde(default = "default_backoff_multiplier")]
    pub multiplier: f32
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base: default_backoff_base(),
            max: default_backoff_max(),
            multiplier: default_backoff_multiplier()
        }
    }
}

/************ Logging Supporting **************************/

/************ LogLevel ************************************/
/* Logger State Enum */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

/************ LoggingConfig *******************************/
/* Configuration for supporting logger
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_level: default_log_level(), json: false }
    }
}

/************ Defaults ************************************/
fn default_user_agent() -> String { "settings-console/0.1".into() }
fn default_timeout() -> Duration { Duration::from_secs(30) }
fn default_max_redirects() -> u8 { 5 }
fn default_max_retries() -> u32 { 3 }
fn default_backoff_base() -> Duration { Duration::from_millis(200) }
fn default_backoff_max() -> Duration { Duration::from_secs(30) }
fn default_backoff_multiplier() -> f32 { 2.0 }
fn default_log_level() -> LogLevel { LogLevel::Info }
