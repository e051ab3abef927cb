///
/// http.rs
///
/// Construction of HttpClient and methods for
/// safe requests on the console API.
///
/// AUTHORIZATION assumes format "Bearer {}" when a token is configured.
/// Only works for cloneable requests, need separate impl for streaming bodies
///

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT},
    Client,
    ClientBuilder,
    RequestBuilder,
    Response,
    StatusCode
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::time::sleep;
use url::Url;

use crate::core::config::{BackoffConfig, HttpConfig, RetryConfig};
use crate::core::endpoint::{Endpoint, Method};

/************ HttpError ***********************************/
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to build URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid header {name}: {value}")]
    Header { name: String, value: String },
    #[error("failed to clone request for retry")]
    UnclonableRequest,
    #[error("http status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/************ HttpClient **********************************/
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: HttpConfig, // see config.rs
}

/************ HttpClient Implementations ******************/
/* Implementations for safe requests to API with retry/backoff */
impl HttpClient {
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();

        // Get token (when configured) and user agent into header
        if let Some(token) = &config.token {
            let bearer = format!("Bearer {}", token.0);
            let value  = HeaderValue::from_str(&bearer)
                .map_err(|_| HttpError::Header {
                    name: AUTHORIZATION.to_string(),
                    value: "Bearer <token>".into()
                })?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| HttpError::Header {
                    name: USER_AGENT.to_string(),
                    value: config.user_agent.clone()
                })?
        );

        // Insert all headers provided by config
        for (k, v) in &config.default_headers {
            let key: reqwest::header::HeaderName = k.parse()
                .map_err(|_| HttpError::Header { name: k.clone(), value: v.clone() })?;
            let val = HeaderValue::from_str(v)
                .map_err(|_| HttpError::Header { name: k.clone(), value: v.clone() })?;
            headers.insert(key, val);
        }

        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects as usize))
            .build()?;

        Ok(Self{ client, base_url: config.base_url.clone(), config })
    }

    /******** HttpClient::request_endpoint ****************/
    /* Issues the request described by an Endpoint and deserializes
     * the JSON response.
     *
     * Failures are transport failures: they carry no interpretation
     * beyond the retry policy and propagate unchanged to the caller.
     */
    pub async fn request_endpoint<T, B>(&self, endpoint: &Endpoint<B>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: serde::Serialize
    {
        let url = self.base_url.join(&endpoint.path)?;
        let mut req = match endpoint.method {
            Method::Get    => self.client.get(url),
            Method::Post   => self.client.post(url),
            Method::Put    => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if !endpoint.query.is_empty() {
            req = req.query(&endpoint.query);
        }
        if let Some(body) = endpoint.body.as_ref() {
            req = req.json(body);
        }

        let resp = self.execute_with_retry(req, endpoint.retry.as_ref()).await?;
        Ok(resp.json().await?)
    }

    async fn execute_with_retry(&self, req: RequestBuilder, retry_override: Option<&RetryConfig>)
        -> Result<Response, HttpError> {
        let retry = retry_override.unwrap_or(&self.config.retry);
        let mut attempt: u32 = 0;

        loop {
            let builder = req.try_clone().ok_or(HttpError::UnclonableRequest)?;

            // Match return status with correct state action
            match builder.send().await {
                // Successes/Retryables
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                Ok(resp) if (self.should_retry_status(resp.status()) &&
                        attempt < retry.max_retries) => {
                    self.backoff_sleep(attempt, &retry.backoff).await;
                }

                // Errors
                Ok(resp) => {
                    let status = resp.status();
                    let body   = resp.text().await.unwrap_or_default();
                    return Err(HttpError::Status { status, body })
                }

                // Most likely error, possible retry
                Err(err) if (self.is_retryable_error(&err, retry) &&
                        attempt < retry.max_retries) => {
                    self.backoff_sleep(attempt, &retry.backoff).await;
                }

                // Error
                Err(err) => return Err(HttpError::Reqwest(err)),
            }

            attempt += 1;
        }
    }

    fn should_retry_status(&self, status: StatusCode) -> bool {
        if status.is_server_error() {
            return true;
        }

        // Check Vec<u16> of retryable status from configuration against Code
        self.config.retry.retryable_statuses.iter()
            .any(|s| StatusCode::from_u16(*s).map_or(false, |code| code == status))
    }

    fn is_retryable_error(&self, err: &reqwest::Error, retry: &RetryConfig) -> bool {
        if err.is_timeout() || err.is_request() || err.is_connect() {
            return true;
        }

        // Check if Msg contains any keywords from Vec<String> denoting we can retry
        let msg = err.to_string();
        retry.retryable_errors.iter().any(|s| msg.contains(s))
    }

    async fn backoff_sleep(&self, attempt: u32, backoff: &BackoffConfig) {
        // Exponential backoff
        let pow = backoff.multiplier.powi(attempt as i32);
        let mut delay = backoff.base.mul_f32(pow);
        if delay > backoff.max {
            delay = backoff.max;
        }

        sleep(delay).await;
    }
}
