///
/// endpoint.rs
///
/// Details the Endpoint struct from which clients formulate
/// a request.
///
/// An Endpoint is a pure description: method, path relative to the
/// configured base URL, query pairs and optional JSON body. Execution
/// belongs to http::HttpClient.
///

use serde::Serialize;
use crate::core::config::RetryConfig;

/************ Endpoint::Method ****************************/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get    => "GET",
            Method::Post   => "POST",
            Method::Put    => "PUT",
            Method::Delete => "DELETE"
        }
    }
}

/************ Endpoint ************************************/
/* Exposed struct for a single endpoint containing all
 * information that the Client needs to issue a request.
 */
#[derive(Clone, Debug)]
pub struct Endpoint<Body = serde_json::Value> {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Body>,
    pub retry: Option<RetryConfig>,
}

impl<Body: Clone> Endpoint<Body> {
    // Call to Constructor Helper
    pub fn builder(path: impl Into<String>) -> EndpointBuilder<Body> {
        EndpointBuilder::new(path)
    }
}

/************ EndpointBuilder *****************************/
/* Opaque Struct which implements helper functions for
 * building a single endpoint.
 */
#[derive(Clone, Debug)]
pub struct EndpointBuilder<Body = serde_json::Value> {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Body>,
    retry: Option<RetryConfig>,
}

impl<Body> EndpointBuilder<Body> {
    // New/default
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
            retry: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Body) -> Self
    where
        Body: Serialize
    {
        self.body = Some(body);
        self
    }

    pub fn retry_override(mut self, retry: Option<RetryConfig>) -> Self {
        self.retry = retry;
        self
    }

    // Conversion from EndpointBuilder -> Endpoint
    pub fn finish(self) -> Endpoint<Body> {
        Endpoint {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
            retry: self.retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_get() {
        let endpoint: Endpoint = Endpoint::builder("settings/ping").finish();
        assert_eq!(endpoint.method, Method::Get);
        assert_eq!(endpoint.path, "settings/ping");
        assert!(endpoint.query.is_empty());
        assert!(endpoint.body.is_none());
    }

    #[test]
    fn builder_sets_method_and_body() {
        let endpoint: Endpoint = Endpoint::builder("settings/ping")
            .method(Method::Put)
            .body(serde_json::json!({"name": "x"}))
            .finish();
        assert_eq!(endpoint.method, Method::Put);
        assert_eq!(endpoint.body, Some(serde_json::json!({"name": "x"})));
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
