///
/// sonar_qube.rs
///
/// Client for the SonarQube integration settings resource.
///
/// Four pass-through operations (list/create/update/delete) against
/// the settings API. Request shape lives in the endpoint constructors
/// so it can be checked without a transport; execution delegates to
/// core::http::HttpClient and failures propagate unchanged.
///

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::clients::{ApiResponse, ResourceId};
use crate::core::{
    endpoint::{Endpoint, Method},
    http::{HttpClient, HttpError}
};

/************ Static, Global Constants ********************/

pub const SONAR_QUBE_PATH: &str = "settings/sonar_qube";

/************ SonarQubePayload ****************************/
/* Body of create/update requests. Shape is owned by the server
 * contract; nothing is validated locally.
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarQubePayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub host_url: String,
    #[serde(default)]
    pub token: String,
}

/************ SonarQube ***********************************/
/* A single configured SonarQube integration as returned by list */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarQube {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub host_url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub create_user: Option<String>,
    #[serde(default)]
    pub update_user: Option<String>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

/************ Endpoint Constructors ***********************/
/* Pure request descriptions, one per operation. */

pub fn list_endpoint() -> Endpoint<SonarQubePayload> {
    Endpoint::builder(SONAR_QUBE_PATH).finish()
}

pub fn create_endpoint(payload: SonarQubePayload) -> Endpoint<SonarQubePayload> {
    Endpoint::builder(SONAR_QUBE_PATH)
        .method(Method::Post)
        .body(payload)
        .finish()
}

pub fn update_endpoint(id: &ResourceId, payload: SonarQubePayload) -> Endpoint<SonarQubePayload> {
    Endpoint::builder(item_path(id))
        .method(Method::Put)
        .body(payload)
        .finish()
}

pub fn delete_endpoint(id: &ResourceId) -> Endpoint<SonarQubePayload> {
    Endpoint::builder(item_path(id))
        .method(Method::Delete)
        .finish()
}

fn item_path(id: &ResourceId) -> String {
    format!("{}/{}", SONAR_QUBE_PATH, id.path_segment())
}

/************ SonarQubeClient *****************************/
/* Stateless wrapper binding the endpoint constructors to the
 * shared HttpClient. One outstanding request per call; no retries,
 * caching or response transformation beyond the shared transport.
 */
#[derive(Clone)]
pub struct SonarQubeClient {
    http: Arc<HttpClient>,
}

impl SonarQubeClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<SonarQube>>, HttpError> {
        let endpoint = list_endpoint();
        debug!(path = %endpoint.path, "list sonar_qube settings");
        self.http.request_endpoint(&endpoint).await
    }

    pub async fn create(&self, payload: SonarQubePayload)
        -> Result<ApiResponse<Value>, HttpError> {
        let endpoint = create_endpoint(payload);
        debug!(path = %endpoint.path, "create sonar_qube setting");
        self.http.request_endpoint(&endpoint).await
    }

    pub async fn update(&self, id: &ResourceId, payload: SonarQubePayload)
        -> Result<ApiResponse<Value>, HttpError> {
        let endpoint = update_endpoint(id, payload);
        debug!(path = %endpoint.path, "update sonar_qube setting");
        self.http.request_endpoint(&endpoint).await
    }

    pub async fn delete(&self, id: &ResourceId) -> Result<ApiResponse<Value>, HttpError> {
        let endpoint = delete_endpoint(id);
        debug!(path = %endpoint.path, "delete sonar_qube setting");
        self.http.request_endpoint(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> SonarQubePayload {
        SonarQubePayload {
            name: name.to_string(),
            description: String::new(),
            host_url: String::new(),
            token: String::new(),
        }
    }

    #[test]
    fn list_is_get_on_collection() {
        let endpoint = list_endpoint();
        assert_eq!(endpoint.method, Method::Get);
        assert_eq!(endpoint.path, "settings/sonar_qube");
        assert!(endpoint.body.is_none());
    }

    #[test]
    fn create_is_post_on_collection_with_body() {
        let endpoint = create_endpoint(payload("x"));
        assert_eq!(endpoint.method, Method::Post);
        assert_eq!(endpoint.path, "settings/sonar_qube");

        let body = serde_json::to_value(endpoint.body.unwrap()).unwrap();
        assert_eq!(body["name"], "x");
    }

    #[test]
    fn update_is_put_on_item_with_body() {
        let endpoint = update_endpoint(&ResourceId::from(7u64), payload("y"));
        assert_eq!(endpoint.method, Method::Put);
        assert_eq!(endpoint.path, "settings/sonar_qube/7");

        let body = serde_json::to_value(endpoint.body.unwrap()).unwrap();
        assert_eq!(body["name"], "y");
    }

    #[test]
    fn delete_is_delete_on_item_without_body() {
        let endpoint = delete_endpoint(&ResourceId::from(7u64));
        assert_eq!(endpoint.method, Method::Delete);
        assert_eq!(endpoint.path, "settings/sonar_qube/7");
        assert!(endpoint.body.is_none());
    }

    #[test]
    fn string_id_is_escaped_into_item_path() {
        let endpoint = delete_endpoint(&ResourceId::from("q 1"));
        assert_eq!(endpoint.path, "settings/sonar_qube/q%201");
    }

    #[test]
    fn record_deserializes_from_list_row() {
        let row = serde_json::json!({
            "id": 3,
            "name": "main",
            "description": "primary scanner",
            "host_url": "https://sonar.example",
            "token": "t",
            "create_user": "admin",
            "update_user": "admin",
            "create_time": "2024-05-01T08:00:00Z",
            "update_time": "2024-05-02T08:00:00Z"
        });
        let record: SonarQube = serde_json::from_value(row).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.host_url, "https://sonar.example");
        assert!(record.create_time.is_some());
    }
}
