///
/// clients/mod.rs
///
/// Declares the concrete resource clients of the settings console
///

pub mod sonar_qube;

use std::fmt;

use serde::{Deserialize, Serialize};

/************ ResourceId **********************************/
/* Opaque identifier addressing a single resource instance.
 * Constructible from integers and strings; never parsed here.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Interpolation into an item path: standard URL path escaping only
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/************ ApiResponse *********************************/
/* Response envelope shared by every settings API endpoint.
 * The client returns it uninterpreted; deciding success from
 * `code` belongs to the calling view layer.
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_interpolates_verbatim() {
        let id = ResourceId::from(7u64);
        assert_eq!(id.path_segment(), "7");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn string_id_interpolates_verbatim() {
        let id = ResourceId::from("qube-1");
        assert_eq!(id.path_segment(), "qube-1");
    }

    #[test]
    fn reserved_characters_are_path_escaped() {
        let id = ResourceId::from("a/b c");
        assert_eq!(id.path_segment(), "a%2Fb%20c");
    }

    #[test]
    fn envelope_deserializes_without_data() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code": "Success", "msg": ""}"#).unwrap();
        assert_eq!(resp.code, "Success");
        assert!(resp.data.is_none());
    }

    #[test]
    fn envelope_deserializes_with_data() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code": "Success", "data": [1, 2]}"#).unwrap();
        assert_eq!(resp.data, Some(vec![1, 2]));
    }
}
