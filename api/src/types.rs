use serde::{Deserialize, Deserializer, Serialize};

use crate::ApiError;

/// JSON body posted to the visualization endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct VisualizationRequest<'a> {
    pub query: &'a str,
}

/// JSON body returned by the visualization endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisualizationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_snippet: String,
    /// A missing flag counts as failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VisualizationResponse {
    /// Turn a `success: false` response into [`ApiError::Backend`].
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Backend(self.error.filter(|e| !e.is_empty())))
        }
    }
}

/// Failure bodies often carry `null` where a string would go.
fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
