use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Typed view of the invocation event. Recognizes the HTTP API v2 shape
/// (`rawPath` + `requestContext.http.method`), the REST API shape (`path` +
/// `httpMethod`), and the bare shape used for direct invocation (`path` +
/// `method`). Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default, rename = "rawPath")]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "requestContext")]
    pub request_context: Option<RequestContext>,
    #[serde(default, rename = "httpMethod")]
    pub http_method: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, rename = "queryStringParameters")]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpDescriptor {
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRoute {
    pub method: Option<String>,
    pub path: String,
}

impl RequestEnvelope {
    /// Total mapping from an arbitrary event value. Events that do not match
    /// any supported envelope shape yield the empty envelope.
    pub fn from_event(event: Value) -> Self {
        serde_json::from_value(event).unwrap_or_default()
    }

    /// Resolves the `(method, path)` pair this event addresses. Method
    /// precedence: nested `requestContext.http.method`, then `httpMethod`,
    /// then `method`. Path precedence: first non-empty of `rawPath` and
    /// `path`, else the empty string.
    pub fn canonical_route(&self) -> CanonicalRoute {
        let method = self
            .request_context
            .as_ref()
            .and_then(|context| context.http.as_ref())
            .and_then(|http| http.method.clone())
            .or_else(|| self.http_method.clone())
            .or_else(|| self.method.clone());

        let path = [self.raw_path.as_deref(), self.path.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or("")
            .to_string();

        CanonicalRoute { method, path }
    }

    /// Query parameter lookup; an absent or null mapping behaves as empty.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

pub fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub fn error_response(status_code: u16, message: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: json!({ "error": message }).to_string(),
    }
}
