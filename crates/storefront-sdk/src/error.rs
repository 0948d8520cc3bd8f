//! Error types for the Storefront SDK.
//!
//! [`StorefrontError`] covers schema-conformance failures during
//! deserialization, misuse of response accessors, HTTP transport errors,
//! and GraphQL-level errors returned by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single GraphQL error from the API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// Errors that can occur when building queries against or deserializing
/// responses from the Storefront API.
#[derive(Debug)]
pub enum StorefrontError {
    /// Response JSON did not match the declared shape of a field.
    SchemaViolation {
        type_name: String,
        field: String,
        value: serde_json::Value,
    },
    /// A response field was read that was never part of the originating
    /// query selection (or was read under the wrong alias).
    FieldNotQueried { type_name: String, key: String },
    /// A response field was read through an accessor of the wrong kind.
    FieldKindMismatch {
        type_name: String,
        key: String,
        expected: &'static str,
    },
    /// Authentication failed (invalid or expired access token).
    Authentication(String),
    /// Forbidden (insufficient permissions).
    Forbidden(String),
    /// Request was rate-limited.
    RateLimited {
        retry_after: Option<f64>,
        message: String,
    },
    /// Network or HTTP transport error.
    Network(reqwest::Error),
    /// GraphQL errors returned by the API.
    GraphQL {
        errors: Vec<GraphQLError>,
        operation_name: Option<String>,
    },
    /// Non-2xx HTTP response not covered by a more specific variant.
    Http { status: u16, body: String },
    /// The response carried no usable data payload.
    MissingData(String),
    /// Client configuration error (no token or shop domain found).
    AuthConfig(String),
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaViolation {
                type_name,
                field,
                value,
            } => write!(
                f,
                "Schema violation: {}.{} cannot hold {}",
                type_name, field, value
            ),
            Self::FieldNotQueried { type_name, key } => write!(
                f,
                "Field '{}' on {} was not part of the original query",
                key, type_name
            ),
            Self::FieldKindMismatch {
                type_name,
                key,
                expected,
            } => write!(
                f,
                "Field '{}' on {} was read as {} but holds a different kind",
                key, type_name, expected
            ),
            Self::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::RateLimited { message, .. } => write!(f, "Rate limited: {}", message),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::GraphQL {
                errors,
                operation_name,
            } => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        let mut parts = vec![e.message.clone()];
                        if let Some(path) = &e.path {
                            let path_str: Vec<String> =
                                path.iter().map(|p| p.to_string()).collect();
                            parts.push(format!("at {}", path_str.join(".")));
                        }
                        if let Some(ext) = &e.extensions {
                            parts.push(format!("({})", ext));
                        }
                        parts.join(" ")
                    })
                    .collect();
                if let Some(name) = operation_name {
                    write!(f, "GraphQL errors in {}: {}", name, msgs.join("; "))
                } else {
                    write!(f, "GraphQL errors: {}", msgs.join("; "))
                }
            }
            Self::Http { status, body } => write!(f, "HTTP error {}: {}", status, body),
            Self::MissingData(path) => write!(f, "Missing data at path: {}", path),
            Self::AuthConfig(msg) => write!(f, "Auth configuration error: {}", msg),
        }
    }
}

impl std::error::Error for StorefrontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}
