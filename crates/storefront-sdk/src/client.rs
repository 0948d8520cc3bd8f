//! Async Storefront API client.
//!
//! The transport seam of the SDK: [`Client`] posts rendered query
//! documents and hands the `data` payload to the response engine. It
//! holds no cache and no state beyond the connection pool; every call is
//! independent.
//!
//! Construct via [`Client::new`], [`Client::from_env`],
//! [`Client::from_file`], or [`Client::auto`].

use crate::auth;
use crate::error::{GraphQLError, StorefrontError};
use crate::response::ResponseObject;
use crate::types::mutation::{MutationQuery, MUTATION};
use crate::types::query_root::{QueryRootQuery, QUERY_ROOT};

/// The Storefront API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

/// Raw GraphQL response shape.
#[derive(serde::Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLError>>,
}

impl Client {
    /// Create a client for a shop domain with an explicit access token.
    pub fn new(
        shop_domain: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, StorefrontError> {
        let token = token.into();
        if token.is_empty() {
            return Err(StorefrontError::AuthConfig(
                "Token cannot be empty".to_string(),
            ));
        }
        let shop_domain = shop_domain.into();
        if shop_domain.is_empty() {
            return Err(StorefrontError::AuthConfig(
                "Shop domain cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            token,
            base_url: format!("https://{}/api/graphql", shop_domain),
        })
    }

    /// Create a client from the `STOREFRONT_SHOP_DOMAIN` and
    /// `STOREFRONT_API_TOKEN` environment variables.
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::new(auth::shop_domain_from_env()?, auth::token_from_env()?)
    }

    /// Create a client with the token read from `~/.storefront_api_token`.
    pub fn from_file() -> Result<Self, StorefrontError> {
        Self::new(auth::shop_domain_from_env()?, auth::token_from_file()?)
    }

    /// Create a client by auto-detecting the token (env -> file).
    pub fn auto() -> Result<Self, StorefrontError> {
        Self::new(auth::shop_domain_from_env()?, auth::auto_token()?)
    }

    /// Execute a query operation and deserialize the `data` object into a
    /// typed response tree.
    pub async fn query(&self, query: &QueryRootQuery) -> Result<ResponseObject, StorefrontError> {
        let document = query.build();
        let data = self.execute(&document).await?;
        ResponseObject::from_json(&QUERY_ROOT, &data)
    }

    /// Execute a mutation operation and deserialize the `data` object into
    /// a typed response tree.
    pub async fn mutation(
        &self,
        mutation: &MutationQuery,
    ) -> Result<ResponseObject, StorefrontError> {
        let document = mutation.build();
        let data = self.execute(&document).await?;
        ResponseObject::from_json(&MUTATION, &data)
    }

    /// POST a GraphQL document and return the raw `data` JSON object.
    pub async fn execute(
        &self,
        document: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>, StorefrontError> {
        tracing::debug!(document_len = document.len(), "dispatching GraphQL document");
        let body = serde_json::json!({ "query": document });

        let response = self
            .http
            .post(&self.base_url)
            .header("X-Storefront-Access-Token", &self.token)
            .header("Content-Type", "application/json")
            .header(
                "User-Agent",
                format!("storefront-sdk/{}", env!("CARGO_PKG_VERSION")),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "storefront response");
        if status == 401 || status == 403 {
            let text = response.text().await.unwrap_or_default();
            if status == 401 {
                return Err(StorefrontError::Authentication(text));
            }
            return Err(StorefrontError::Forbidden(text));
        }
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<f64>().ok());
            let text = response.text().await.unwrap_or_default();
            return Err(StorefrontError::RateLimited {
                retry_after,
                message: text,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorefrontError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let gql_response: GraphQLResponse = response.json().await?;

        // Check for GraphQL-level errors.
        if let Some(errors) = gql_response.errors {
            if !errors.is_empty() {
                let first_msg = errors[0].message.to_lowercase();
                if first_msg.contains("authentication") || first_msg.contains("unauthorized") {
                    return Err(StorefrontError::Authentication(errors[0].message.clone()));
                }
                // Our documents are unnamed; report the operation kind.
                let operation_name = document
                    .split('{')
                    .next()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from);
                return Err(StorefrontError::GraphQL {
                    errors,
                    operation_name,
                });
            }
        }

        let data = gql_response
            .data
            .ok_or_else(|| StorefrontError::MissingData("No data in response".to_string()))?;

        match data {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(StorefrontError::MissingData(format!(
                "Expected a data object, got {}",
                other
            ))),
        }
    }

    /// Override the base URL (for testing against mock servers).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Allow integration tests (in tests/ directory) to set base URL.
    #[doc(hidden)]
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}
