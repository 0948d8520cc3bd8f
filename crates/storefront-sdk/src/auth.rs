use crate::error::StorefrontError;
use std::path::PathBuf;

/// Resolve a Storefront access token from the filesystem.
/// Reads `~/.storefront_api_token`.
pub fn token_from_file() -> Result<String, StorefrontError> {
    let path = token_file_path();
    std::fs::read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            StorefrontError::AuthConfig(format!(
                "Could not read token file {}: {}",
                path.display(),
                e
            ))
        })
}

/// Resolve a Storefront access token from the environment variable
/// `STOREFRONT_API_TOKEN`.
pub fn token_from_env() -> Result<String, StorefrontError> {
    std::env::var("STOREFRONT_API_TOKEN").map_err(|_| {
        StorefrontError::AuthConfig("STOREFRONT_API_TOKEN environment variable not set".to_string())
    })
}

/// Resolve a Storefront access token with precedence: env var -> file.
pub fn auto_token() -> Result<String, StorefrontError> {
    token_from_env().or_else(|_| token_from_file())
}

/// Resolve the shop domain from the environment variable
/// `STOREFRONT_SHOP_DOMAIN`.
pub fn shop_domain_from_env() -> Result<String, StorefrontError> {
    std::env::var("STOREFRONT_SHOP_DOMAIN").map_err(|_| {
        StorefrontError::AuthConfig(
            "STOREFRONT_SHOP_DOMAIN environment variable not set".to_string(),
        )
    })
}

fn token_file_path() -> PathBuf {
    home_dir().join(".storefront_api_token")
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("~"))
}
