pub mod auth;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod query;
pub mod response;
pub mod scalars;
pub mod types;

// Re-export key types at crate root for convenience.
pub use client::Client;
pub use error::StorefrontError;
pub use query::QueryBuilder;
pub use response::ResponseObject;
pub use scalars::Id;
pub use types::ResponseView;
