//! Typed client for the Salt Edge Account Information API v5.
//!
//! ```no_run
//! use saltedge_client::config::SaltEdgeConfig;
//! use saltedge_client::saltedge::{SaltEdgeClient, SaltEdgeOperations, collect_all};
//!
//! # async fn example() -> saltedge_client::error::Result<()> {
//! let client = SaltEdgeClient::new(&SaltEdgeConfig::new("app-id", "secret"))?;
//! let connections = collect_all(|from_id| {
//!     let client = &client;
//!     async move { client.list_connections("customer-id", from_id.as_deref()).await }
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod saltedge;

pub use error::{Result, SaltEdgeError};
pub use saltedge::{SaltEdgeClient, SaltEdgeOperations};
