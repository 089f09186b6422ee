// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # trigger-client
//!
//! Typed async client for the Trigger job orchestration API.
//!
//! ## Features
//!
//! - **Credential resolution**: explicit key or `TRIGGER_API_KEY`, classified as valid, invalid or missing
//! - **Schema-validated fetches**: every response is decoded into a typed model
//! - **Version negotiation**: responses tagged with `trigger-version` decode into the matching variant
//! - **Optional reads**: a `404` on lookups such as connection auth yields `None`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trigger_client::{ApiClient, ClientConfig, Result};
//! use trigger_client::models::GetRunOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Key and URL fall back to TRIGGER_API_KEY / TRIGGER_API_URL
//!     let client = ApiClient::new(ClientConfig::default())?;
//!
//!     let run = client.get_run("run_1234", &GetRunOptions::default()).await?;
//!     println!("{:?}", run.run.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ApiClient                           │
//! │  tasks · events · runs · statuses · triggers · schedules    │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//! ┌──────────────┴─────────────┐   ┌─────────────┴───────────────┐
//! │     CredentialResolver     │   │        SchemaFetcher        │
//! │ explicit key / fallback    │   │ status classification       │
//! │ tr_<env>_<token> check     │   │ JSON + schema validation    │
//! │                            │   │ trigger-version negotiation │
//! └────────────────────────────┘   └─────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document model fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// API key resolution
pub mod credential;

/// Response versions and schema decoding
pub mod schema;

/// Schema-validating HTTP fetch engine
pub mod http;

/// Request and response models
pub mod models;

/// API client
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use credential::{ApiKey, ApiKeyStatus, CredentialResolver, CredentialSource};
pub use http::{FetchOptions, RequestDescription, SchemaFetcher};
pub use schema::{ApiVersion, ResponseVersion, VersionedResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
