//! Credential resolution
//!
//! Classifies the API key used to authenticate every request.
//!
//! The key comes from explicit configuration or, when that is absent, from an
//! injected [`CredentialSource`]. Resolution never fails: it yields an
//! [`ApiKeyStatus`] that is only turned into an [`Error`](crate::Error) at the
//! call site that needs a valid key.

mod resolver;
mod types;

pub use resolver::{CredentialResolver, CredentialSource, ProcessEnv, StaticSource};
pub use types::{ApiKey, ApiKeyStatus};
