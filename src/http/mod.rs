//! Schema fetch engine
//!
//! Issues a described HTTP request, classifies the outcome by status code and
//! decodes the body against a response schema.
//!
//! # Outcome classification
//!
//! - **Optional reads**: `404` on a `GET` marked optional yields `None`
//! - **4xx**: `ClientRequest` carrying the server's `error` message
//! - **Anything but 200**: `UnexpectedStatus`
//! - **200**: body validated against the schema, or against the schema of the
//!   version named in the `trigger-version` header
//!
//! There are no retries at this layer.

mod client;
mod request;

pub use client::SchemaFetcher;
pub use request::{FetchOptions, RequestDescription};
