//! Response schemas
//!
//! A response schema is any `serde` type: deserializing a decoded JSON body
//! into it both validates the shape and produces the typed value.
//!
//! # Version negotiation
//!
//! Some endpoints evolve their response shape over time. The server reports
//! which shape it sent in the `trigger-version` response header, and the
//! client decodes into a [`VersionedResponse`]: a tagged union with one arm per
//! [`ApiVersion`] it understands and one `Unversioned` fallback arm.

mod version;

pub use version::{
    decode_body, decode_versioned, negotiate, ApiVersion, ResponseVersion, VersionedResponse,
    VERSION_HEADER,
};
