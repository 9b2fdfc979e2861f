//! Resource Fetcher
//!
//! Retrieves a named collection from the fitness API and normalizes it into
//! an ordered list of records.
//!
//! ## Contract
//!
//! - One GET to `{base_url}/api/{resource}/` per fetch; no retry, no cache
//! - `{"results": [...]}` and bare arrays both yield their records in order
//! - Any other payload yields an empty list, never an error
//! - Non-2xx status, transport and decode failures surface as [`FetchError`]
//! - A [`CancellationToken`] ties the request to the lifetime of its view

mod cancel;
mod client;
mod error;
pub mod normalize;

pub use cancel::{CancellationToken, DropGuard};
pub use client::{ClientConfig, ResourceClient};
pub use error::{FetchError, FetchResult};
pub use normalize::{normalize, PayloadShape};
