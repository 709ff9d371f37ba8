//! Client core for the `sample-a` echo service tool.
//!
//! # Overview
//! Fetches IP information from an httpbin-style echo service, posts JSON
//! payloads to it, and turns key/value input into an `ApiResponse` record.
//!
//! # Design
//! - `EchoClient` is stateless: it holds only `base_url` and splits each
//!   remote operation into `build_*` (request) and `parse_*` (response).
//! - `Transport` executes a single request; `UreqTransport` opens and drops
//!   its own agent per call.
//! - `SampleService` wires the two together for the remote calls;
//!   `process_data` is the pure local transform.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{EchoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{process_data, SampleService};
pub use transport::{Transport, UreqTransport};
pub use types::{ApiResponse, JsonMap};
