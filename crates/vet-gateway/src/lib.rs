//! # vet-gateway
//!
//! Remote Resource Gateway for the review panels.
//!
//! [`ReviewGateway`] turns review operations into single HTTP round trips
//! through a [`Transport`]. Two transports ship with the crate:
//! - [`HttpTransport`]: reqwest against a real backend.
//! - [`MockTransport`]: an in-memory backend with injected latency.
//!
//! Input validation happens before the transport is touched, so a rejected
//! create or schedule never produces a request.

mod gateway;
mod http;
mod mock;
mod response;
mod transport;

pub use gateway::ReviewGateway;
pub use http::HttpTransport;
pub use mock::{MockBackend, MockRoute, MockTransport};
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
