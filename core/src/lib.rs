//! I/O-free core of the HTTPS probe.
//!
//! # Overview
//! Builds the probe's `HttpRequest` from a `RequestDescriptor` and reads the
//! status code out of an `HttpResponse` without touching the network
//! (host-does-IO pattern). The `https-probe` crate executes the round-trip.
//!
//! # Design
//! - `RequestDescriptor` is validated on construction and immutable after.
//! - `ProbeClient` is stateless; it holds only its descriptor.
//! - Any status in 100-599 is a successful probe. Only transport failures
//!   and out-of-range statuses are errors.

pub mod client;
pub mod descriptor;
pub mod error;
pub mod http;

pub use client::{format_status_line, ProbeClient};
pub use descriptor::RequestDescriptor;
pub use error::ProbeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Scheme};
