//! Stateless request builder and status reader for the probe.
//!
//! # Design
//! `ProbeClient` holds only a `RequestDescriptor`. `build_request` produces
//! the `HttpRequest` and `parse_response` consumes the `HttpResponse`; the
//! caller executes the round-trip in between, keeping this crate
//! deterministic and free of I/O.

use crate::descriptor::RequestDescriptor;
use crate::error::ProbeError;
use crate::http::{HttpRequest, HttpResponse};

const MIN_STATUS: u16 = 100;
const MAX_STATUS: u16 = 599;

#[derive(Debug, Clone, Default)]
pub struct ProbeClient {
    descriptor: RequestDescriptor,
}

impl ProbeClient {
    pub fn new(descriptor: RequestDescriptor) -> Self {
        Self { descriptor }
    }

    /// The probe request: no body.
    pub fn build_request(&self) -> HttpRequest {
        HttpRequest {
            method: self.descriptor.method(),
            url: self.descriptor.url(),
            body: None,
        }
    }

    /// Extract the status code. Every valid status is a successful probe,
    /// including 4xx and 5xx.
    pub fn parse_response(&self, response: &HttpResponse) -> Result<u16, ProbeError> {
        check_status(response.status)
    }
}

fn check_status(status: u16) -> Result<u16, ProbeError> {
    if (MIN_STATUS..=MAX_STATUS).contains(&status) {
        Ok(status)
    } else {
        Err(ProbeError::InvalidStatus(status))
    }
}

/// The single line a probe reports, without trailing newline.
pub fn format_status_line(status: u16) -> String {
    format!("statusCode: {status}")
}
