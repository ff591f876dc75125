//! Runtime side of the HTTPS probe.
//!
//! # Overview
//! `probe` sends the one request a `RequestDescriptor` describes and resolves
//! to the response status; `report` writes `statusCode: <code>` to a sink.
//! The request/response shapes come from `probe-core`; this crate owns the
//! network round-trip, configuration and logging.
//!
//! # Design
//! - ureq is blocking, so the round-trip runs on tokio's blocking pool and
//!   `probe` awaits it. The task completes exactly once.
//! - No retries and no timeout. A transport failure is returned as
//!   `ProbeError::Network` and nothing is reported.

pub mod config;
pub mod logging;
pub mod transport;

use std::io::{self, Write};

use anyhow::Context;
use probe_core::{format_status_line, ProbeClient, ProbeError, RequestDescriptor};
use tracing::{debug, warn};

pub use probe_core;

/// Send the request described by `descriptor` and resolve to its status code.
pub async fn probe(descriptor: RequestDescriptor) -> Result<u16, ProbeError> {
    let client = ProbeClient::new(descriptor);
    let request = client.build_request();
    let url = request.url.clone();
    debug!(method = %request.method, %url, "sending probe request");

    let response = tokio::task::spawn_blocking(move || transport::execute(request))
        .await
        .map_err(|e| ProbeError::Aborted(e.to_string()))?
        .inspect_err(|e| warn!(%url, error = %e, "probe request failed"))?;

    debug!(%url, status = response.status, "response head received");
    client.parse_response(&response)
}

/// Write the status line for `status` to `out`.
pub fn report<W: Write>(status: u16, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format_status_line(status))?;
    out.flush()
}

/// Probe, then report. On failure `out` is left untouched.
pub async fn run<W: Write>(descriptor: RequestDescriptor, out: &mut W) -> anyhow::Result<u16> {
    let status = probe(descriptor).await?;
    report(status, out).context("writing status line")?;
    Ok(status)
}
