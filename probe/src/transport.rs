//! Executes a plain-data `HttpRequest` with ureq.
//!
//! The agent makes a single hop straight to the target: redirects are not
//! followed and proxy variables from the environment are ignored. ureq's
//! status-code-as-error behavior is disabled so 3xx/4xx/5xx responses come
//! back as data. The response body is never read; the connection is released
//! when the response is dropped.

use probe_core::{HttpMethod, HttpRequest, HttpResponse, ProbeError};

pub fn execute(req: HttpRequest) -> Result<HttpResponse, ProbeError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .max_redirects(0)
        .proxy(None)
        .build()
        .new_agent();

    let result = match req.method {
        HttpMethod::Get => agent.get(&req.url).call(),
    };
    let response = result.map_err(|e| ProbeError::network(&req.url, e))?;

    Ok(HttpResponse {
        status: response.status().as_u16(),
    })
}
