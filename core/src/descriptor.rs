//! The immutable parameters of one probe request.
//!
//! # Design
//! Fields are private and validated once in `RequestDescriptor::new`, so a
//! descriptor that exists always names a reachable-looking target: non-zero
//! port, a bare hostname, an absolute path. `Default` is the fixed probe
//! target; tests build their own descriptor pointing at a local server.

use crate::error::ProbeError;
use crate::http::{HttpMethod, Scheme};

pub const DEFAULT_HOSTNAME: &str = "www.google.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    scheme: Scheme,
    hostname: String,
    port: u16,
    path: String,
    method: HttpMethod,
}

impl RequestDescriptor {
    pub fn new(
        scheme: Scheme,
        hostname: &str,
        port: u16,
        path: &str,
        method: HttpMethod,
    ) -> Result<Self, ProbeError> {
        if hostname.is_empty() {
            return Err(ProbeError::InvalidDescriptor("hostname is empty".to_string()));
        }
        if hostname
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == ':')
        {
            return Err(ProbeError::InvalidDescriptor(format!(
                "hostname {hostname:?} is not a bare host"
            )));
        }
        if port == 0 {
            return Err(ProbeError::InvalidDescriptor("port must be 1-65535".to_string()));
        }
        if !path.starts_with('/') {
            return Err(ProbeError::InvalidDescriptor(format!(
                "path {path:?} must start with '/'"
            )));
        }
        Ok(Self {
            scheme,
            hostname: hostname.to_string(),
            port,
            path: path.to_string(),
            method,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Full request URL. The port is left out when it is the scheme's default.
    pub fn url(&self) -> String {
        if self.port == self.scheme.default_port() {
            format!("{}://{}{}", self.scheme, self.hostname, self.path)
        } else {
            format!("{}://{}:{}{}", self.scheme, self.hostname, self.port, self.path)
        }
    }
}

impl Default for RequestDescriptor {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            method: HttpMethod::Get,
        }
    }
}
