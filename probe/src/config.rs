//! Probe target configuration.
//!
//! With no variables set the descriptor is the built-in target,
//! `GET https://www.google.com:443/`. Each `PROBE_*` variable overrides one
//! field; bad values fail before any network activity.

use probe_core::{HttpMethod, ProbeError, RequestDescriptor, Scheme};

pub const HOST_VAR: &str = "PROBE_HOST";
pub const PORT_VAR: &str = "PROBE_PORT";
pub const PATH_VAR: &str = "PROBE_PATH";
pub const SCHEME_VAR: &str = "PROBE_SCHEME";

pub fn descriptor_from_env() -> Result<RequestDescriptor, ProbeError> {
    descriptor_from_lookup(|key| std::env::var(key).ok())
}

pub fn descriptor_from_lookup<F>(lookup: F) -> Result<RequestDescriptor, ProbeError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RequestDescriptor::default();

    let scheme = match lookup(SCHEME_VAR) {
        Some(raw) => Scheme::parse(&raw).ok_or_else(|| {
            ProbeError::InvalidDescriptor(format!("{SCHEME_VAR}={raw:?} is not http or https"))
        })?,
        None => defaults.scheme(),
    };
    let port = match lookup(PORT_VAR) {
        Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
            ProbeError::InvalidDescriptor(format!("{PORT_VAR}={raw:?}: {e}"))
        })?,
        None => defaults.port(),
    };
    let hostname = lookup(HOST_VAR).unwrap_or_else(|| defaults.hostname().to_string());
    let path = lookup(PATH_VAR).unwrap_or_else(|| defaults.path().to_string());

    RequestDescriptor::new(scheme, &hostname, port, &path, HttpMethod::Get)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_variables_gives_default_target() {
        let d = descriptor_from_lookup(lookup(&[])).unwrap();
        assert_eq!(d, RequestDescriptor::default());
    }

    #[test]
    fn variables_override_fields() {
        let d = descriptor_from_lookup(lookup(&[
            (SCHEME_VAR, "http"),
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "3000"),
            (PATH_VAR, "/healthz"),
        ]))
        .unwrap();
        assert_eq!(d.url(), "http://127.0.0.1:3000/healthz");
        assert_eq!(d.method(), HttpMethod::Get);
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        let err = descriptor_from_lookup(lookup(&[(PORT_VAR, "70000")])).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidDescriptor(_)));
    }

    #[test]
    fn port_zero_is_rejected() {
        let err = descriptor_from_lookup(lookup(&[(PORT_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidDescriptor(_)));
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let err = descriptor_from_lookup(lookup(&[(SCHEME_VAR, "gopher")])).unwrap_err();
        assert!(err.to_string().contains("gopher"));
    }
}
