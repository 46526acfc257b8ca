//! The impls and functions.
//!
use std::{fmt, str::FromStr};
use crate::error::{ConfError, Result};
use crate::hosts::Host;

impl Host {
    pub fn new(hostname: &str, port: u16, adminport: u16) -> Self {
        Host {
            hostname: hostname.to_string(),
            port,
            adminport,
        }
    }
    /// The `hostname:port` form, as used by the mongo shell and in the replica set members.
    pub fn hostname_port(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
    /// The `hostname:adminport` form, as used for the http admin interface.
    pub fn hostname_adminport(&self) -> String {
        format!("{}:{}", self.hostname, self.adminport)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}

impl FromStr for Host {
    type Err = ConfError;

    fn from_str(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() != 3 {
            return Err(ConfError::HostSpec(spec.to_string()));
        }
        let port = parse_port(spec, parts[1])?;
        let adminport = parse_port(spec, parts[2])?;
        Ok(Host::new(parts[0], port, adminport))
    }
}

fn parse_port(spec: &str, port: &str) -> Result<u16> {
    port.parse::<u16>()
        .map_err(|_e| ConfError::Port { spec: spec.to_string(), port: port.to_string() })
}

/// Parse all host specifications, in order.
/// The first malformed specification stops the parsing.
pub fn parse_hosts<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Host>> {
    specs.iter()
        .map(|spec| spec.as_ref().parse::<Host>())
        .collect()
}
