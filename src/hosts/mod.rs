//! Module for parsing the host specifications given on the command line.
//!
//! A host specification is `hostname:port:adminport`:
//! - port: the port the mongo shell connects to.
//! - adminport: the port of the http admin interface, used to probe the state.
//!
//! The order of the hosts is kept: the first host is the primary candidate when a
//! replica set is bootstrapped.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
