//! Module for probing the state of the mongod hosts over the http admin interface.
//!
//! The [Probe] trait is what the reconciler uses to look at the hosts.
//! [AdminClient] implements it using a single blocking http client, which is created once
//! and reused for every request.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
