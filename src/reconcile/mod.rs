//! Module with the replica set reconciliation.
//!
//! One pass looks at all hosts and picks one of these paths:
//! - no hosts: nothing to do.
//! - no host is configured: bootstrap a new replica set with the first host as primary.
//! - exactly one primary: add every host that is neither primary nor secondary to it.
//! - more than one primary: split brain. This is reported, and nothing is changed.
//! - no primary, every host removed: force a reconfiguration with all hosts as members.
//! - no primary otherwise: the replica set is broken in a way that cannot be fixed automatically.
//!
//! Every probe is done fresh. The pass stops at the first error.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
