//! Module for reporting the replica set member state of every host.
//!
//! This is read-only: it probes `/isMaster` and, for hosts that are not a member,
//! `/replSetGetStatus`, and prints a line per host.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
