//! Module with the replica set mutations.
//!
//! Every mutation is a javascript command, run with a [CommandRunner](crate::shell::CommandRunner)
//! against a single host:
//! - bootstrap: `rs.initiate()` on the first host, fix its own address, add the other hosts.
//! - self host/port fix: a freshly initiated set can record its own address as `localhost`,
//!   which is not reachable from the other hosts (NAT), so the single member gets the configured
//!   `hostname:port`. The fix is skipped by the shell if the set has more than one member.
//! - add secondary: `rs.add("hostname:port")` on the primary.
//! - recover all removed: force a new member list on the first host.
//!
mod functions;

pub use functions::*;
