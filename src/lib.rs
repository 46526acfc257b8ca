//! mongoconf library.
//!
//! Reconciles a MongoDB replica set over a fixed list of hosts:
//! - [hosts]: parse `hostname:port:adminport` host specifications.
//! - [ismaster] and [replset_status]: the JSON documents served by the admin http endpoint.
//! - [probe]: the http prober that fetches these documents.
//! - [shell]: the command runner that feeds javascript to the mongo shell.
//! - [mutations]: the replica set commands.
//! - [reconcile]: the decision logic tying it all together.
//! - [status]: a read-only report of the member state of every host.
//!
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod hosts;
pub mod ismaster;
pub mod replset_status;
pub mod probe;
pub mod shell;
pub mod mutations;
pub mod reconcile;
pub mod status;
pub mod utility;

pub use error::{ConfError, Result};
