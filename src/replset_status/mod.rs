//! Module for reading `/replSetGetStatus` from the mongod http admin interface.
//!
//! Only the `stateStr` field is used: a member that has been evicted from the replica set
//! configuration reports `"stateStr": "REMOVED"`.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
