//! Module for reading `/isMaster` from the mongod http admin interface.
//!
//! The `/isMaster` endpoint returns the result of the `isMaster` command, for example on a primary:
//! ```json
//! {
//!   "ismaster" : true,
//!   "secondary" : false,
//!   "isreplicaset" : false,
//!   "maxBsonObjectSize" : 16777216,
//!   "maxMessageSizeBytes" : 48000000,
//!   "maxWriteBatchSize" : 1000,
//!   "maxWireVersion" : 3,
//!   "minWireVersion" : 0,
//!   "ok" : 1
//! }
//! ```
//! A freshly started mongod with `--replSet` that has not been initiated reports
//! `"ismaster": false`, `"secondary": false` and `"isreplicaset": true`.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
