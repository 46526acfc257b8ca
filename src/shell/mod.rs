//! Module for running javascript commands against a host with the mongo shell.
//!
//! The [CommandRunner] trait is the seam used by the mutations:
//! - [MongoShell] spawns the shell client, writes the command on stdin and waits for it.
//! - [DryRun] only reports the command and the host it would have been run against.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
