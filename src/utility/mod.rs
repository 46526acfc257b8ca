//! Utilities for resolving the options.
//!
//! Every option is taken from the command line if set, otherwise from the environment
//! (which includes `.env`, read via dotenv), otherwise the default is used.
//! Options that are set can be written to `.env` with `--write-dotenv`.
//!
mod functions;

pub use functions::*;
