//! The structs
//!
/// The default shell client binary.
pub const DEFAULT_SHELL: &str = "mongo";

/// Runs commands with an external shell client.
///
/// The process is started as `program [args..] hostname:port`.
#[derive(Debug, Clone)]
pub struct MongoShell {
    pub program: String,
    pub args: Vec<String>,
}

/// Prints the commands instead of running them.
#[derive(Debug, Default, Clone)]
pub struct DryRun;
