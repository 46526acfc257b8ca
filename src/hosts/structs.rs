//! The structs
//!
/// A single mongod host.
///
/// Equality is structural: two hosts are the same if hostname and both ports are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    pub hostname: String,
    /// The client port, used by the mongo shell and in the replica set configuration.
    pub port: u16,
    /// The port of the http admin interface.
    pub adminport: u16,
}
