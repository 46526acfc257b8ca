//! The structs
//!
use chrono::{DateTime, Local};
use crate::hosts::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    Primary,
    Secondary,
    Removed,
    Unconfigured,
}

#[derive(Debug, Clone)]
pub struct HostStatus {
    pub host: Host,
    pub timestamp: DateTime<Local>,
    pub state: MemberState,
}

/// This struct is a wrapper for the HostStatus struct.
///
/// In this way, the struct can be used with functions in impl.
#[derive(Debug, Default)]
pub struct AllHostStatus {
    pub host_status: Vec<HostStatus>,
}
