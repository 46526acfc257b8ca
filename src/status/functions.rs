//! The impls and functions.
//!
use std::fmt;
use chrono::Local;
use colored::*;
use log::*;
use crate::error::Result;
use crate::hosts::Host;
use crate::ismaster::MasterInfo;
use crate::probe::Probe;
use crate::status::{AllHostStatus, HostStatus, MemberState};

impl fmt::Display for MemberState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = match self {
            MemberState::Primary => "PRIMARY",
            MemberState::Secondary => "SECONDARY",
            MemberState::Removed => "REMOVED",
            MemberState::Unconfigured => "UNCONFIGURED",
        };
        f.pad(state)
    }
}

impl MemberState {
    pub fn from_probes(masterinfo: &MasterInfo, removed: bool) -> Self {
        if masterinfo.is_master {
            MemberState::Primary
        } else if masterinfo.is_secondary {
            MemberState::Secondary
        } else if removed {
            MemberState::Removed
        } else {
            MemberState::Unconfigured
        }
    }
}

impl AllHostStatus {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn read_status<P: Probe + ?Sized>(
        probe: &P,
        hosts: &[Host],
    ) -> Result<AllHostStatus>
    {
        let mut allhoststatus = AllHostStatus::new();
        for host in hosts {
            let masterinfo = probe.probe_master(host)?;
            let timestamp = masterinfo.timestamp.unwrap_or_else(Local::now);
            let removed = if masterinfo.is_member() { false } else { probe.probe_removed(host)? };
            let state = MemberState::from_probes(&masterinfo, removed);
            debug!("{}: {}", host, state);
            allhoststatus.host_status.push(HostStatus { host: host.clone(), timestamp, state });
        }
        Ok(allhoststatus)
    }
    pub fn print(&self) {
        for row in &self.host_status {
            print!("{:20} {:20} ", row.host.hostname_port(), row.host.hostname_adminport());
            let state = format!("{:12}", row.state);
            match row.state {
                MemberState::Primary => print!("{} ", state.green()),
                MemberState::Secondary => print!("{} ", state.yellow()),
                MemberState::Removed => print!("{} ", state.red()),
                MemberState::Unconfigured => print!("{} ", state),
            }
            println!("{}", row.timestamp.format("%Y-%m-%d %H:%M:%S"));
        }
    }
}
