//! The command builders and the mutations.
//!
use log::*;
use crate::error::Result;
use crate::hosts::Host;
use crate::shell::CommandRunner;

pub fn initiate_command() -> String {
    "rs.initiate()".to_string()
}

pub fn self_host_port_fix_command(host: &Host) -> String {
    format!("var config = rs.config(); if (config.members.length === 1) {{ config.members[0].host = '{}'; rs.reconfig(config); }}", host.hostname_port())
}

pub fn add_secondary_command(secondary: &Host) -> String {
    format!("rs.add(\"{}\")", secondary.hostname_port())
}

/// The member list gets `_id` equal to the position of the host.
pub fn recover_all_removed_command(hosts: &[Host]) -> String {
    let members = hosts.iter()
        .enumerate()
        .map(|(id, host)| format!("{{_id: {}, host: \"{}\"}}", id, host.hostname_port()))
        .collect::<Vec<String>>()
        .join(", ");
    format!("var config = rs.config(); config.members = [{}]; rs.reconfig(config, {{force: true}});", members)
}

/// Initiate a replica set on the first host, and add all other hosts as secondaries in order.
/// Returns the hosts that were added.
pub fn bootstrap<R: CommandRunner + ?Sized>(
    runner: &R,
    hosts: &[Host],
) -> Result<Vec<Host>>
{
    let Some((primary, secondaries)) = hosts.split_first() else {
        return Ok(Vec::new());
    };
    info!("initiating master {}", primary);
    runner.run(primary, &initiate_command())?;
    // override the host & port here to ensure things work in a NAT environment.
    self_host_port_fix(runner, primary)?;
    for secondary in secondaries {
        add_secondary(runner, primary, secondary)?;
    }
    Ok(secondaries.to_vec())
}

pub fn self_host_port_fix<R: CommandRunner + ?Sized>(
    runner: &R,
    host: &Host,
) -> Result<()>
{
    info!("setting the member host of a single member replica set to {}", host.hostname_port());
    runner.run(host, &self_host_port_fix_command(host))?;
    Ok(())
}

pub fn add_secondary<R: CommandRunner + ?Sized>(
    runner: &R,
    primary: &Host,
    secondary: &Host,
) -> Result<()>
{
    info!("adding secondary {} to primary {}", secondary.hostname_port(), primary.hostname_port());
    runner.run(primary, &add_secondary_command(secondary))?;
    Ok(())
}

/// Force reconfigure the first host with all hosts as members.
/// This bypasses the majority check, which cannot succeed when every member has been removed.
pub fn recover_all_removed<R: CommandRunner + ?Sized>(
    runner: &R,
    hosts: &[Host],
) -> Result<()>
{
    let Some(first) = hosts.first() else {
        return Ok(());
    };
    warn!("all {} hosts are removed, forcing a reconfiguration on {}", hosts.len(), first.hostname_port());
    runner.run(first, &recover_all_removed_command(hosts))?;
    Ok(())
}
