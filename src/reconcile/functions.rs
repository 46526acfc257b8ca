//! The impls and functions.
//!
use std::fmt;
use log::*;
use crate::error::{ConfError, Result};
use crate::hosts::Host;
use crate::mutations;
use crate::probe::Probe;
use crate::reconcile::{Outcome, Reconciler};
use crate::shell::CommandRunner;

fn join_hosts(hosts: &[Host]) -> String {
    hosts.iter().map(|h| h.hostname_port()).collect::<Vec<String>>().join(",")
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::NothingToDo => write!(f, "nothing to do"),
            Outcome::Bootstrapped { primary, added } => write!(f, "bootstrapped replica set on {}, added secondaries: [{}]", primary, join_hosts(added)),
            Outcome::Converged { primary, added } => write!(f, "primary {}, added secondaries: [{}]", primary, join_hosts(added)),
            Outcome::SplitBrain { masters } => write!(f, "split brain, multiple masters: [{}]", join_hosts(masters)),
            Outcome::Recovered { primary, members } => write!(f, "forced reconfiguration on {} with members: [{}]", primary, join_hosts(members)),
        }
    }
}

impl Outcome {
    /// A split brain pass changes nothing, but is not a successful pass: it becomes an error.
    /// All other outcomes are passed through.
    pub fn into_result(self) -> Result<Outcome> {
        match self {
            Outcome::SplitBrain { masters } => Err(ConfError::SplitBrain(join_hosts(&masters))),
            outcome => Ok(outcome),
        }
    }
}

impl<'a, P, R> Reconciler<'a, P, R>
where
    P: Probe + ?Sized,
    R: CommandRunner + ?Sized,
{
    pub fn new(probe: &'a P, runner: &'a R) -> Self {
        Reconciler { probe, runner }
    }
    /// Perform a single reconciliation pass over `hosts`.
    pub fn reconcile(&self, hosts: &[Host]) -> Result<Outcome> {
        if hosts.is_empty() {
            info!("no mongodb hosts to configure. exiting");
            return Ok(Outcome::NothingToDo);
        }

        if !self.any_configured(hosts)? {
            info!("no host is configured, bootstrapping a new replica set");
            let added = mutations::bootstrap(self.runner, hosts)?;
            return Ok(Outcome::Bootstrapped { primary: hosts[0].clone(), added });
        }

        let masters = self.masters(hosts)?;
        match masters.len() {
            1 => self.converge(hosts, &masters[0]),
            0 => self.recover(hosts),
            _ => {
                error!("replica set has multiple masters: [{}], refusing to change anything", join_hosts(&masters));
                Ok(Outcome::SplitBrain { masters })
            }
        }
    }
    fn any_configured(&self, hosts: &[Host]) -> Result<bool> {
        for host in hosts {
            if self.probe.is_configured(host)? {
                debug!("{} is configured", host);
                return Ok(true);
            }
        }
        Ok(false)
    }
    fn masters(&self, hosts: &[Host]) -> Result<Vec<Host>> {
        let mut masters = Vec::new();
        for host in hosts {
            if self.probe.probe_master(host)?.is_master {
                masters.push(host.clone());
            }
        }
        Ok(masters)
    }
    fn converge(&self, hosts: &[Host], master: &Host) -> Result<Outcome> {
        info!("master is {}", master);
        let mut self_fixed = false;
        let mut added = Vec::new();
        for host in hosts.iter().filter(|h| *h != master) {
            let masterinfo = self.probe.probe_master(host)?;
            if masterinfo.is_member() {
                continue;
            }
            // a set with only the master as member can have recorded its own address as localhost.
            if !self_fixed {
                mutations::self_host_port_fix(self.runner, master)?;
                self_fixed = true;
            }
            mutations::add_secondary(self.runner, master, host)?;
            added.push(host.clone());
        }
        if added.is_empty() {
            warn!("no new secondaries added");
        }
        Ok(Outcome::Converged { primary: master.clone(), added })
    }
    fn recover(&self, hosts: &[Host]) -> Result<Outcome> {
        for host in hosts {
            if !self.probe.probe_removed(host)? {
                return Err(ConfError::Topology(format!("no master found and {} is not removed", host)));
            }
        }
        mutations::recover_all_removed(self.runner, hosts)?;
        Ok(Outcome::Recovered { primary: hosts[0].clone(), members: hosts.to_vec() })
    }
}
