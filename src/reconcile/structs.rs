//! The structs
//!
use crate::hosts::Host;

/// The result of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// There were no hosts.
    NothingToDo,
    /// A new replica set was initiated on `primary`, and `added` were added as secondaries.
    Bootstrapped { primary: Host, added: Vec<Host> },
    /// The existing `primary` got `added` as new secondaries. `added` can be empty.
    Converged { primary: Host, added: Vec<Host> },
    /// More than one host claims to be primary, nothing has been changed.
    SplitBrain { masters: Vec<Host> },
    /// All hosts were removed, and `primary` was force reconfigured with all hosts as members.
    Recovered { primary: Host, members: Vec<Host> },
}

/// The reconciler, using a prober to look at the hosts and a runner to change them.
pub struct Reconciler<'a, P: ?Sized, R: ?Sized> {
    pub probe: &'a P,
    pub runner: &'a R,
}
