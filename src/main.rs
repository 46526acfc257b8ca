//! mongoconf: bootstrap, extend or recover a MongoDB replica set.
//!
//! Usage: `mongoconf [OPTIONS] [HOSTS]...` with hosts as `hostname:port:adminport`.
//!
use std::{collections::HashMap, process};
use anyhow::{Context, Result};
use clap::Parser;
use log::*;

use mongoconf::hosts::parse_hosts;
use mongoconf::probe::AdminClient;
use mongoconf::reconcile::{Outcome, Reconciler};
use mongoconf::shell::{CommandRunner, DryRun, MongoShell};
use mongoconf::status::AllHostStatus;
use mongoconf::utility;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// hosts as hostname:port:adminport, the first host is the primary candidate for a new replica set
    hosts: Vec<String>,
    /// mongo shell client binary
    #[arg(long, value_name = "path")]
    shell: Option<String>,
    /// extra argument for the mongo shell client, placed before hostname:port (can be repeated)
    #[arg(long, value_name = "arg", allow_hyphen_values = true)]
    shell_arg: Vec<String>,
    /// http timeout in seconds for the admin interface requests
    #[arg(long, value_name = "secs")]
    http_timeout: Option<u64>,
    /// print the commands instead of running them
    #[arg(long)]
    dry_run: bool,
    /// print the replica set member state of every host and exit
    #[arg(long)]
    print_status: bool,
    /// write the options that were set to .env
    #[arg(long)]
    write_dotenv: bool,
}

fn run(options: Opts) -> Result<()> {
    let mut changed_options = HashMap::new();
    let host_specs = utility::set_hosts(&options.hosts, &mut changed_options);
    let shell = utility::set_shell(&options.shell, &mut changed_options);
    let http_timeout = utility::set_http_timeout(&options.http_timeout, &mut changed_options)?;
    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    let hosts = parse_hosts(&host_specs)
        .with_context(|| "Invalid host list")?;
    info!("hosts: {:?}", hosts.iter().map(|h| h.to_string()).collect::<Vec<String>>());

    let probe = AdminClient::new(http_timeout)?;

    if options.print_status {
        let allhoststatus = AllHostStatus::read_status(&probe, &hosts)
            .with_context(|| "Unable to read the replica set state")?;
        allhoststatus.print();
        return Ok(());
    }

    let runner: Box<dyn CommandRunner> = if options.dry_run {
        Box::new(DryRun)
    } else {
        Box::new(MongoShell::new(&shell, options.shell_arg))
    };

    let outcome = Reconciler::new(&probe, &*runner)
        .reconcile(&hosts)
        .and_then(Outcome::into_result)
        .with_context(|| "Replica set reconfiguration failed")?;
    info!("{}", outcome);
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Opts::parse();
    if let Err(error) = run(options) {
        error!("{:?}", error);
        process::exit(1);
    }
}
