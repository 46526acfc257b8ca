//! The impls and functions.
//!
use std::io::{self, Write};
use std::process::{Command, Stdio};
use log::*;
use crate::error::{ConfError, Result};
use crate::hosts::Host;
use crate::shell::{DryRun, MongoShell, DEFAULT_SHELL};

/// Running a javascript command against a host.
pub trait CommandRunner {
    /// Run `command` against `host`, and return what the command wrote to stdout.
    fn run(&self, host: &Host, command: &str) -> Result<String>;
}

impl Default for MongoShell {
    fn default() -> Self {
        MongoShell::new(DEFAULT_SHELL, Vec::new())
    }
}

impl MongoShell {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        MongoShell {
            program: program.to_string(),
            args,
        }
    }
}

impl CommandRunner for MongoShell {
    fn run(&self, host: &Host, command: &str) -> Result<String> {
        let target = host.hostname_port();
        debug!("{} {:?} {}: {}", self.program, self.args, target, command);
        let spawn_error = |source: io::Error| ConfError::ShellSpawn {
            program: self.program.clone(),
            target: target.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(&target)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // stdin is dropped at the end of this block, which closes it and lets the shell exit.
        // A shell that exits before reading everything (e.g. it cannot connect) closes the pipe;
        // its exit status and stderr are reported below.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(command.as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("({}) {} closed stdin early: {}", target, self.program, e);
                }
                Err(e) => return Err(spawn_error(e)),
            }
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        debug!("({}) stdout: {}", target, stdout.trim_end());
        if !output.status.success() {
            return Err(ConfError::ShellExit {
                program: self.program.clone(),
                target,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }
        Ok(stdout)
    }
}

impl CommandRunner for DryRun {
    fn run(&self, host: &Host, command: &str) -> Result<String> {
        info!("dry run, not executed against {}", host.hostname_port());
        println!("{}: {}", host.hostname_port(), command);
        Ok(String::new())
    }
}
