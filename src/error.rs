//! Error types for probes, mutations and host parsing.
//!
//! Every failure stops the current reconciliation pass. None of them are retried.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfError>;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("can't parse host details: {0}")]
    HostSpec(String),

    #[error("can't parse port: {port} (in {spec})")]
    Port { spec: String, port: String },

    #[error("could not build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("http request {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http request {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not parse {url} json data: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("replica set seems broken: {0}")]
    Topology(String),

    #[error("replica set has multiple masters: [{0}], nothing has been changed")]
    SplitBrain(String),

    #[error("could not run {program} against {target}: {source}")]
    ShellSpawn {
        program: String,
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} against {target} exited with {status}: {stderr}")]
    ShellExit {
        program: String,
        target: String,
        status: ExitStatus,
        stderr: String,
    },
}
