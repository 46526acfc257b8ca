//! The impls and functions.
//!
use std::time::Duration;
use chrono::Local;
use log::*;
use crate::error::{ConfError, Result};
use crate::hosts::Host;
use crate::ismaster::MasterInfo;
use crate::probe::AdminClient;
use crate::replset_status::ReplSetStatus;

/// Looking at the state of a host.
///
/// Every call performs a fresh probe; nothing is cached.
pub trait Probe {
    /// Read `/isMaster` of the host.
    fn probe_master(&self, host: &Host) -> Result<MasterInfo>;
    /// Read `/replSetGetStatus` of the host, and report if the host is in the REMOVED state.
    fn probe_removed(&self, host: &Host) -> Result<bool>;
    /// A host is configured if it is a primary or secondary, or if it has been removed.
    /// The removed state is only probed if the host is not a member.
    fn is_configured(&self, host: &Host) -> Result<bool> {
        if self.probe_master(host)?.is_member() {
            return Ok(true);
        }
        self.probe_removed(host)
    }
}

impl AdminClient {
    /// Create the prober.
    /// Without a timeout, the default of the http client is used.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfError::HttpClient)?;
        Ok(AdminClient { client })
    }
    /// Create the prober around an already configured http client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        AdminClient { client }
    }
    /// Perform a http GET of `http://hostname:adminport/path`, and return the body.
    /// A non success status is an error.
    pub fn http_get(
        &self,
        host: &Host,
        path: &str,
    ) -> Result<String>
    {
        let url = format!("http://{}:{}/{}", host.hostname, host.adminport, path);
        let response = self.client.get(&url)
            .send()
            .map_err(|source| ConfError::Http { url: url.clone(), source })?;
        let status = response.status();
        if !status.is_success() {
            debug!("Non success response: {} = {}", url, status);
            return Err(ConfError::HttpStatus { url, status });
        }
        debug!("Success response: {} = {}", url, status);
        response.text()
            .map_err(|source| ConfError::Http { url, source })
    }
}

impl Probe for AdminClient {
    fn probe_master(&self, host: &Host) -> Result<MasterInfo> {
        let detail_snapshot_time = Local::now();
        let data_from_http = self.http_get(host, "isMaster")?;
        let mut masterinfo = MasterInfo::parse(&data_from_http, &format!("{}/isMaster", host.hostname_adminport()))?;
        masterinfo.hostname_port = Some(host.hostname_adminport());
        masterinfo.timestamp = Some(detail_snapshot_time);
        if !masterinfo.is_ok() {
            warn!("({}) isMaster did not report ok: {}", host.hostname_adminport(), masterinfo.info);
        }
        debug!("{:?}", &masterinfo);
        Ok(masterinfo)
    }
    fn probe_removed(&self, host: &Host) -> Result<bool> {
        let data_from_http = self.http_get(host, "replSetGetStatus")?;
        let status = ReplSetStatus::parse(&data_from_http, &format!("{}/replSetGetStatus", host.hostname_adminport()))?;
        debug!("({}) stateStr: {:?}", host.hostname_adminport(), status.state_str);
        Ok(status.is_removed())
    }
}
