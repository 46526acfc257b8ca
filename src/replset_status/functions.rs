//! The impls and functions.
//!
use crate::error::{ConfError, Result};
use crate::replset_status::{ReplSetStatus, REMOVED};

impl ReplSetStatus {
    pub fn is_removed(&self) -> bool {
        self.state_str.as_deref() == Some(REMOVED)
    }
    pub fn parse(http_output: &str, url: &str) -> Result<ReplSetStatus> {
        serde_json::from_str(http_output)
            .map_err(|source| ConfError::Decode { url: url.to_string(), source })
    }
}
