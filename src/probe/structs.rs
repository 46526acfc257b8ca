//! The structs
//!
/// The http prober.
///
/// It owns the http client, so that all probes of a run share it.
#[derive(Debug, Clone)]
pub struct AdminClient {
    pub(crate) client: reqwest::blocking::Client,
}
