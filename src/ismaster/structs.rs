//! The structs
//!
use chrono::{DateTime, Local};

/// The struct that is used to parse the JSON returned from `/isMaster` using serde.
///
/// Fields that are absent in the response get their default value.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct MasterInfo {
    /// mongoconf added to allow understanding the source host
    #[serde(skip_deserializing)]
    pub hostname_port: Option<String>,
    /// mongoconf added to allow understanding the timestamp
    #[serde(skip_deserializing)]
    pub timestamp: Option<DateTime<Local>>,
    pub info: String,
    #[serde(rename = "ismaster")]
    pub is_master: bool,
    #[serde(rename = "secondary")]
    pub is_secondary: bool,
    #[serde(rename = "isreplicaset")]
    pub is_replica_set: bool,
    #[serde(rename = "maxBsonObjectSize")]
    pub max_bson_object_size: f64,
    #[serde(rename = "maxMessageSizeBytes")]
    pub max_message_size_bytes: f64,
    #[serde(rename = "maxWireVersion")]
    pub max_wire_version: f64,
    #[serde(rename = "maxWriteBatchSize")]
    pub max_write_batch_size: f64,
    #[serde(rename = "minWireVersion")]
    pub min_wire_version: f64,
    pub ok: f64,
}
