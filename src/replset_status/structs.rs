//! The structs
//!
/// The member state string of a removed member.
pub const REMOVED: &str = "REMOVED";

/// The struct that is used to parse the JSON returned from `/replSetGetStatus` using serde.
///
/// All other fields of the response are ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplSetStatus {
    #[serde(rename = "stateStr")]
    pub state_str: Option<String>,
}
