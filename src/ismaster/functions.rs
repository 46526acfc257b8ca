//! The impls and functions.
//!
use crate::error::{ConfError, Result};
use crate::ismaster::MasterInfo;

impl MasterInfo {
    /// A host is part of a replica set if it is the primary or a secondary.
    pub fn is_member(&self) -> bool {
        self.is_master || self.is_secondary
    }
    pub fn is_ok(&self) -> bool {
        self.ok == 1.0
    }
    // This function parses the http output.
    // This is a separate function in order to allow tests to use it.
    pub fn parse(http_output: &str, url: &str) -> Result<MasterInfo> {
        serde_json::from_str(http_output)
            .map_err(|source| ConfError::Decode { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_primary() {
        let json = r#"
{
  "ismaster" : true,
  "secondary" : false,
  "isreplicaset" : false,
  "maxBsonObjectSize" : 16777216,
  "maxMessageSizeBytes" : 48000000,
  "maxWriteBatchSize" : 1000,
  "localTime" : { "$date" : "2015-06-10T08:51:03.383Z" },
  "maxWireVersion" : 3,
  "minWireVersion" : 0,
  "ok" : 1
}
"#;
        let result = MasterInfo::parse(json, "a:28017/isMaster").unwrap();
        assert!(result.is_master);
        assert!(!result.is_secondary);
        assert!(result.is_member());
        assert!(result.is_ok());
        assert_eq!(result.max_bson_object_size, 16777216.0);
        assert_eq!(result.max_write_batch_size, 1000.0);
        assert_eq!(result.max_wire_version, 3.0);
        assert_eq!(result.hostname_port, None);
    }

    #[test]
    fn unit_parse_not_initiated() {
        // a mongod started with --replSet, before rs.initiate().
        let json = r#"
{
  "ismaster" : false,
  "secondary" : false,
  "info" : "Does not have a valid replica set config",
  "isreplicaset" : true,
  "maxBsonObjectSize" : 16777216,
  "ok" : 1.0
}
"#;
        let result = MasterInfo::parse(json, "a:28017/isMaster").unwrap();
        assert!(!result.is_member());
        assert!(result.is_replica_set);
        assert_eq!(result.info, "Does not have a valid replica set config");
        assert!(result.is_ok());
    }

    #[test]
    fn unit_parse_secondary_missing_fields() {
        let json = r#"{"ismaster":false,"secondary":true}"#;
        let result = MasterInfo::parse(json, "a:28017/isMaster").unwrap();
        assert!(result.is_member());
        assert!(!result.is_ok());
        assert_eq!(result.min_wire_version, 0.0);
    }

    #[test]
    fn unit_parse_not_json() {
        let http_output = r#"
Error 404: Not Found
File not found
"#;
        let result = MasterInfo::parse(http_output, "a:28017/isMaster");
        assert!(matches!(result, Err(ConfError::Decode { url, .. }) if url == "a:28017/isMaster"));
    }
}
