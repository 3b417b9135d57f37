use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use super::{Error, NodeId, Result};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClusterConfig {
    // (node id, "address:port"), json keys are the ids as strings
    pub peers: BTreeMap<NodeId, String>,
}

impl ClusterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the document the way it lands on disk: 4-space indent, no
    /// trailing newline.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(Error::serialize_error("encode cluster config"))?;
        Ok(buf)
    }

    /// Creates or truncates `path` and writes the whole document at once.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(Error::io_error(format!("write {}", path.display())))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(Error::io_error(format!("read {}", path.display())))?;
        serde_json::from_slice(&data)
            .map_err(Error::serialize_error(format!("decode {}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::ClusterConfig;
    use anyhow::Result;
    use serde_json::Value;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "cluster-config-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    fn sample(address: &str, ids: std::ops::RangeInclusive<u64>) -> ClusterConfig {
        let mut config = ClusterConfig::new();
        for id in ids {
            config
                .peers
                .insert(id, format!("{}:{}", address, 7000 + id));
        }
        config
    }

    #[test]
    fn test_json_layout() -> Result<()> {
        let config = sample("10.0.0.1", 1..=2);
        let json = String::from_utf8(config.to_json()?)?;
        assert_eq!(
            json,
            "{\n    \"peers\": {\n        \"1\": \"10.0.0.1:7001\",\n        \"2\": \"10.0.0.1:7002\"\n    }\n}"
        );

        Ok(())
    }

    #[test]
    fn test_keys_in_numeric_order() -> Result<()> {
        let config = sample("10.0.0.1", 1..=15);
        let json: Value = serde_json::from_slice(&config.to_json()?)?;
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        let peers = obj["peers"].as_object().unwrap();
        assert_eq!(peers.len(), 15);
        for id in 1..=15 {
            assert!(peers.contains_key(&id.to_string()));
        }

        // "10" must come after "9", not after "1"
        let text = String::from_utf8(config.to_json()?)?;
        assert!(text.find("\"9\"").unwrap() < text.find("\"10\"").unwrap());

        Ok(())
    }

    #[test]
    fn test_save_overwrites() -> Result<()> {
        let path = temp_path("overwrite");

        sample("10.0.0.1", 1..=15).save(&path)?;
        let second = sample("10.9.9.9", 1..=3);
        second.save(&path)?;

        let loaded = ClusterConfig::load(&path)?;
        assert_eq!(loaded, second);
        assert!(loaded.peers.values().all(|v| v.starts_with("10.9.9.9:")));

        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_save_to_missing_dir_fails() -> Result<()> {
        let path = std::env::temp_dir()
            .join(format!("cluster-config-missing-{}", std::process::id()))
            .join("cluster.json");
        let err = sample("10.0.0.1", 1..=1).save(&path).unwrap_err();
        assert!(matches!(err, crate::base::Error::Io { .. }));

        Ok(())
    }
}
