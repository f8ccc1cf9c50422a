//! The build result and its persistence.
//!
//! A [`BuildResult`] holds the compiled module and package metadata as base64
//! text. The CLI prints it as JSON or saves it with [`save`].

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// Compiled artifacts of one package, base64-encoded (standard alphabet, padded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildResult {
    /// `bytecode_modules/<Module>.mv`
    pub module: String,
    /// `package-metadata.bcs`
    pub metadata: String,
}

impl BuildResult {
    /// Encode raw artifact bytes.
    pub fn from_bytes(module: &[u8], metadata: &[u8]) -> Self {
        Self {
            module: BASE64.encode(module),
            metadata: BASE64.encode(metadata),
        }
    }

    pub fn decode_module(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.module)
    }

    pub fn decode_metadata(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.metadata)
    }
}

/// Save a build result as pretty JSON.
pub fn save(result: &BuildResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(result).map_err(|e| BuildError::ResultFormat {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_encode_to_empty_strings() {
        let result = BuildResult::from_bytes(&[], &[]);
        assert_eq!(result.module, "");
        assert_eq!(result.metadata, "");
    }

    #[test]
    fn test_encoding_is_standard_padded() {
        let result = BuildResult::from_bytes(&[0xa1, 0x1c, 0xeb, 0x0b], b"\xff\xfe");
        assert_eq!(result.module, "oRzrCw==");
        assert_eq!(result.metadata, "//4=");
        assert_eq!(result.decode_module().unwrap(), vec![0xa1, 0x1c, 0xeb, 0x0b]);
    }

    #[test]
    fn test_json_has_exactly_module_and_metadata() {
        let result = BuildResult::from_bytes(b"mv", b"bcs");
        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, ["metadata", "module"]);
    }

    #[test]
    fn test_save_writes_json_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/result.json");
        let result = BuildResult::from_bytes(b"\xa1\x1c\xeb\x0b\x06", b"meta");
        save(&result, &path).unwrap();

        let saved: BuildResult =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, result);
    }

    #[test]
    fn test_save_into_missing_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();
        let err = save(&BuildResult::from_bytes(b"", b""), &blocker.join("result.json"))
            .unwrap_err();
        assert!(matches!(err, BuildError::Io(_)));
        assert!(!err.to_string().contains("config"));
    }
}
