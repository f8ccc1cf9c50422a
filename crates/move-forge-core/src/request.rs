//! Caller inputs for a build and the names derived from them.

use serde::{Deserialize, Serialize};

/// Suffix appended to the lower-cased token name to form the package name.
pub const PACKAGE_SUFFIX: &str = "_package";

/// An account address and a token name.
///
/// The token name doubles as the Move module identifier and, lower-cased, as the
/// package name. It is not validated here: the compiler rejects bad identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub address: String,
    pub token_name: String,
}

impl BuildRequest {
    pub fn new(address: impl Into<String>, token_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token_name: token_name.into(),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.token_name
    }

    /// The template declares one empty struct named after its module.
    pub fn struct_name(&self) -> &str {
        &self.token_name
    }

    pub fn package_name(&self) -> String {
        format!("{}{PACKAGE_SUFFIX}", self.token_name.to_lowercase())
    }

    /// Value for `--named-addresses`, e.g. `MyCoin=0x1`.
    pub fn named_address(&self) -> String {
        format!("{}={}", self.module_name(), self.address)
    }
}
