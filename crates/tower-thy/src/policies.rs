use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::errors::TowerError;

use crate::plan::{decode_yaml, read_file};

/// Policy controlling how law runs react to failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Policy {
    /// Abort with [`tower_core::TowerError::Law`] on the first failing check
    /// instead of recording it in the report.
    #[serde(default)]
    pub strict: bool,
    /// Re-run the compile-time witness laws as part of the report.
    #[serde(default = "Policy::default_include_witness_laws")]
    pub include_witness_laws: bool,
    /// Reject runs that evaluate no checks at all.
    #[serde(default = "Policy::default_require_nonempty")]
    pub require_nonempty: bool,
}

impl Policy {
    const fn default_include_witness_laws() -> bool {
        true
    }

    const fn default_require_nonempty() -> bool {
        true
    }

    /// Parses a YAML policy; omitted fields take their defaults.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, TowerError> {
        decode_yaml(data)
    }

    /// Loads a YAML policy from disk.
    pub fn load(path: &Path) -> Result<Self, TowerError> {
        Self::from_yaml_slice(&read_file(path, "policy-read")?)
    }

    /// Default policy with strict mode enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            strict: false,
            include_witness_laws: Self::default_include_witness_laws(),
            require_nonempty: Self::default_require_nonempty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let policy: Policy = serde_yaml::from_str("strict: true\n").unwrap();
        assert_eq!(policy, Policy::strict());
        let empty: Policy = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Policy::default());
    }

    #[test]
    fn malformed_policy_is_a_serde_error() {
        let err = Policy::from_yaml_slice(b"strict: [not, a, bool]").unwrap_err();
        assert!(matches!(err, TowerError::Serde(_)));
        assert_eq!(err.info().code, "yaml-decode");
    }
}
