use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tower_core::errors::{ErrorInfo, TowerError};
use tower_core::SchemaVersion;

use crate::laws::Level;
use crate::plan::decode_json;

fn report_error(code: &str, message: impl Into<String>) -> TowerError {
    TowerError::Plan(ErrorInfo::new(code, message.into()))
}

fn serde_error(code: &str, err: serde_json::Error) -> TowerError {
    TowerError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect::<BTreeMap<_, _>>()
                .into_iter()
                .collect::<Map<_, _>>(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Encodes `value` as compact JSON with object keys in sorted order, so equal
/// reports always produce identical bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, TowerError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&sort_keys(value)).map_err(|err| serde_error("json-encode", err))
}

fn checks_digest(checks: &[LawCheck]) -> Result<String, TowerError> {
    let bytes = to_canonical_json_bytes(&checks)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

/// Single law evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LawCheck {
    /// Stable identifier of the law, suffixed with the witness row when it came from a plan.
    pub name: String,
    /// Level the law is stated at.
    pub level: Level,
    /// Whether the law held for its witnesses.
    pub pass: bool,
    /// Optional note, set on failure or when a witness was vacuous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LawCheck {
    /// Records the outcome of a boolean law.
    pub fn evaluated(name: impl Into<String>, level: Level, pass: bool) -> Self {
        Self {
            name: name.into(),
            level,
            pass,
            note: if pass {
                None
            } else {
                Some("law evaluated false for its witnesses".to_string())
            },
        }
    }

    /// Attaches a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Converts a failing check into the matching [`TowerError::Law`].
    pub fn to_error(&self) -> TowerError {
        let mut info = ErrorInfo::new("law-violation", format!("law `{}` failed", self.name))
            .with_context("law", self.name.clone())
            .with_context("level", self.level.as_str());
        if let Some(note) = &self.note {
            info = info.with_hint(note.clone());
        }
        TowerError::Law(info)
    }
}

/// Aggregated report over every evaluated law.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LawReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Content-addressed hash of the checks.
    pub analysis_hash: String,
    /// Number of passing checks.
    pub passed: usize,
    /// Number of failing checks.
    pub failed: usize,
    /// Per-law results in evaluation order.
    pub checks: Vec<LawCheck>,
}

impl LawReport {
    /// Builds a report from checks while computing the stable hash.
    pub fn new(checks: Vec<LawCheck>) -> Result<Self, TowerError> {
        let analysis_hash = checks_digest(&checks)?;
        let passed = checks.iter().filter(|check| check.pass).count();
        Ok(Self {
            schema_version: SchemaVersion::default(),
            analysis_hash,
            passed,
            failed: checks.len() - passed,
            checks,
        })
    }

    /// Returns whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterates over failing checks.
    pub fn failures(&self) -> impl Iterator<Item = &LawCheck> {
        self.checks.iter().filter(|check| !check.pass)
    }

    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TowerError> {
        to_canonical_json_bytes(self)
    }

    /// Reads a report written by [`LawReport::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, TowerError> {
        decode_json(data)
    }
}

/// Validates that at least one check was executed.
pub fn validate_checks(checks: &[LawCheck]) -> Result<(), TowerError> {
    if checks.is_empty() {
        return Err(report_error(
            "empty-report",
            "at least one law must be evaluated",
        ));
    }
    Ok(())
}
