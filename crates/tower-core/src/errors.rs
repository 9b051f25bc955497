//! Structured error types shared across tower crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TowerError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (operands, law names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the numeric tower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TowerError {
    /// Undefined arithmetic such as inverting zero.
    #[error("arithmetic error: {0}")]
    Arithmetic(ErrorInfo),
    /// An algebraic law evaluated false.
    #[error("law violation: {0}")]
    Law(ErrorInfo),
    /// Malformed or empty witness plans.
    #[error("plan error: {0}")]
    Plan(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TowerError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TowerError::Arithmetic(info)
            | TowerError::Law(info)
            | TowerError::Plan(info)
            | TowerError::Serde(info) => info,
        }
    }

    /// Builds the error reported when a zero value is inverted.
    pub fn division_by_zero(level: &str) -> Self {
        TowerError::Arithmetic(
            ErrorInfo::new("division-by-zero", "zero has no multiplicative inverse")
                .with_context("level", level),
        )
    }

    /// Returns whether this error is the division-by-zero condition.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, TowerError::Arithmetic(info) if info.code == "division-by-zero")
    }
}
