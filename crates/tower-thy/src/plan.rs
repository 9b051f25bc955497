use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tower_core::errors::{ErrorInfo, TowerError};
use tower_ips::Vector2;
use tower_num::{Integer, Natural, Rational, Real};

fn plan_error(code: &str, message: impl Into<String>) -> TowerError {
    TowerError::Plan(ErrorInfo::new(code, message.into()))
}

/// Decodes a YAML document, reporting failures as [`TowerError::Serde`].
pub(crate) fn decode_yaml<T: DeserializeOwned>(data: &[u8]) -> Result<T, TowerError> {
    serde_yaml::from_slice(data)
        .map_err(|err| TowerError::Serde(ErrorInfo::new("yaml-decode", err.to_string())))
}

/// Decodes a JSON document, reporting failures as [`TowerError::Serde`].
pub(crate) fn decode_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, TowerError> {
    serde_json::from_slice(data)
        .map_err(|err| TowerError::Serde(ErrorInfo::new("json-decode", err.to_string())))
}

/// Reads `path`, tagging I/O failures with `code` and the path.
pub(crate) fn read_file(path: &Path, code: &str) -> Result<Vec<u8>, TowerError> {
    fs::read(path).map_err(|err| {
        TowerError::Plan(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    })
}

/// A fraction literal written as `[numerator, denominator]`.
///
/// A zero denominator is clamped to one, exactly like [`Rational::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction(pub i64, pub u64);

impl Fraction {
    /// The rational this literal denotes.
    pub const fn to_rational(self) -> Rational {
        Rational::from_fraction(self.0, self.1)
    }

    /// The real this literal denotes.
    pub const fn to_real(self) -> Real {
        Real::new(self.to_rational())
    }
}

/// Witnesses for the inner-product axioms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorWitness {
    /// First vector.
    pub u: [Fraction; 2],
    /// Second vector.
    pub v: [Fraction; 2],
    /// Third vector, the fixed argument of the linearity check.
    pub w: [Fraction; 2],
    /// Scalar applied to `u`.
    pub a: Fraction,
    /// Scalar applied to `v`.
    pub b: Fraction,
}

fn vector(components: &[Fraction; 2]) -> Vector2 {
    Vector2::new(components[0].to_real(), components[1].to_real())
}

impl VectorWitness {
    /// `(u, v, w)` as vectors.
    pub fn vectors(&self) -> (Vector2, Vector2, Vector2) {
        (vector(&self.u), vector(&self.v), vector(&self.w))
    }

    /// `(a, b)` as reals.
    pub fn scalars(&self) -> (Real, Real) {
        (self.a.to_real(), self.b.to_real())
    }
}

/// User supplied witness values, one triple per row.
///
/// ```yaml
/// naturals:
///   - [2, 3, 4]
/// integers:
///   - [3, -2, 7]
/// rationals:
///   - [[2, 3], [1, 2], [3, 5]]
/// vectors:
///   - u: [[3, 1], [4, 1]]
///     v: [[1, 1], [2, 1]]
///     w: [[-2, 1], [5, 1]]
///     a: [2, 1]
///     b: [-1, 3]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessPlan {
    /// Natural triples.
    #[serde(default)]
    pub naturals: Vec<[u64; 3]>,
    /// Integer triples.
    #[serde(default)]
    pub integers: Vec<[i64; 3]>,
    /// Rational triples.
    #[serde(default)]
    pub rationals: Vec<[Fraction; 3]>,
    /// Real triples.
    #[serde(default)]
    pub reals: Vec<[Fraction; 3]>,
    /// Inner-product witnesses.
    #[serde(default)]
    pub vectors: Vec<VectorWitness>,
}

impl WitnessPlan {
    /// Parses a YAML plan.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, TowerError> {
        decode_yaml(data)
    }

    /// Parses a JSON plan.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, TowerError> {
        decode_json(data)
    }

    /// Loads a plan from disk; `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, TowerError> {
        let bytes = read_file(path, "plan-read")?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_slice(&bytes),
            _ => Self::from_yaml_slice(&bytes),
        }
    }

    /// Number of witness rows across every level.
    pub fn len(&self) -> usize {
        self.naturals.len()
            + self.integers.len()
            + self.rationals.len()
            + self.reals.len()
            + self.vectors.len()
    }

    /// Returns whether the plan has no witnesses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Natural rows as tower values.
    pub fn natural_rows(&self) -> impl Iterator<Item = [Natural; 3]> + '_ {
        self.naturals.iter().map(|row| row.map(Natural::new))
    }

    /// Integer rows as tower values.
    pub fn integer_rows(&self) -> impl Iterator<Item = [Integer; 3]> + '_ {
        self.integers.iter().map(|row| row.map(Integer::from_i64))
    }

    /// Rational rows as tower values.
    pub fn rational_rows(&self) -> impl Iterator<Item = [Rational; 3]> + '_ {
        self.rationals.iter().map(|row| row.map(Fraction::to_rational))
    }

    /// Real rows as tower values.
    pub fn real_rows(&self) -> impl Iterator<Item = [Real; 3]> + '_ {
        self.reals.iter().map(|row| row.map(Fraction::to_real))
    }

    /// Fails unless the plan carries at least one witness.
    pub fn ensure_nonempty(&self) -> Result<(), TowerError> {
        if self.is_empty() {
            return Err(plan_error(
                "empty-plan",
                "witness plan does not contain any rows",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
naturals:
  - [2, 3, 4]
integers:
  - [3, -2, 7]
rationals:
  - [[2, 3], [1, 2], [3, 5]]
vectors:
  - u: [[3, 1], [4, 1]]
    v: [[1, 1], [2, 1]]
    w: [[-2, 1], [5, 1]]
    a: [2, 1]
    b: [-1, 3]
";

    #[test]
    fn parses_yaml_literals() {
        let plan = WitnessPlan::from_yaml_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(plan.len(), 4);
        assert!(plan.reals.is_empty());
        let [a, b, c] = plan.integer_rows().next().unwrap();
        assert_eq!((a.to_i128(), b.to_i128(), c.to_i128()), (3, -2, 7));
        let [q, _, _] = plan.rational_rows().next().unwrap();
        assert_eq!(q, Rational::from_fraction(4, 6));
        let (u, _, _) = plan.vectors[0].vectors();
        assert_eq!(u, Vector2::from_i64(3, 4));
    }

    #[test]
    fn zero_denominators_are_clamped() {
        assert_eq!(Fraction(5, 0).to_rational(), Rational::from_fraction(5, 1));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let err = WitnessPlan::default().ensure_nonempty().unwrap_err();
        assert_eq!(err.info().code, "empty-plan");
    }

    #[test]
    fn malformed_yaml_is_a_serde_error() {
        let err = WitnessPlan::from_yaml_slice(b"naturals: [[1, 2]]").unwrap_err();
        assert!(matches!(err, TowerError::Serde(_)));
    }
}
