use tower_core::errors::TowerError;
use tower_core::{CheckedArithmetic, Field, Group, Inject, OrderedField, TotallyOrdered};
use tower_ips::{Vector2, VerifyInnerProduct};
use tower_num::Real;
use tracing::{debug, info, warn};

use crate::generic::{
    additive_identity, additive_inverse, associative, commutative, distributive,
    injection_preserves_equality, injection_preserves_order, multiplicative_commutative,
    multiplicative_identity, multiplicative_inverse, order_compatible_add, order_compatible_mul,
};
use crate::laws::{Level, WITNESS_LAWS};
use crate::plan::WitnessPlan;
use crate::policies::Policy;
use crate::report::{validate_checks, LawCheck, LawReport};

type Verify = VerifyInnerProduct<Vector2>;

const OUT_OF_RANGE: &str = "witness row overflows 64-bit magnitudes; laws not evaluated";

fn row_check(level: Level, law: &str, row: usize, pass: bool) -> LawCheck {
    LawCheck::evaluated(format!("{}.{law}[{row}]", level.as_str()), level, pass)
}

fn out_of_range(level: Level, row: usize) -> LawCheck {
    row_check(level, "arithmetic_range", row, false).with_note(OUT_OF_RANGE)
}

/// Forms every sum and product the row laws evaluate, stopping at the first overflow.
fn row_fits<T: CheckedArithmetic>([a, b, c]: &[T; 3]) -> Option<()> {
    a.checked_add(b)?.checked_add(c)?;
    a.checked_add(&b.checked_add(c)?)?;
    b.checked_add(a)?;
    a.checked_add(c)?;
    b.checked_add(c)?;
    b.checked_mul(a)?;
    let ab = a.checked_mul(b)?;
    let ac = a.checked_mul(c)?;
    ab.checked_add(&ac)?;
    a.checked_mul(&b.checked_add(c)?)?;
    Some(())
}

fn negation_fits<T: CheckedArithmetic + Group>(a: &T) -> Option<()> {
    a.checked_add(&-a.clone()).map(drop)
}

fn inverse_fits<T: CheckedArithmetic + Field>(a: &T) -> Option<()> {
    match a.inverse() {
        Ok(inverse) => a.checked_mul(&inverse).map(drop),
        Err(_) => Some(()),
    }
}

fn vector_row_fits(u: Vector2, v: Vector2, w: Vector2, a: Real, b: Real) -> Option<()> {
    let uv = u.checked_inner(v)?;
    v.checked_inner(u)?;
    uv.checked_mul(&uv)?;
    u.checked_inner(u)?.checked_mul(&v.checked_inner(v)?)?;
    u.checked_scale(a)?
        .checked_plus(v.checked_scale(b)?)?
        .checked_inner(w)?;
    let au = a.checked_mul(&u.checked_inner(w)?)?;
    let bv = b.checked_mul(&v.checked_inner(w)?)?;
    au.checked_add(&bv).map(drop)
}

fn inverse_check<T: OrderedField>(level: Level, row: usize, value: &T) -> LawCheck {
    match multiplicative_inverse(value) {
        Ok(pass) => row_check(level, "multiplicative_inverse", row, pass),
        Err(err) if err.is_division_by_zero() => {
            row_check(level, "multiplicative_inverse", row, true)
                .with_note("zero witness has no inverse; check is vacuous")
        }
        Err(err) => {
            row_check(level, "multiplicative_inverse", row, false).with_note(err.to_string())
        }
    }
}

fn ordered_field_checks<T: OrderedField + CheckedArithmetic>(
    level: Level,
    row: usize,
    values: &[T; 3],
    checks: &mut Vec<LawCheck>,
) {
    let [a, b, c] = values;
    let fits = row_fits(values)
        .and_then(|_| negation_fits(a))
        .and_then(|_| inverse_fits(a));
    if fits.is_none() {
        checks.push(out_of_range(level, row));
        return;
    }
    checks.push(row_check(level, "associative", row, associative(a, b, c)));
    checks.push(row_check(level, "commutative", row, commutative(a, b)));
    checks.push(row_check(level, "additive_identity", row, additive_identity(a)));
    checks.push(row_check(level, "additive_inverse", row, additive_inverse(a)));
    checks.push(row_check(
        level,
        "multiplicative_commutative",
        row,
        multiplicative_commutative(a, b),
    ));
    checks.push(row_check(
        level,
        "multiplicative_identity",
        row,
        multiplicative_identity(a),
    ));
    checks.push(row_check(level, "distributive", row, distributive(a, b, c)));
    checks.push(inverse_check(level, row, a));
    checks.push(row_check(
        level,
        "order_compatible_add",
        row,
        order_compatible_add(a, b, c),
    ));
    checks.push(row_check(
        level,
        "order_compatible_mul",
        row,
        order_compatible_mul(a, b),
    ));
}

fn injection_checks<T>(row: usize, from: Level, [a, b, _]: &[T; 3], checks: &mut Vec<LawCheck>)
where
    T: Inject + TotallyOrdered,
    T::Next: TotallyOrdered,
{
    let law = format!("{}_preserves_equality", from.as_str());
    checks.push(row_check(
        Level::Injection,
        &law,
        row,
        injection_preserves_equality(a, b),
    ));
    let law = format!("{}_preserves_order", from.as_str());
    checks.push(row_check(
        Level::Injection,
        &law,
        row,
        injection_preserves_order(a, b),
    ));
}

/// Re-evaluates every compile-time witness law.
pub fn run_witness_laws() -> Vec<LawCheck> {
    WITNESS_LAWS
        .iter()
        .map(|law| LawCheck::evaluated(law.name, law.level, (law.check)()))
        .collect()
}

/// Evaluates the generic law predicates over every row of `plan`.
pub fn run_plan(plan: &WitnessPlan) -> Vec<LawCheck> {
    let mut checks = Vec::new();

    for (row, values) in plan.natural_rows().enumerate() {
        let [a, b, c] = &values;
        let level = Level::Natural;
        if row_fits(&values).is_none() {
            checks.push(out_of_range(level, row));
        } else {
            checks.push(row_check(level, "associative", row, associative(a, b, c)));
            checks.push(row_check(level, "commutative", row, commutative(a, b)));
            checks.push(row_check(level, "additive_identity", row, additive_identity(a)));
            checks.push(row_check(
                level,
                "multiplicative_commutative",
                row,
                multiplicative_commutative(a, b),
            ));
            checks.push(row_check(
                level,
                "multiplicative_identity",
                row,
                multiplicative_identity(a),
            ));
            checks.push(row_check(level, "distributive", row, distributive(a, b, c)));
        }
        injection_checks(row, level, &values, &mut checks);
    }

    for (row, values) in plan.integer_rows().enumerate() {
        let [a, b, c] = &values;
        let level = Level::Integer;
        if row_fits(&values).and_then(|_| negation_fits(a)).is_none() {
            checks.push(out_of_range(level, row));
        } else {
            checks.push(row_check(level, "associative", row, associative(a, b, c)));
            checks.push(row_check(level, "commutative", row, commutative(a, b)));
            checks.push(row_check(level, "additive_inverse", row, additive_inverse(a)));
            checks.push(row_check(
                level,
                "multiplicative_commutative",
                row,
                multiplicative_commutative(a, b),
            ));
            checks.push(row_check(level, "distributive", row, distributive(a, b, c)));
        }
        injection_checks(row, level, &values, &mut checks);
    }

    for (row, values) in plan.rational_rows().enumerate() {
        ordered_field_checks(Level::Rational, row, &values, &mut checks);
        injection_checks(row, Level::Rational, &values, &mut checks);
    }

    for (row, values) in plan.real_rows().enumerate() {
        ordered_field_checks(Level::Real, row, &values, &mut checks);
    }

    for (row, witness) in plan.vectors.iter().enumerate() {
        let (u, v, w) = witness.vectors();
        let (a, b) = witness.scalars();
        let level = Level::InnerProduct;
        if vector_row_fits(u, v, w, a, b).is_none() {
            checks.push(out_of_range(level, row));
            continue;
        }
        checks.push(row_check(level, "commutative", row, Verify::commutative(&u, &v)));
        checks.push(row_check(
            level,
            "linear",
            row,
            Verify::linear(&a, &u, &b, &v, &w),
        ));
        checks.push(row_check(
            level,
            "positive_definite",
            row,
            Verify::positive_definite(&u) && Verify::positive_definite(&v),
        ));
        checks.push(row_check(
            level,
            "cauchy_schwarz",
            row,
            Verify::cauchy_schwarz(&u, &v),
        ));
    }

    checks
}

/// Runs the witness laws and an optional plan under `policy`.
///
/// With a strict policy the first failing check is returned as
/// [`TowerError::Law`]; otherwise failures are recorded in the report.
pub fn run_laws(plan: Option<&WitnessPlan>, policy: &Policy) -> Result<LawReport, TowerError> {
    let mut checks = Vec::new();
    if policy.include_witness_laws {
        checks.extend(run_witness_laws());
    }
    if let Some(plan) = plan {
        checks.extend(run_plan(plan));
    }

    for check in &checks {
        debug!(law = %check.name, level = check.level.as_str(), pass = check.pass, "evaluated law");
        if !check.pass {
            warn!(law = %check.name, note = ?check.note, "law failed");
            if policy.strict {
                return Err(check.to_error());
            }
        }
    }

    if policy.require_nonempty {
        validate_checks(&checks)?;
    }
    let report = LawReport::new(checks)?;
    info!(
        passed = report.passed,
        failed = report.failed,
        hash = %report.analysis_hash,
        "law report ready"
    );
    Ok(report)
}

/// Startup self-check: fails with the first witness law that does not hold.
///
/// The same laws are asserted during compilation, so this only fails on
/// targets where those assertions were not evaluated.
pub fn self_check() -> Result<(), TowerError> {
    match run_witness_laws().into_iter().find(|check| !check.pass) {
        Some(failed) => Err(failed.to_error()),
        None => Ok(()),
    }
}
