use std::error::Error;

use clap::Args;
use serde::Serialize;
use tower_ips::Vector2;
use tower_num::{Integer, Natural, Rational, Real};
use tower_thy::to_canonical_json_bytes;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Emit the walk as canonical JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Decimal places used for rationals and reals.
    #[arg(long, default_value_t = 2)]
    pub precision: usize,
}

#[derive(Debug, Serialize, PartialEq)]
struct Step {
    level: &'static str,
    expression: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    tower: Vec<Step>,
    inner_products: Vec<Step>,
}

fn step(level: &'static str, expression: String, value: String) -> Step {
    Step {
        level,
        expression,
        value,
    }
}

fn build_report(precision: usize) -> DemoReport {
    let n1 = Natural::new(3);
    let n2 = Natural::new(5);

    let z1 = n1.inject();
    let z2 = Integer::new(7, 3);

    let q1 = z1.inject();
    let q2 = Rational::from_fraction(3, 4);

    let r1 = q1.inject();
    let r2 = q2.inject();

    let tower = vec![
        step("ℕ", format!("{n1} + {n2}"), (n1 + n2).to_string()),
        step("ℤ", format!("{z1} + {z2}"), (z1 + z2).to_string()),
        step(
            "ℚ",
            format!(
                "{:.p$} * {:.p$}",
                q1.to_f64(),
                q2.to_f64(),
                p = precision
            ),
            format!("{:.p$}", (q1 * q2).to_f64(), p = precision),
        ),
        step(
            "ℝ",
            format!("{r1:.p$} + {r2:.p$}", p = precision),
            format!("{:.p$}", r1 + r2, p = precision),
        ),
    ];

    let u = Vector2::from_i64(3, 4);
    let v = Vector2::from_i64(1, 2);
    let inner = |name: &str, a: Vector2, b: Vector2| -> Step {
        let value: Real = a.inner(b);
        step("ℝ²", name.to_string(), format!("{value:.p$}", p = precision))
    };
    let inner_products = vec![
        inner("⟨u,v⟩", u, v),
        inner("⟨v,u⟩", v, u),
        inner("⟨u,u⟩", u, u),
    ];

    DemoReport {
        tower,
        inner_products,
    }
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let report = build_report(args.precision);
    if args.json {
        let json = to_canonical_json_bytes(&report)?;
        println!("{}", String::from_utf8(json)?);
        return Ok(());
    }

    println!("Numeric tower\n");
    for step in &report.tower {
        println!("{}: {} = {}", step.level, step.expression, step.value);
    }
    println!("\nInner product space");
    println!("u = (3, 4)");
    println!("v = (1, 2)");
    for step in &report.inner_products {
        println!("{} = {}", step.expression, step.value);
    }
    println!("\nwitness laws verified at compile time: ℕ → ℤ → ℚ → ℝ → ℝ²");
    Ok(())
}
