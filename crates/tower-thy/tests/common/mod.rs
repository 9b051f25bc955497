use tower_thy::{Fraction, VectorWitness, WitnessPlan};

/// [`sample_plan`] written by hand as YAML.
#[allow(dead_code)]
pub const SAMPLE_YAML: &str = "\
naturals:
  - [2, 3, 4]
  - [0, 7, 11]
integers:
  - [3, -2, 7]
  - [-5, 0, 4]
rationals:
  - [[2, 3], [1, 2], [3, 5]]
  - [[0, 4], [-7, 3], [5, 6]]
reals:
  - [[1, 2], [-3, 4], [5, 1]]
vectors:
  - u: [[3, 1], [4, 1]]
    v: [[1, 1], [2, 1]]
    w: [[-2, 1], [5, 1]]
    a: [2, 1]
    b: [-1, 3]
";

pub fn sample_plan() -> WitnessPlan {
    WitnessPlan {
        naturals: vec![[2, 3, 4], [0, 7, 11]],
        integers: vec![[3, -2, 7], [-5, 0, 4]],
        rationals: vec![
            [Fraction(2, 3), Fraction(1, 2), Fraction(3, 5)],
            [Fraction(0, 4), Fraction(-7, 3), Fraction(5, 6)],
        ],
        reals: vec![[Fraction(1, 2), Fraction(-3, 4), Fraction(5, 1)]],
        vectors: vec![VectorWitness {
            u: [Fraction(3, 1), Fraction(4, 1)],
            v: [Fraction(1, 1), Fraction(2, 1)],
            w: [Fraction(-2, 1), Fraction(5, 1)],
            a: Fraction(2, 1),
            b: Fraction(-1, 3),
        }],
    }
}
