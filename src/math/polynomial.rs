use super::bignat::BigNat;
use super::pascal::{self, CoefficientRow};
use super::power::power;

/// One term `C(n,i) * x^(n-i)` of the expansion, with the sum so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub coefficient: BigNat,
    pub exponent: u32,
    pub power: BigNat,
    pub product: BigNat,
    pub running_sum: BigNat,
}

pub type TermBreakdown = Vec<Term>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub terms: TermBreakdown,
    pub sum: BigNat,
    /// `(x + 1)^n`, computed without the coefficient row.
    pub cross_check: BigNat,
    /// Always true unless the arithmetic is broken.
    pub identity_holds: bool,
}

/// Evaluates f(x) = sum of C(n,i) * x^(n-i) term by term and checks it against (x+1)^n.
pub fn evaluate(n: u32, x: u64) -> Evaluation {
    evaluate_row(&pascal::row(n), x)
}

/// Same as [`evaluate`] for an already generated row, whose degree is `row.len() - 1`.
pub fn evaluate_row(row: &CoefficientRow, x: u64) -> Evaluation {
    let n = row.len().saturating_sub(1) as u32;
    let base = BigNat::from(x);

    let mut sum = BigNat::ZERO;
    let terms = row
        .iter()
        .enumerate()
        .map(|(i, coefficient)| {
            let exponent = n - i as u32;
            let power = power(&base, exponent as i64);
            let product = coefficient.multiply(&power);
            sum += &product;
            Term {
                coefficient: coefficient.clone(),
                exponent,
                power,
                product,
                running_sum: sum.clone(),
            }
        })
        .collect();

    let cross_check = power(&base.add(&BigNat::one()), n as i64);
    let identity_holds = sum == cross_check;

    Evaluation { terms, sum, cross_check, identity_holds }
}
