use super::bignat::BigNat;
use super::polynomial::{Evaluation, Term};

// { 1, 4, 6, 4, 1 }
pub fn render_row(row: &[BigNat]) -> String {
    let entries: Vec<String> = row.iter().map(BigNat::to_decimal_string).collect();
    format!("{{ {} }}", entries.join(", "))
}

/// Renders the expanded polynomial, highest degree first, e.g. `f(x) = x^2 + 2*x + 1`.
pub fn render_polynomial(row: &[BigNat]) -> String {
    let n = row.len().saturating_sub(1);
    let terms: Vec<String> = row
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .map(|(i, c)| monomial(c, n - i))
        .collect();
    format!("f(x) = {}", terms.join(" + "))
}

fn monomial(coefficient: &BigNat, exponent: usize) -> String {
    let mut out = String::new();
    if exponent == 0 || !coefficient.is_one() {
        out += coefficient.to_decimal_string().as_str();
    }
    if exponent > 0 {
        if !coefficient.is_one() {
            out += "*";
        }
        out += "x";
        if exponent > 1 {
            out += format!("^{exponent}").as_str();
        }
    }
    out
}

pub fn render_term(index: usize, term: &Term, x: u64) -> String {
    format!(
        "term {index}: {c}*x^{e} = {c} * ({x}^{e}) = {c} * {p} = {prod}  => sum = {sum}",
        c = term.coefficient,
        e = term.exponent,
        p = term.power,
        prod = term.product,
        sum = term.running_sum,
    )
}

pub fn render_check(evaluation: &Evaluation, n: u32, x: u64) -> String {
    let x_plus_one = BigNat::from(x).add(&BigNat::one());
    format!("({x} + 1)^{n} = {x_plus_one}^{n} = {}", evaluation.cross_check)
}

#[test]
fn row_test() {
    use super::pascal::row;
    assert_eq!(render_row(&row(4)), "{ 1, 4, 6, 4, 1 }");
    assert_eq!(render_row(&row(0)), "{ 1 }");
}

#[test]
fn polynomial_test() {
    use super::pascal::row;
    assert_eq!(render_polynomial(&row(0)), "f(x) = 1");
    assert_eq!(render_polynomial(&row(1)), "f(x) = x + 1");
    assert_eq!(
        render_polynomial(&row(4)),
        "f(x) = x^4 + 4*x^3 + 6*x^2 + 4*x + 1"
    );
}

#[test]
fn trace_test() {
    let eval = super::polynomial::evaluate(4, 2);
    assert_eq!(
        render_term(1, &eval.terms[1], 2),
        "term 1: 4*x^3 = 4 * (2^3) = 4 * 8 = 32  => sum = 48"
    );
    assert_eq!(render_check(&eval, 4, 2), "(2 + 1)^4 = 3^4 = 81");
}
