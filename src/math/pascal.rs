use std::mem;

use super::bignat::BigNat;

/// Row `n` of Pascal's triangle: entry `i` is C(n, i).
pub type CoefficientRow = Vec<BigNat>;

/// Builds row `n` upward from row 0 with C(n,i) = C(n-1,i-1) + C(n-1,i).
///
/// Two buffers are swapped each round so no division or factorial is needed.
pub fn row(n: u32) -> CoefficientRow {
    let mut previous: CoefficientRow = vec![BigNat::one()];
    let mut current: CoefficientRow = Vec::with_capacity(n as usize + 1);

    for degree in 1..=n as usize {
        current.clear();
        current.push(BigNat::one());
        for i in 1..degree {
            current.push(previous[i - 1].add(&previous[i]));
        }
        current.push(BigNat::one());
        mem::swap(&mut previous, &mut current);
    }

    previous
}
