use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Chunk radix: every stored chunk is strictly below this.
pub const BASE: u32 = 1_000_000_000;
/// Decimal digits held by one full chunk.
const CHUNK_DIGITS: usize = 9;

/// Unbounded non-negative integer stored as base 1e9 chunks, least-significant first.
///
/// The chunk vector never ends in a zero chunk, and zero is the empty vector.
/// That canonical form is what lets equality and hashing be structural.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigNat(Vec<u32>);

impl BigNat {
    pub const ZERO: BigNat = BigNat(Vec::new());

    pub fn one() -> Self {
        BigNat(vec![1])
    }

    pub fn from_unsigned(mut v: u64) -> Self {
        let mut chunks = Vec::new();
        while v > 0 {
            chunks.push((v % BASE as u64) as u32);
            v /= BASE as u64;
        }
        BigNat(chunks)
    }

    pub fn chunks(&self) -> &[u32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.0[..] == [1]
    }

    // only a carry-free top chunk can be zero here, interior zeros are kept
    fn trim(&mut self) {
        while self.0.last().is_some_and(|c| *c == 0) {
            self.0.pop();
        }
    }

    pub fn add(&self, other: &BigNat) -> BigNat {
        let mut out = self.clone();
        out.add_assign_ref(other);
        out
    }

    /// Adds `other` into this caller-owned value in place.
    pub fn add_assign_ref(&mut self, other: &BigNat) {
        let len = self.0.len().max(other.0.len());
        self.0.resize(len, 0);
        let mut carry = 0u64;
        for (i, chunk) in self.0.iter_mut().enumerate() {
            let sum = carry + *chunk as u64 + other.0.get(i).copied().unwrap_or(0) as u64;
            *chunk = (sum % BASE as u64) as u32;
            carry = sum / BASE as u64;
        }
        if carry != 0 {
            self.0.push(carry as u32);
        }
        self.trim();
    }

    /// Schoolbook product, O(len(a) * len(b)).
    pub fn multiply(&self, other: &BigNat) -> BigNat {
        if self.is_zero() || other.is_zero() {
            return BigNat::ZERO;
        }
        // every slot stays below BASE between rounds, so a*b + slot + carry fits in u64
        let mut work = vec![0u64; self.0.len() + other.0.len()];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.0.iter().enumerate() {
                let cur = work[i + j] + carry + a as u64 * b as u64;
                work[i + j] = cur % BASE as u64;
                carry = cur / BASE as u64;
            }
            let mut k = i + other.0.len();
            while carry != 0 {
                let cur = work[k] + carry;
                work[k] = cur % BASE as u64;
                carry = cur / BASE as u64;
                k += 1;
            }
        }
        let mut out = BigNat(work.into_iter().map(|c| c as u32).collect());
        out.trim();
        out
    }

    pub fn compare(&self, other: &BigNat) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }

    pub fn to_decimal_string(&self) -> String {
        let Some((top, rest)) = self.0.split_last() else {
            return "0".to_owned();
        };
        let mut out = top.to_string();
        for chunk in rest.iter().rev() {
            out += format!("{chunk:0width$}", width = CHUNK_DIGITS).as_str();
        }
        out
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_decimal_string())
    }
}

impl From<u64> for BigNat {
    fn from(v: u64) -> Self {
        BigNat::from_unsigned(v)
    }
}

impl From<u32> for BigNat {
    fn from(v: u32) -> Self {
        BigNat::from_unsigned(v as u64)
    }
}

impl Add<&BigNat> for &BigNat {
    type Output = BigNat;

    fn add(self, rhs: &BigNat) -> BigNat {
        BigNat::add(self, rhs)
    }
}

impl AddAssign<&BigNat> for BigNat {
    fn add_assign(&mut self, rhs: &BigNat) {
        self.add_assign_ref(rhs)
    }
}

impl Mul<&BigNat> for &BigNat {
    type Output = BigNat;

    fn mul(self, rhs: &BigNat) -> BigNat {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::Zero;
    use proptest::prelude::*;

    fn oracle(n: &BigNat) -> BigUint {
        n.chunks()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, c| acc * BASE + *c)
    }

    fn is_canonical(n: &BigNat) -> bool {
        n.chunks().iter().all(|c| *c < BASE) && n.chunks().last() != Some(&0)
    }

    fn big(chunks: Vec<u32>) -> BigNat {
        let mut n = BigNat(chunks.into_iter().map(|c| c % BASE).collect());
        n.trim();
        n
    }

    fn arb_bignat() -> impl Strategy<Value = BigNat> {
        prop::collection::vec(any::<u32>(), 0..6).prop_map(big)
    }

    #[test]
    fn zero_is_empty() {
        assert!(BigNat::from_unsigned(0).chunks().is_empty());
        assert_eq!(BigNat::from_unsigned(0), BigNat::ZERO);
        assert_eq!(BigNat::ZERO.to_decimal_string(), "0");
    }

    #[test]
    fn from_unsigned_splits_chunks() {
        let n = BigNat::from_unsigned(1_000_000_000);
        assert_eq!(n.chunks(), &[0, 1]);
        let n = BigNat::from_unsigned(u64::MAX);
        assert_eq!(n.chunks(), &[709_551_615, 446_744_073, 18]);
    }

    #[test]
    fn renders_interior_zero_chunks_padded() {
        let n = big(vec![7, 0, 12]);
        assert_eq!(n.to_decimal_string(), "12000000000000000007");
        assert_eq!(format!("{n}"), "12000000000000000007");
    }

    #[test]
    fn add_carries_into_new_chunk() {
        let a = BigNat::from_unsigned(999_999_999);
        let sum = a.add(&BigNat::one());
        assert_eq!(sum.chunks(), &[0, 1]);
        assert_eq!(sum.to_decimal_string(), "1000000000");
    }

    #[test]
    fn add_keeps_interior_zero() {
        let a = big(vec![5, 0, 3]);
        let sum = a.add(&BigNat::from_unsigned(1));
        assert_eq!(sum.chunks(), &[6, 0, 3]);
    }

    #[test]
    fn add_assign_mutates_in_place() {
        let mut acc = BigNat::ZERO;
        for _ in 0..3 {
            acc += &BigNat::from_unsigned(400_000_000);
        }
        assert_eq!(acc.to_decimal_string(), "1200000000");
    }

    #[test]
    fn multiply_by_zero_is_canonical_zero() {
        let a = BigNat::from_unsigned(123_456_789_012);
        assert_eq!(a.multiply(&BigNat::ZERO), BigNat::ZERO);
        assert_eq!(BigNat::ZERO.multiply(&a), BigNat::ZERO);
    }

    #[test]
    fn multiply_long_carry_chain() {
        let a = big(vec![999_999_999, 999_999_999, 999_999_999]);
        let product = &a * &a;
        assert_eq!(oracle(&product), oracle(&a) * oracle(&a));
        assert!(is_canonical(&product));
    }

    #[test]
    fn compare_orders_by_length_then_top_chunk() {
        let short = BigNat::from_unsigned(999_999_999);
        let long = BigNat::from_unsigned(1_000_000_000);
        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(big(vec![9, 2]).compare(&big(vec![1, 3])), Ordering::Less);
        assert_eq!(big(vec![9, 3]).compare(&big(vec![1, 3])), Ordering::Greater);
        assert_eq!(big(vec![1, 3]).compare(&big(vec![1, 3])), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn renders_like_native(v in any::<u64>()) {
            prop_assert_eq!(BigNat::from_unsigned(v).to_decimal_string(), v.to_string());
        }

        #[test]
        fn add_commutes_and_associates(a in arb_bignat(), b in arb_bignat(), c in arb_bignat()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
            prop_assert!(is_canonical(&a.add(&b)));
        }

        #[test]
        fn add_matches_oracle(a in arb_bignat(), b in arb_bignat()) {
            prop_assert_eq!(oracle(&a.add(&b)), oracle(&a) + oracle(&b));
        }

        #[test]
        fn multiply_laws(a in arb_bignat(), b in arb_bignat()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
            prop_assert_eq!(a.multiply(&BigNat::ZERO), BigNat::ZERO);
            prop_assert_eq!(a.multiply(&BigNat::one()), a.clone());
            prop_assert_eq!(oracle(&a.multiply(&b)), oracle(&a) * oracle(&b));
            prop_assert!(is_canonical(&a.multiply(&b)));
        }

        #[test]
        fn compare_matches_oracle(a in arb_bignat(), b in arb_bignat()) {
            prop_assert_eq!(a.compare(&b), oracle(&a).cmp(&oracle(&b)));
        }

        #[test]
        fn renders_like_oracle(a in arb_bignat()) {
            prop_assert_eq!(a.to_decimal_string(), oracle(&a).to_string());
        }
    }
}
