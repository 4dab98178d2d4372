//! Exact factorials and binomial coefficients.
use crate::types::{QuadratureError, Result};
use num::{BigUint, One};

/// Compute `n!` exactly.
pub fn factorial(n: usize) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
}

/// Compute the binomial coefficient `n choose k` exactly.
///
/// Fails if either argument is negative or if `k > n`.
pub fn binomial(n: i64, k: i64) -> Result<BigUint> {
    if n < 0 || k < 0 {
        return Err(QuadratureError::InvalidArgument(format!(
            "binomial coefficient of negative arguments ({n}, {k})"
        )));
    }
    if k > n {
        return Err(QuadratureError::InvalidArgument(format!(
            "binomial coefficient with k = {k} larger than n = {n}"
        )));
    }
    // Multiplicative formula; every partial product is itself a binomial
    // coefficient, so the division is exact.
    let k = std::cmp::min(k, n - k) as u64;
    let n = n as u64;
    Ok((0..k).fold(BigUint::one(), |acc, i| {
        acc * BigUint::from(n - i) / BigUint::from(i + 1)
    }))
}
