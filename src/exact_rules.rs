//! Exact quadrature rules for monomials on simplices.
//!
//! The average of a degree `q` monomial over a `k`-simplex, written in the
//! affine coordinates of the simplex vertices, is the average over all ways of
//! assigning the `q` slots of the monomial to the `k + 1` vertices. The rule is
//! obtained by counting these assignments: every ordering of the symbols of the
//! term is crossed with every combination with replacement of vertices, and
//! each resulting set of `(symbol, vertex)` pairs is counted once. The
//! normalisation is `q! * C(k + q, q)`, the total number of pairs visited.
use crate::combinatorics::{enumeration_size, slot_permutations, vertex_selections};
use crate::constants::LARGE_ENUMERATION_WARNING;
use crate::types::{ExactRule, QuadratureError, Result, WeightedTerm};
use itertools::Itertools;
use log::{debug, warn};
use num::{BigInt, BigRational, BigUint, Integer};
use rayon::prelude::*;
use std::collections::BTreeMap;

fn check_vertices<V: Ord>(vertices: &[V]) -> Result<()> {
    if vertices.is_empty() {
        return Err(QuadratureError::InvalidArgument(String::from(
            "a simplex needs at least one vertex",
        )));
    }
    if vertices.iter().sorted().tuple_windows().any(|(a, b)| a == b) {
        return Err(QuadratureError::InvalidArgument(String::from(
            "simplex vertices must be distinct",
        )));
    }
    Ok(())
}

/// Compute the exact quadrature rule of the monomial `term` on the simplex
/// with the given vertices.
///
/// The returned rule lists each canonical weighted term once, sorted, with its
/// multiplicity. The multiplicities share no common factor; the factor removed
/// from them is moved into the multiplier.
pub fn exact_rule<S, V>(term: &[S], vertices: &[V]) -> Result<ExactRule<S, V>>
where
    S: Ord + Clone,
    V: Ord + Clone,
{
    check_vertices(vertices)?;

    let degree = term.len();
    let dimension = vertices.len() - 1;

    let size = enumeration_size(degree, dimension)?;
    if size > BigUint::from(LARGE_ENUMERATION_WARNING) {
        warn!(
            "Generating a rule of degree {} on a {}-simplex visits {} vertex assignments.",
            degree, dimension, size
        );
    }

    let mut counter = BTreeMap::<WeightedTerm<S, V>, usize>::new();
    for (symbols, selection) in
        slot_permutations(term).cartesian_product(vertex_selections(vertices, degree))
    {
        let pairs = symbols.into_iter().zip(selection).collect::<Vec<_>>();
        *counter.entry(WeightedTerm::new(pairs)).or_insert(0) += 1;
    }

    // The counter is never empty: there is always at least one ordering and
    // one selection, both empty for a constant term.
    let gcd = counter.values().fold(0usize, |acc, count| acc.gcd(count));

    let terms = counter
        .into_iter()
        .map(|(key, count)| (key, count / gcd))
        .collect::<Vec<_>>();

    let multiplier = BigRational::new(BigInt::from(gcd), BigInt::from(size));

    debug!(
        "Exact rule of degree {} on a {}-simplex: {} terms, multiplier {}",
        degree,
        dimension,
        terms.len(),
        multiplier
    );

    Ok(ExactRule {
        degree,
        dimension,
        terms,
        multiplier,
    })
}

/// Compute the exact rule for a term given as a string of one character
/// symbols, such as `"xxy"`.
pub fn exact_rule_str(term: &str, vertices: &[usize]) -> Result<ExactRule<char, usize>> {
    let symbols = term.chars().collect::<Vec<_>>();
    exact_rule(&symbols, vertices)
}

/// Compute the exact rules of several terms on the same simplex.
///
/// The terms are processed in parallel. The output is in the order of `terms`.
pub fn exact_rules<S, V>(terms: &[Vec<S>], vertices: &[V]) -> Result<Vec<ExactRule<S, V>>>
where
    S: Ord + Clone + Send + Sync,
    V: Ord + Clone + Send + Sync,
{
    check_vertices(vertices)?;
    terms
        .par_iter()
        .map(|term| exact_rule(term, vertices))
        .collect()
}
