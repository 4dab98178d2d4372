//! Lazy combinatorial enumeration.
//!
//! All producers returned here are finite, lazy and cheap to clone. Cloning a
//! producer restarts the enumeration, which is what the rule generator needs
//! to cross every symbol ordering with every vertex selection without
//! materialising either sequence.
use crate::binomial::{binomial, factorial};
use crate::types::Result;
use itertools::Itertools;
use num::BigUint;

/// All `q!` orderings of the slots of `term`.
///
/// Repeated symbols are not merged: `"xx"` yields `['x', 'x']` twice.
pub fn slot_permutations<S: Clone>(term: &[S]) -> impl Iterator<Item = Vec<S>> + Clone + '_ {
    term.iter().cloned().permutations(term.len())
}

/// All combinations with replacement of `degree` vertices.
///
/// There are `C(k + degree, degree)` of them for `k + 1` vertices, each
/// returned in the order of `vertices`.
pub fn vertex_selections<V: Clone>(
    vertices: &[V],
    degree: usize,
) -> impl Iterator<Item = Vec<V>> + Clone + '_ {
    vertices.iter().cloned().combinations_with_replacement(degree)
}

/// Number of `(ordering, selection)` pairs visited for a term of the given
/// degree on a simplex of the given dimension, i.e. `q! * C(k + q, q)`.
pub fn enumeration_size(degree: usize, dimension: usize) -> Result<BigUint> {
    Ok(factorial(degree) * binomial((dimension + degree) as i64, degree as i64)?)
}

/// All monomial terms of degree `0..=order` in the given variables.
///
/// Terms are listed by increasing degree and, within a degree, in the order of
/// combinations with replacement of `variables`:
/// `monomial_terms("xy", 2) == ["", "x", "y", "xx", "xy", "yy"]`.
pub fn monomial_terms(variables: &str, order: usize) -> Vec<String> {
    let symbols = variables.chars().collect::<Vec<_>>();
    (0..=order)
        .flat_map(|degree| {
            vertex_selections(&symbols, degree)
                .map(|term| term.into_iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .collect()
}
