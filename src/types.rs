//! Type definitions.
use num::{BigInt, BigRational, One, ToPrimitive, Zero};

/// Quadrature error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadratureError {
    /// Malformed or inconsistent input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// A canonical weighted term.
///
/// The term stores one `(symbol, vertex)` pair for each slot of the monomial,
/// kept in sorted order. Two assignments of symbols to vertices that only
/// differ in the order of their slots therefore compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedTerm<S, V> {
    pairs: Vec<(S, V)>,
}

impl<S: Ord, V: Ord> WeightedTerm<S, V> {
    /// Create a canonical term from pairs given in any order.
    pub fn new(mut pairs: Vec<(S, V)>) -> Self {
        pairs.sort();
        Self { pairs }
    }
}

impl<S, V> WeightedTerm<S, V> {
    /// The sorted `(symbol, vertex)` pairs.
    pub fn pairs(&self) -> &[(S, V)] {
        &self.pairs
    }

    /// Degree of the term.
    pub fn degree(&self) -> usize {
        self.pairs.len()
    }
}

/// An exact quadrature rule for a single monomial over a simplex.
///
/// The value of the rule is `multiplier * sum(multiplicity * term)`, where each
/// term is the product of the vertex coordinates it names. This equals the
/// average of the monomial over the simplex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRule<S, V> {
    pub(crate) degree: usize,
    pub(crate) dimension: usize,
    pub(crate) terms: Vec<(WeightedTerm<S, V>, usize)>,
    pub(crate) multiplier: BigRational,
}

impl<S, V> ExactRule<S, V> {
    /// The weighted terms and their multiplicities, sorted by term.
    pub fn terms(&self) -> &[(WeightedTerm<S, V>, usize)] {
        &self.terms
    }

    /// The rational multiplier, in lowest terms.
    pub fn multiplier(&self) -> &BigRational {
        &self.multiplier
    }

    /// Degree of the monomial.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Topological dimension of the simplex.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of distinct weighted terms.
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// The multiplier applied to the sum of all multiplicities.
    ///
    /// This is the value of the rule when every coordinate is one, so it is
    /// always exactly one.
    pub fn weight_sum(&self) -> BigRational {
        let total = self
            .terms
            .iter()
            .fold(BigInt::zero(), |acc, (_, count)| acc + BigInt::from(*count));
        &self.multiplier * BigRational::from_integer(total)
    }

    /// Evaluate the rule exactly for given vertex coordinates.
    ///
    /// `coord(symbol, vertex)` returns the coordinate `symbol` of `vertex`.
    pub fn evaluate(&self, coord: impl Fn(&S, &V) -> BigRational) -> BigRational {
        let sum = self
            .terms
            .iter()
            .fold(BigRational::zero(), |acc, (term, count)| {
                let product = term
                    .pairs()
                    .iter()
                    .fold(BigRational::one(), |p, (s, v)| p * coord(s, v));
                acc + product * BigRational::from_integer(BigInt::from(*count))
            });
        sum * &self.multiplier
    }

    /// Evaluate the rule in floating point arithmetic.
    pub fn evaluate_f64(&self, coord: impl Fn(&S, &V) -> f64) -> f64 {
        let sum: f64 = self
            .terms
            .iter()
            .map(|(term, count)| {
                *count as f64
                    * term
                        .pairs()
                        .iter()
                        .map(|(s, v)| coord(s, v))
                        .product::<f64>()
            })
            .sum();
        let numer = self.multiplier.numer().to_f64().unwrap_or(f64::NAN);
        let denom = self.multiplier.denom().to_f64().unwrap_or(f64::NAN);
        sum * numer / denom
    }
}
