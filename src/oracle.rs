//! Independent check of exact rules by parametrised integration.
//!
//! The simplex with vertices `v_0, ..., v_k` is parametrised as
//! `p(t) = (1 - t_1 - ... - t_k) v_0 + t_1 v_1 + ... + t_k v_k` over the
//! reference simplex `t_i >= 0, t_1 + ... + t_k <= 1`. The monomial is
//! expanded as a polynomial in the parameters and the vertex coordinates and
//! integrated one parameter at a time, innermost first. Scaling by `k!`, the
//! inverse volume of the reference simplex, gives the average of the monomial,
//! which is what an exact rule evaluates to.
//!
//! Nothing in this module uses the rule generator, so agreement between
//! [`simplex_average`] and [`rule_polynomial`] is a genuine cross-check.
use crate::binomial::factorial;
use crate::types::{ExactRule, QuadratureError, Result};
use num::{BigInt, BigRational, One, Zero};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

/// A variable of an oracle polynomial.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable<S, V> {
    /// Simplex parameter `t_i`, counted from 1.
    Parameter(usize),
    /// Coordinate `symbol` of a vertex.
    Coordinate(S, V),
}

/// A monomial, as a map from variables to positive exponents.
type Exponents<S, V> = BTreeMap<Variable<S, V>, u32>;

/// A sparse multivariate polynomial with exact rational coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<S, V> {
    terms: BTreeMap<Exponents<S, V>, BigRational>,
}

impl<S: Ord + Clone, V: Ord + Clone> Polynomial<S, V> {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// A constant polynomial.
    pub fn constant(value: BigRational) -> Self {
        let mut p = Self::zero();
        p.add_term(Exponents::new(), value);
        p
    }

    /// The polynomial consisting of a single variable.
    pub fn variable(var: Variable<S, V>) -> Self {
        let mut exponents = Exponents::new();
        exponents.insert(var, 1);
        let mut p = Self::zero();
        p.add_term(exponents, BigRational::one());
        p
    }

    fn add_term(&mut self, exponents: Exponents<S, V>, coefficient: BigRational) {
        if coefficient.is_zero() {
            return;
        }
        let entry = self
            .terms
            .entry(exponents)
            .or_insert_with(BigRational::zero);
        *entry += coefficient;
        if entry.is_zero() {
            self.terms.retain(|_, c| !c.is_zero());
        }
    }

    /// Number of non-zero terms.
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// Is this the zero polynomial?
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Multiply by a rational scalar.
    pub fn scale(&self, factor: &BigRational) -> Self {
        let mut p = Self::zero();
        for (exponents, coefficient) in &self.terms {
            p.add_term(exponents.clone(), coefficient * factor);
        }
        p
    }

    /// Raise to a non-negative integer power.
    pub fn pow(&self, exponent: u32) -> Self {
        (0..exponent).fold(Self::constant(BigRational::one()), |acc, _| &acc * self)
    }

    /// Integrate with respect to the parameter `t_index` from zero to `upper`.
    ///
    /// `upper` must not contain `t_index`.
    pub fn integrate(&self, index: usize, upper: &Self) -> Self {
        let var = Variable::Parameter(index);
        let mut result = Self::zero();
        for (exponents, coefficient) in &self.terms {
            let mut rest = exponents.clone();
            let power = rest.remove(&var).unwrap_or(0) + 1;
            let mut factor = Self::zero();
            factor.add_term(
                rest,
                coefficient / BigRational::from_integer(BigInt::from(power)),
            );
            result = &result + &(&factor * &upper.pow(power));
        }
        result
    }

    /// Evaluate the polynomial, given the value of each variable.
    pub fn evaluate(&self, value: impl Fn(&Variable<S, V>) -> BigRational) -> BigRational {
        self.terms
            .iter()
            .fold(BigRational::zero(), |acc, (exponents, coefficient)| {
                let product = exponents
                    .iter()
                    .fold(coefficient.clone(), |p, (var, power)| {
                        p * num::pow(value(var), *power as usize)
                    });
                acc + product
            })
    }
}

impl<S: Ord + Clone, V: Ord + Clone> Add for &Polynomial<S, V> {
    type Output = Polynomial<S, V>;

    fn add(self, other: Self) -> Polynomial<S, V> {
        let mut p = self.clone();
        for (exponents, coefficient) in &other.terms {
            p.add_term(exponents.clone(), coefficient.clone());
        }
        p
    }
}

impl<S: Ord + Clone, V: Ord + Clone> Sub for &Polynomial<S, V> {
    type Output = Polynomial<S, V>;

    fn sub(self, other: Self) -> Polynomial<S, V> {
        let mut p = self.clone();
        for (exponents, coefficient) in &other.terms {
            p.add_term(exponents.clone(), -coefficient.clone());
        }
        p
    }
}

impl<S: Ord + Clone, V: Ord + Clone> Mul for &Polynomial<S, V> {
    type Output = Polynomial<S, V>;

    fn mul(self, other: Self) -> Polynomial<S, V> {
        let mut p = Polynomial::zero();
        for (left, a) in &self.terms {
            for (right, b) in &other.terms {
                let mut exponents = left.clone();
                for (var, power) in right {
                    *exponents.entry(var.clone()).or_insert(0) += power;
                }
                p.add_term(exponents, a * b);
            }
        }
        p
    }
}

/// The coordinate `symbol` of the point `p(t)` of the parametrised simplex.
fn parametrised_coordinate<S, V>(symbol: &S, vertices: &[V]) -> Polynomial<S, V>
where
    S: Ord + Clone,
    V: Ord + Clone,
{
    let one = Polynomial::constant(BigRational::one());
    let coordinate = |v: &V| Polynomial::variable(Variable::Coordinate(symbol.clone(), v.clone()));

    let mut base_weight = one;
    let mut result = Polynomial::zero();
    for (index, vertex) in vertices.iter().enumerate().skip(1) {
        let t = Polynomial::variable(Variable::Parameter(index));
        base_weight = &base_weight - &t;
        result = &result + &(&t * &coordinate(vertex));
    }
    &result + &(&base_weight * &coordinate(&vertices[0]))
}

/// The average of the monomial `term` over the simplex with the given
/// vertices, as a polynomial in the vertex coordinates.
pub fn simplex_average<S, V>(term: &[S], vertices: &[V]) -> Result<Polynomial<S, V>>
where
    S: Ord + Clone,
    V: Ord + Clone,
{
    if vertices.is_empty() {
        return Err(QuadratureError::InvalidArgument(String::from(
            "a simplex needs at least one vertex",
        )));
    }
    let dimension = vertices.len() - 1;

    let mut integrand = Polynomial::constant(BigRational::one());
    for symbol in term {
        integrand = &integrand * &parametrised_coordinate(symbol, vertices);
    }

    // t_k runs up to 1 - t_1 - ... - t_{k-1}, then t_{k-1} up to
    // 1 - t_1 - ... - t_{k-2}, and so on.
    for index in (1..=dimension).rev() {
        let mut upper = Polynomial::constant(BigRational::one());
        for inner in 1..index {
            upper = &upper - &Polynomial::variable(Variable::Parameter(inner));
        }
        integrand = integrand.integrate(index, &upper);
    }

    let volume_inverse = BigRational::from_integer(BigInt::from(factorial(dimension)));
    Ok(integrand.scale(&volume_inverse))
}

/// The value of a rule as a polynomial in the vertex coordinates.
pub fn rule_polynomial<S, V>(rule: &ExactRule<S, V>) -> Polynomial<S, V>
where
    S: Ord + Clone,
    V: Ord + Clone,
{
    let mut result = Polynomial::zero();
    for (term, count) in rule.terms() {
        let mut exponents = Exponents::new();
        for (symbol, vertex) in term.pairs() {
            *exponents
                .entry(Variable::Coordinate(symbol.clone(), vertex.clone()))
                .or_insert(0) += 1;
        }
        result.add_term(
            exponents,
            rule.multiplier() * BigRational::from_integer(BigInt::from(*count)),
        );
    }
    result
}

/// Check a rule against parametrised integration.
pub fn rule_agrees<S, V>(term: &[S], vertices: &[V], rule: &ExactRule<S, V>) -> Result<bool>
where
    S: Ord + Clone,
    V: Ord + Clone,
{
    Ok(simplex_average(term, vertices)? == rule_polynomial(rule))
}
