use approx::assert_relative_eq;
use num::{BigInt, BigRational, One};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use simplex_quadrature::combinatorics::enumeration_size;
use simplex_quadrature::{exact_rule, exact_rule_str, QuadratureError};

#[test]
fn test_permuted_terms_give_identical_rules() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    for term in ["xxy", "xyz", "xxyyz", "xyyy"] {
        let mut symbols = term.chars().collect::<Vec<_>>();
        for nvertices in 1..5 {
            let vertices = (0..nvertices).collect::<Vec<usize>>();
            let expected = exact_rule(&symbols, &vertices).unwrap();
            for _ in 0..5 {
                symbols.shuffle(&mut rng);
                assert_eq!(exact_rule(&symbols, &vertices).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_vertex_order_does_not_matter() {
    let forward = exact_rule_str("xxy", &[0, 1, 2]).unwrap();
    let backward = exact_rule_str("xxy", &[2, 1, 0]).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_denominator_divides_enumeration_size() {
    for term in ["x", "xy", "xxy", "xxyz", "xxxx"] {
        for nvertices in 1..5 {
            let vertices = (0..nvertices).collect::<Vec<usize>>();
            let rule = exact_rule_str(term, &vertices).unwrap();
            let size = BigInt::from(enumeration_size(rule.degree(), rule.dimension()).unwrap());
            assert_eq!(&size % rule.multiplier().denom(), BigInt::from(0));
            assert_eq!(rule.weight_sum(), BigRational::one());
        }
    }
}

#[test]
fn test_float_evaluation_on_reference_triangle() {
    // Reference triangle (0, 0), (1, 0), (0, 1).
    let coords = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let coord = |symbol: &char, vertex: &usize| match symbol {
        'x' => coords[*vertex][0],
        _ => coords[*vertex][1],
    };

    // Averages over the triangle: x -> 1/3, x^2 -> 1/6, xy -> 1/12.
    let rule = exact_rule_str("x", &[0, 1, 2]).unwrap();
    assert_relative_eq!(rule.evaluate_f64(coord), 1.0 / 3.0, max_relative = 1E-14);
    let rule = exact_rule_str("xx", &[0, 1, 2]).unwrap();
    assert_relative_eq!(rule.evaluate_f64(coord), 1.0 / 6.0, max_relative = 1E-14);
    let rule = exact_rule_str("xy", &[0, 1, 2]).unwrap();
    assert_relative_eq!(rule.evaluate_f64(coord), 1.0 / 12.0, max_relative = 1E-14);
}

#[test]
fn test_exact_evaluation_on_scaled_interval() {
    // Average of x^3 over [0, 2] is 2.
    let rule = exact_rule_str("xxx", &[0, 1]).unwrap();
    let value = rule.evaluate(|_, vertex| BigRational::from_integer(BigInt::from(2 * *vertex)));
    assert_eq!(value, BigRational::from_integer(BigInt::from(2)));
}

#[test]
fn test_repeated_symbols_collapse() {
    // Every ordering of "xxxxxxx" gives the same key, so the 7! orderings
    // are absorbed into the multiplier.
    let rule = exact_rule_str("xxxxxxx", &[0, 1]).unwrap();
    assert_eq!(rule.nterms(), 8);
    assert!(rule.terms().iter().all(|(_, count)| *count == 1));
    assert_eq!(
        *rule.multiplier(),
        BigRational::new(BigInt::from(1), BigInt::from(8))
    );
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        exact_rule_str("x", &[]),
        Err(QuadratureError::InvalidArgument(String::from(
            "a simplex needs at least one vertex"
        )))
    );
    assert!(exact_rule_str("xy", &[1, 0, 1]).is_err());
}
