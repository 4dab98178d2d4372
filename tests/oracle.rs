use paste::paste;
use simplex_quadrature::combinatorics::monomial_terms;
use simplex_quadrature::exact_rule;
use simplex_quadrature::oracle::{rule_agrees, rule_polynomial, simplex_average};

fn check_terms(terms: &[String], vertices: &[usize]) {
    for term in terms {
        let symbols = term.chars().collect::<Vec<_>>();
        let rule = exact_rule(&symbols, vertices).unwrap();
        assert!(
            rule_agrees(&symbols, vertices, &rule).unwrap(),
            "rule for {term:?} on {vertices:?} disagrees with integration: {rule}"
        );
    }
}

macro_rules! test_simplex {

    ($(($name:ident, $nvertices:expr, $variables:expr, $order:expr)),+) => {

    $(
        paste! {

            #[test]
            fn [<test_oracle_ $name>]() {
                let vertices = (0..$nvertices).collect::<Vec<usize>>();
                check_terms(&monomial_terms($variables, $order), &vertices);
            }

        }
    )*
    };
}

test_simplex!(
    (point, 1, "xy", 3),
    (interval, 2, "xy", 3),
    (triangle, 3, "xy", 3),
    (tetrahedron, 4, "xyz", 2),
    (four_simplex, 5, "xy", 2)
);

#[test]
fn test_oracle_tetrahedron_cubic() {
    let terms = ["xxx", "xxy", "xyz"]
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>();
    check_terms(&terms, &[0, 1, 2, 3]);
}

#[test]
fn test_oracle_arbitrary_vertex_labels() {
    let symbols = ['x', 'y'];
    let vertices = [4, 9, 2];
    let rule = exact_rule(&symbols, &vertices).unwrap();
    assert_eq!(
        simplex_average(&symbols, &vertices).unwrap(),
        rule_polynomial(&rule)
    );
}

#[test]
fn test_oracle_detects_wrong_rule() {
    let rule = exact_rule(&['x', 'x'], &[0, 1]).unwrap();
    assert!(!rule_agrees(&['x', 'y'], &[0, 1], &rule).unwrap());
    assert!(!rule_agrees(&['x', 'x'], &[0, 1, 2], &rule).unwrap());
}
