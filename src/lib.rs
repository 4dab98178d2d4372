//! Exact quadrature rules for monomials on simplices.
//!
//! The rules are computed by counting vertex assignments, so they carry no
//! floating point error:
//!
//! ```
//! use simplex_quadrature::{exact_rule_str, format_rule};
//!
//! let rule = exact_rule_str("xy", &[0, 1]).unwrap();
//! assert_eq!(format_rule(&rule), "1/6 (2 x0y0 + x0y1 + x1y0 + 2 x1y1)");
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

pub mod binomial;
pub mod cache;
pub mod combinatorics;
pub mod constants;
pub mod exact_rules;
pub mod format;
pub mod oracle;
pub mod types;

pub use binomial::{binomial, factorial};
pub use cache::{cached_exact_rule_str, RuleCache};
pub use combinatorics::monomial_terms;
pub use exact_rules::{exact_rule, exact_rule_str, exact_rules};
pub use format::format_rule;
pub use types::{ExactRule, QuadratureError, Result, WeightedTerm};
