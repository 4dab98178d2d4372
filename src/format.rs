//! Human readable rendering of exact rules.
//!
//! A rule renders as `"{numer}/{denom} ({terms})"`, or as the bare list of
//! terms if the multiplier is one. Terms are joined with `" + "` and a
//! multiplicity above one is written in front of its term, e.g.
//! `"1/6 (2 x0y0 + x0y1 + x1y0 + 2 x1y1)"`.
use crate::types::{ExactRule, WeightedTerm};
use itertools::Itertools;
use num::One;
use std::fmt;

impl<S: fmt::Display, V: fmt::Display> fmt::Display for WeightedTerm<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, vertex) in self.pairs() {
            write!(f, "{symbol}{vertex}")?;
        }
        Ok(())
    }
}

impl<S: fmt::Display, V: fmt::Display> fmt::Display for ExactRule<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expression = self
            .terms()
            .iter()
            .map(|(term, count)| {
                if *count > 1 {
                    format!("{count} {term}")
                } else {
                    term.to_string()
                }
            })
            .join(" + ");

        let multiplier = self.multiplier();
        if multiplier.is_one() {
            write!(f, "{expression}")
        } else {
            write!(
                f,
                "{}/{} ({})",
                multiplier.numer(),
                multiplier.denom(),
                expression
            )
        }
    }
}

/// Render a rule as a string.
pub fn format_rule<S: fmt::Display, V: fmt::Display>(rule: &ExactRule<S, V>) -> String {
    rule.to_string()
}
