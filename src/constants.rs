//! Crate wide constants.

/// Enumeration size above which rule generation logs a warning.
///
/// The work of the rule generator grows like `q! * C(k + q, q)` for a term of
/// degree `q` on a `k`-simplex.
pub const LARGE_ENUMERATION_WARNING: u64 = 10_000_000;
