//! Memoisation of exact rules.
//!
//! A rule only depends on the multiset of symbols in its term, so the cache is
//! keyed by the sorted term together with the vertices. Permuted terms such as
//! `"xyx"` and `"xxy"` share one entry.
use crate::exact_rules::exact_rule;
use crate::types::{ExactRule, Result};
use log::trace;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

type CacheKey<S, V> = (Vec<S>, Vec<V>);

/// A cache of generated rules.
pub struct RuleCache<S, V> {
    rules: BTreeMap<CacheKey<S, V>, Arc<ExactRule<S, V>>>,
    hits: usize,
    misses: usize,
}

impl<S: Ord + Clone, V: Ord + Clone> Default for RuleCache<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord + Clone, V: Ord + Clone> RuleCache<S, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn key(term: &[S], vertices: &[V]) -> CacheKey<S, V> {
        let mut symbols = term.to_vec();
        symbols.sort();
        (symbols, vertices.to_vec())
    }

    /// Return the cached rule, if there is one.
    pub fn get(&self, term: &[S], vertices: &[V]) -> Option<Arc<ExactRule<S, V>>> {
        self.rules.get(&Self::key(term, vertices)).cloned()
    }

    /// Store a rule generated elsewhere.
    pub fn insert(&mut self, term: &[S], vertices: &[V], rule: Arc<ExactRule<S, V>>) {
        self.rules.insert(Self::key(term, vertices), rule);
    }

    /// Return the rule for `term` on `vertices`, generating it on a miss.
    pub fn rule(&mut self, term: &[S], vertices: &[V]) -> Result<Arc<ExactRule<S, V>>> {
        let key = Self::key(term, vertices);
        if let Some(rule) = self.rules.get(&key) {
            self.hits += 1;
            trace!("Rule cache hit ({} entries)", self.rules.len());
            return Ok(rule.clone());
        }
        self.misses += 1;
        trace!("Rule cache miss ({} entries)", self.rules.len());
        let rule = Arc::new(exact_rule(&key.0, vertices)?);
        self.rules.insert(key, rule.clone());
        Ok(rule)
    }

    /// Number of cached rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that generated a rule.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Remove all cached rules.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

lazy_static! {
    static ref RULE_CACHE: Mutex<RuleCache<char, usize>> = Mutex::new(RuleCache::new());
}

/// Return the rule for a string term from the process wide cache.
///
/// Generation happens outside the cache lock, so concurrent callers never wait
/// for each other's rules. Two callers racing for the same new rule may both
/// generate it; the results are identical.
pub fn cached_exact_rule_str(term: &str, vertices: &[usize]) -> Result<Arc<ExactRule<char, usize>>> {
    let symbols = term.chars().collect::<Vec<_>>();
    if let Some(rule) = lock_cache().get(&symbols, vertices) {
        trace!("Global rule cache hit for {term:?}");
        return Ok(rule);
    }
    let rule = Arc::new(exact_rule(&symbols, vertices)?);
    lock_cache().insert(&symbols, vertices, rule.clone());
    Ok(rule)
}

/// Number of rules in the process wide cache.
pub fn cached_rule_count() -> usize {
    lock_cache().len()
}

fn lock_cache() -> std::sync::MutexGuard<'static, RuleCache<char, usize>> {
    // The cache holds no invariant that a panicking holder could break.
    RULE_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
