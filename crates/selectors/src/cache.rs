//! CSS selector match caching.
//! Spec: Section 3 — Matching is stable unless the tree or attributes change

use crate::{Combinator, ComplexSelector};
use core::hash::{Hash as _, Hasher as _};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;

/// A per-element, per-selector memo of match results.
///
/// Match results stay valid until the document changes. Callers must call
/// [`MatchCache::invalidate_for_element`] when a single element's tag, id,
/// class or attribute data changes, or [`MatchCache::clear`] when a change
/// can affect matches beyond the element itself (combinators make a match
/// depend on ancestors and earlier siblings too).
#[derive(Default)]
pub struct MatchCache {
    /// Per-element per-selector memoized match results.
    store: HashMap<(u64, u64), bool>,
}

impl MatchCache {
    /// Cache a result.
    #[inline]
    pub fn set(&mut self, element_key: u64, selector_key: u64, matched: bool) {
        self.store.insert((element_key, selector_key), matched);
    }

    /// Get a cached result.
    #[inline]
    #[must_use]
    pub fn get(&self, element_key: u64, selector_key: u64) -> Option<bool> {
        self.store.get(&(element_key, selector_key)).copied()
    }

    /// Invalidate cached results for one element.
    #[inline]
    pub fn invalidate_for_element(&mut self, element_key: u64) {
        self.store
            .retain(|&(cached_element_key, _), _| cached_element_key != element_key);
    }

    /// Drop every cached result.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of memoized entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing is memoized.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Build a stable key for a selector to use with `MatchCache`.
/// Hashes the structure, so selectors differing only in a combinator get
/// distinct keys.
#[must_use]
pub fn calc_selector_key(sel: &ComplexSelector) -> u64 {
    let mut hasher = DefaultHasher::new();
    for (compound, combinator) in &sel.sequence {
        for simple in &compound.simples {
            simple.hash(&mut hasher);
        }
        match combinator {
            None => 0u8.hash(&mut hasher),
            Some(Combinator::Descendant) => 1u8.hash(&mut hasher),
            Some(Combinator::Child) => 2u8.hash(&mut hasher),
            Some(Combinator::NextSibling) => 3u8.hash(&mut hasher),
            Some(Combinator::SubsequentSibling) => 4u8.hash(&mut hasher),
        }
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_complex_selector;

    /// Test storing, reading back and clearing match results.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_set_get_clear() {
        let mut cache = MatchCache::default();
        assert!(cache.is_empty());
        cache.set(1, 10, true);
        cache.set(2, 10, false);
        assert_eq!(cache.get(1, 10), Some(true));
        assert_eq!(cache.get(2, 10), Some(false));
        assert_eq!(cache.get(3, 10), None);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.get(1, 10), None);
        assert!(cache.is_empty());
    }

    /// Test that invalidation removes one element's rows and nothing else.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_invalidate_for_element() {
        let mut cache = MatchCache::default();
        cache.set(1, 10, true);
        cache.set(1, 11, false);
        cache.set(2, 10, true);
        cache.invalidate_for_element(1);
        assert_eq!(cache.get(1, 10), None);
        assert_eq!(cache.get(1, 11), None);
        assert_eq!(cache.get(2, 10), Some(true));
    }

    /// Test that selectors differing only in a combinator hash differently.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_selector_key_distinguishes_combinators() {
        let descendant = parse_complex_selector("a b").unwrap();
        let child = parse_complex_selector("a > b").unwrap();
        let sibling = parse_complex_selector("a + b").unwrap();
        assert_ne!(calc_selector_key(&descendant), calc_selector_key(&child));
        assert_ne!(calc_selector_key(&child), calc_selector_key(&sibling));
        // Stable across repeated computation.
        assert_eq!(calc_selector_key(&child), calc_selector_key(&child));
    }

    /// Test that textual variants of the same selector share a key.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_selector_key_ignores_whitespace() {
        let spaced = parse_complex_selector("a  >  b").unwrap();
        let tight = parse_complex_selector("a>b").unwrap();
        assert_eq!(calc_selector_key(&spaced), calc_selector_key(&tight));
    }
}
