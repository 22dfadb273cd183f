//! Selector execution over a parsed document.
//!
//! Queries whose list is a single simple selector reuse the direct document
//! walks for ids, classes and tag names. Everything else goes through the
//! general matcher, with per-element results memoized by selector key.

use dom::{Document, NodeId};
use log::debug;
use selectors::{
    ComplexSelector, MatchCache, SelectorList, SimpleSelector, calc_selector_key, matches_complex,
};

use crate::adapter::{DocumentAdapter, node_key};
use crate::config::ClaspConfig;

/// The lone simple selector, when the whole list is one compound of one.
fn single_simple(list: &SelectorList) -> Option<&SimpleSelector> {
    let [selector] = list.selectors.as_slice() else {
        return None;
    };
    let [(compound, None)] = selector.sequence.as_slice() else {
        return None;
    };
    let [simple] = compound.simples.as_slice() else {
        return None;
    };
    Some(simple)
}

/// Direct walk for the selector shapes the document indexes by itself.
/// Must agree with the general matcher on every input it accepts, so an
/// id walk reports every carrier of the id, not just the first.
fn run_fast_path(document: &Document, simple: &SimpleSelector) -> Option<Vec<NodeId>> {
    match simple {
        SimpleSelector::Type(tag) => Some(document.get_elements_by_tag_name(tag)),
        SimpleSelector::Class(class) => Some(document.get_elements_by_class_name(class)),
        SimpleSelector::IdSelector(id) => Some(
            document
                .elements()
                .into_iter()
                .filter(|&node| {
                    document
                        .element(node)
                        .is_some_and(|data| data.id() == Some(id.as_str()))
                })
                .collect(),
        ),
        SimpleSelector::Universal => Some(document.elements()),
        SimpleSelector::AttrExists { .. } | SimpleSelector::AttrEquals { .. } => None,
    }
}

/// Resolve a parsed selector list against the document, in document order
/// with duplicates collapsed.
pub(crate) fn run_selector_list(
    document: &Document,
    cache: &mut MatchCache,
    config: ClaspConfig,
    selector_text: &str,
    list: &SelectorList,
) -> Vec<NodeId> {
    if config.query_fast_paths
        && let Some(simple) = single_simple(list)
        && let Some(matched) = run_fast_path(document, simple)
    {
        debug!(
            "query '{selector_text}' matched {} elements (fast path)",
            matched.len()
        );
        return matched;
    }
    let matched = run_general(document, cache, config, list);
    debug!("query '{selector_text}' matched {} elements", matched.len());
    matched
}

fn run_general(
    document: &Document,
    cache: &mut MatchCache,
    config: ClaspConfig,
    list: &SelectorList,
) -> Vec<NodeId> {
    let adapter = DocumentAdapter { document };
    let selector_keys: Vec<u64> = list.selectors.iter().map(calc_selector_key).collect();
    let mut matched = Vec::new();
    for element in document.elements() {
        let element_key = node_key(element);
        for (selector, &selector_key) in list.selectors.iter().zip(&selector_keys) {
            let hit = if config.query_cache_enabled {
                cached_match(&adapter, cache, element, element_key, selector, selector_key)
            } else {
                matches_complex(&adapter, element, selector)
            };
            if hit {
                matched.push(element);
                break;
            }
        }
    }
    matched
}

fn cached_match(
    adapter: &DocumentAdapter<'_>,
    cache: &mut MatchCache,
    element: NodeId,
    element_key: u64,
    selector: &ComplexSelector,
    selector_key: u64,
) -> bool {
    if let Some(hit) = cache.get(element_key, selector_key) {
        return hit;
    }
    let hit = matches_complex(adapter, element, selector);
    cache.set(element_key, selector_key, hit);
    hit
}
