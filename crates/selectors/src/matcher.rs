//! CSS selector matching engine.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{
    Combinator, ComplexSelector, CompoundSelector, ElementAdapter, SelectorList, SimpleSelector,
};

/// Match a selector list against an element.
/// Spec: Section 3, 4
pub fn matches_selector_list<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    list: &SelectorList,
) -> bool {
    list.selectors
        .iter()
        .any(|selector_item| matches_complex(adapter, element, selector_item))
}

/// Match a complex selector against an element.
/// Spec: Section 3, 11 — Right-to-left matching strategy
pub fn matches_complex<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
) -> bool {
    let Some(last_index) = sel.sequence.len().checked_sub(1) else {
        return false;
    };
    matches_from(adapter, element, sel, last_index)
}

/// Match a compound selector against a single element.
/// Spec: Section 5–8
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    compound
        .simples
        .iter()
        .all(|simple| matches_simple(adapter, element, simple))
}

/// Match one simple selector against an element.
/// Spec: Section 5–8
fn matches_simple<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    simple: &SimpleSelector,
) -> bool {
    match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(type_name) => adapter.tag_name(element) == type_name.as_str(),
        SimpleSelector::Class(class_name) => adapter.has_class(element, class_name.as_str()),
        SimpleSelector::IdSelector(id_value) => adapter
            .element_id(element)
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::AttrExists { name } => adapter.attr(element, name.as_str()).is_some(),
        SimpleSelector::AttrEquals { name, value } => adapter
            .attr(element, name.as_str())
            .is_some_and(|attr_value| attr_value == value.as_str()),
    }
}

/// Recursive right-to-left walk. The compound at `index` must match
/// `element`; the combinator stored one slot to the left says how the next
/// compound relates. Descendant and subsequent-sibling combinators try every
/// candidate, so one failing ancestor or sibling does not rule out another.
/// Spec: Section 11 — Combinators
fn matches_from<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
    index: usize,
) -> bool {
    let Some((compound, _)) = sel.sequence.get(index) else {
        return false;
    };
    if !matches_compound(adapter, element, compound) {
        return false;
    }
    let Some(left_index) = index.checked_sub(1) else {
        return true;
    };
    let combinator = sel
        .sequence
        .get(left_index)
        .and_then(|(_, combinator)| *combinator)
        .unwrap_or(Combinator::Descendant);
    match combinator {
        Combinator::Descendant => {
            let mut current_parent = adapter.parent(element);
            while let Some(ancestor_element) = current_parent {
                if matches_from(adapter, ancestor_element, sel, left_index) {
                    return true;
                }
                current_parent = adapter.parent(ancestor_element);
            }
            false
        }
        Combinator::Child => adapter
            .parent(element)
            .is_some_and(|parent_element| matches_from(adapter, parent_element, sel, left_index)),
        Combinator::NextSibling => adapter
            .previous_sibling_element(element)
            .is_some_and(|previous_element| {
                matches_from(adapter, previous_element, sel, left_index)
            }),
        Combinator::SubsequentSibling => {
            let mut current_sibling = adapter.previous_sibling_element(element);
            while let Some(sibling_element) = current_sibling {
                if matches_from(adapter, sibling_element, sel, left_index) {
                    return true;
                }
                current_sibling = adapter.previous_sibling_element(sibling_element);
            }
            false
        }
    }
}
