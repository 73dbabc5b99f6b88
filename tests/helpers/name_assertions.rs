//! Assertions over deresolved names.

#![allow(dead_code)]

use syster_names::model::{ElementId, ElementView, Model};
use syster_names::scope::{self, ModelScopes};
use syster_names::Deresolver;

/// Assert that `element` deresolves to `expected` from `context`.
pub fn assert_deresolves(
    deresolver: &Deresolver<ModelScopes<'_>>,
    element: &ElementId,
    context: &ElementId,
    expected: &str,
) {
    let name = deresolver.deresolved_name(Some(element), Some(context));
    assert_eq!(
        name.as_deref(),
        Some(expected),
        "Expected {} seen from {} to be named '{}'",
        element,
        context,
        expected
    );
}

/// Assert that the name `element` gets from `context` resolves back to the
/// element's owning membership.
pub fn assert_round_trip(
    model: &Model,
    deresolver: &Deresolver<ModelScopes<'_>>,
    element: &ElementId,
    context: &ElementId,
) {
    let name = deresolver
        .deresolved_name(Some(element), Some(context))
        .unwrap_or_else(|| panic!("Expected a name for {}", element));
    let source = scope::deresolving_namespace(model, context)
        .unwrap_or_else(|| panic!("Expected a deresolving namespace for {}", context));
    let resolved = scope::resolve(model, &source, &name)
        .unwrap_or_else(|| panic!("'{}' does not resolve from {}", name, source));
    let owning = ElementView::from_id(element, model)
        .and_then(|e| e.owning_membership())
        .unwrap_or_else(|| panic!("Expected an owning membership for {}", element));
    assert_eq!(
        &resolved,
        owning.id(),
        "'{}' written at {} does not resolve to the owning membership of {}",
        name,
        context,
        element
    );
}

/// Named, non-relationship elements of `model`.
pub fn named_elements(model: &Model) -> Vec<ElementId> {
    model
        .iter_elements()
        .filter(|e| !e.kind.is_relationship() && e.name.is_some())
        .map(|e| e.id.clone())
        .collect()
}
