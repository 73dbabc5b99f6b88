//! Textual name → membership resolution.
//!
//! This is the inverse of deresolution and is only used to check that a
//! generated name reads back as the intended element.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::visibility::{VisibilityFilter, visible_memberships_with};
use crate::model::{ElementId, ElementView, MembershipView, Model};
use crate::names::split_qualified_name;

/// Resolve `name` as written inside `namespace`, returning the membership it
/// denotes.
///
/// The first segment is looked up lexically: in `namespace`, then in each
/// enclosing namespace (all visibilities, since nested scopes see the
/// private members of their enclosing namespaces), then among the public
/// members of every root namespace. Each further segment is looked up in
/// the previous member; its private members are only visible when it
/// encloses `namespace`.
pub fn resolve(model: &Model, namespace: &ElementId, name: &str) -> Option<ElementId> {
    let scope = ElementView::from_id(namespace, model)?;
    let segments = split_qualified_name(name)?;
    let (first, rest) = segments.split_first()?;

    let mut membership = resolve_first_segment(model, scope, first)?;
    for segment in rest {
        let container = membership.member_element()?;
        let filter = if encloses(container, scope) {
            VisibilityFilter::All
        } else {
            VisibilityFilter::PublicOnly
        };
        membership = find_named(model, container, filter, segment)?;
    }

    trace!(
        "[RESOLVE] '{}' in {} -> {}",
        name,
        namespace,
        membership.id()
    );
    Some(membership.id().clone())
}

fn resolve_first_segment<'m>(
    model: &'m Model,
    scope: ElementView<'m>,
    name: &str,
) -> Option<MembershipView<'m>> {
    let mut visited = FxHashSet::default();
    let mut current = Some(scope);
    while let Some(namespace) = current {
        if !visited.insert(namespace.id()) {
            break;
        }
        if let Some(found) = find_named(model, namespace, VisibilityFilter::All, name) {
            return Some(found);
        }
        current = namespace.owning_namespace();
    }

    model
        .iter_roots()
        .map(|root| ElementView::new(root, model))
        .filter(|root| root.is_namespace() && !visited.contains(root.id()))
        .find_map(|root| find_named(model, root, VisibilityFilter::PublicOnly, name))
}

fn find_named<'m>(
    model: &'m Model,
    namespace: ElementView<'m>,
    filter: VisibilityFilter,
    name: &str,
) -> Option<MembershipView<'m>> {
    let visible: Vec<MembershipView<'m>> = visible_memberships_with(model, namespace.id(), filter)
        .iter()
        .filter_map(|id| MembershipView::from_id(id, model))
        .collect();
    visible
        .iter()
        .find(|m| m.member_name() == Some(name))
        .or_else(|| visible.iter().find(|m| m.member_short_name() == Some(name)))
        .copied()
}

/// Returns true if `container` is `scope` or one of its ancestors.
fn encloses(container: ElementView<'_>, scope: ElementView<'_>) -> bool {
    container == scope || scope.ancestors().iter().any(|a| *a == container)
}
