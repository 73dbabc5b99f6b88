//! The namespace a reference is written from.

use crate::model::{ElementId, ElementView, Model};

/// The namespace in which a reference appearing at `context` is resolved.
///
/// * A specialization, typing, subsetting or redefinition is written on the
///   specific type, but the specific type's own members are not in scope for
///   its supertypes, so names are resolved from the namespace that owns the
///   specific type.
/// * A membership resolves from its owning namespace.
/// * Any other relationship (imports) resolves from the namespace owning it.
/// * A namespace resolves from itself.
/// * Anything else resolves from its owning namespace.
pub fn deresolving_namespace(model: &Model, context: &ElementId) -> Option<ElementId> {
    let view = ElementView::from_id(context, model)?;
    let kind = view.kind();

    let namespace = if kind.is_specialization() {
        view.owner()
            .or_else(|| view.source())
            .and_then(|specific| specific.owning_namespace())
    } else if let Some(membership) = view.as_membership() {
        membership.membership_owning_namespace()
    } else if kind.is_relationship() {
        view.owner()
            .filter(|owner| owner.is_namespace())
            .or_else(|| view.owning_namespace())
    } else if view.is_namespace() {
        Some(view)
    } else {
        view.owning_namespace()
    };

    namespace.map(|ns| ns.id().clone())
}
