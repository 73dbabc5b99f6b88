//! Inherited compartment items.
//!
//! A diagram compartment lists a type's own members and, marked `^`, the
//! members it inherits. An inherited member is shown only if no owned
//! member, and no earlier inherited member, already uses its name.

use crate::conflict::NameConflictFilter;
use crate::model::{ElementView, MembershipView};
use crate::scope::inherited_memberships;

/// The inherited memberships of `ty` whose member satisfies `accept`,
/// without those shadowed by an owned member or an earlier inherited one.
pub fn inherited_compartment_items<'m>(
    ty: ElementView<'m>,
    accept: impl Fn(ElementView<'m>) -> bool,
) -> Vec<MembershipView<'m>> {
    let model = ty.model;
    let mut filter = NameConflictFilter::new();
    filter.fill_used_names(ty.owned_memberships());

    inherited_memberships(model, ty.id())
        .iter()
        .filter_map(|id| MembershipView::from_id(id, model))
        .filter(|m| m.member_element().is_some_and(&accept))
        .filter(|m| filter.test(*m))
        .collect()
}
