//! Name-clash suppression for member listings.
//!
//! A [`NameConflictFilter`] lives for one pass over a list of memberships
//! (a compartment, an exported namespace body) and rejects every member
//! whose name or short name was already claimed by an earlier one.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::model::{ElementView, MembershipView};

/// Stateful predicate over memberships, admitting at most one member per
/// name.
#[derive(Debug, Default)]
pub struct NameConflictFilter {
    used_names: FxHashSet<SmolStr>,
}

impl NameConflictFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `membership` unless its member's name or short name is already
    /// used.
    ///
    /// A membership without a member element always passes.
    pub fn test(&mut self, membership: MembershipView<'_>) -> bool {
        match membership.member_element() {
            Some(member) => self.check_conflicting_names(member),
            None => true,
        }
    }

    /// Admit `element` unless its effective name or effective short name is
    /// already used.
    ///
    /// An element with neither cannot clash and always passes. An admitted
    /// element reserves both of its names; a rejected one reserves nothing.
    pub fn check_conflicting_names(&mut self, element: ElementView<'_>) -> bool {
        let name = element.effective_name();
        let short_name = element.effective_short_name();
        if name.is_none() && short_name.is_none() {
            return true;
        }

        let clashes = [name, short_name]
            .into_iter()
            .flatten()
            .any(|n| self.used_names.contains(n));
        if clashes {
            return false;
        }

        self.used_names.extend([name, short_name].into_iter().flatten().map(SmolStr::new));
        true
    }

    /// Reserve every name and short name of already committed members,
    /// without checking them.
    pub fn fill_used_names<'m>(&mut self, memberships: impl IntoIterator<Item = MembershipView<'m>>) {
        for member in memberships.into_iter().filter_map(|m| m.member_element()) {
            let names = [member.effective_name(), member.effective_short_name()];
            self.used_names.extend(names.into_iter().flatten().map(SmolStr::new));
        }
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used_names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.used_names.is_empty()
    }
}
