//! Which memberships are visible from a namespace.
//!
//! Visible memberships are gathered in three layers, in this order:
//!
//! 1. memberships owned by the namespace,
//! 2. memberships brought in by its imports,
//! 3. memberships inherited from its general types.
//!
//! The result is duplicate-free and its order depends only on the model, so
//! repeated queries for the same namespace and filter agree.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use crate::model::{ElementId, ElementKind, ElementView, MembershipView, Model, Visibility};

/// Which visibilities a query admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityFilter {
    /// Everything, as seen from inside the namespace itself.
    All,
    /// Public and protected, as seen from a specialization or an enclosing walk.
    NonPrivate,
    /// Public only, as seen through an import or a qualified name.
    PublicOnly,
}

impl VisibilityFilter {
    /// The filter for a query that may or may not see private members.
    pub fn including_private(include_private: bool) -> Self {
        if include_private {
            Self::All
        } else {
            Self::NonPrivate
        }
    }

    /// Returns true if a membership with `visibility` passes.
    pub fn admits(self, visibility: Visibility) -> bool {
        match self {
            Self::All => true,
            Self::NonPrivate => visibility != Visibility::Private,
            Self::PublicOnly => visibility == Visibility::Public,
        }
    }

    /// Returns true if the memberships of an import with `visibility` pass.
    ///
    /// Only public imports re-export; non-public ones count from inside.
    pub fn admits_import(self, visibility: Visibility) -> bool {
        self == Self::All || visibility == Visibility::Public
    }

    /// The filter applied to members inherited through specialization.
    pub fn inherited(self) -> Self {
        match self {
            Self::PublicOnly => Self::PublicOnly,
            Self::All | Self::NonPrivate => Self::NonPrivate,
        }
    }
}

/// Memberships visible from `namespace`.
///
/// Private owned memberships and non-public imports are only included when
/// `include_private` is set.
pub fn visible_memberships(model: &Model, namespace: &ElementId, include_private: bool) -> Vec<ElementId> {
    visible_memberships_with(model, namespace, VisibilityFilter::including_private(include_private))
}

/// Memberships visible from `namespace` under an explicit filter.
pub fn visible_memberships_with(
    model: &Model,
    namespace: &ElementId,
    filter: VisibilityFilter,
) -> Vec<ElementId> {
    let Some(view) = ElementView::from_id(namespace, model) else {
        return Vec::new();
    };
    let mut computer = MembershipComputer::new(model);
    computer.collect(view, filter);
    computer.finish()
}

/// Only the memberships `ty` inherits from its general types.
///
/// Memberships owned by `ty` itself are left out even when a specialization
/// cycle leads back to it.
pub fn inherited_memberships(model: &Model, ty: &ElementId) -> Vec<ElementId> {
    let Some(view) = ElementView::from_id(ty, model) else {
        return Vec::new();
    };
    let mut computer = MembershipComputer::new(model);
    computer.visited.insert((ty.clone(), VisibilityFilter::All));
    computer.collect_inherited(view, VisibilityFilter::NonPrivate);
    computer
        .finish()
        .into_iter()
        .filter(|id| {
            model
                .get(id)
                .and_then(|m| m.owner.as_ref())
                .is_none_or(|owner| owner != ty)
        })
        .collect()
}

/// Accumulates visible memberships across owned, imported and inherited
/// layers, guarding against import and specialization cycles.
struct MembershipComputer<'m> {
    model: &'m Model,
    visited: FxHashSet<(ElementId, VisibilityFilter)>,
    expanded: FxHashSet<ElementId>,
    result: IndexSet<ElementId>,
}

impl<'m> MembershipComputer<'m> {
    fn new(model: &'m Model) -> Self {
        Self {
            model,
            visited: FxHashSet::default(),
            expanded: FxHashSet::default(),
            result: IndexSet::new(),
        }
    }

    fn finish(self) -> Vec<ElementId> {
        self.result.into_iter().collect()
    }

    fn collect(&mut self, namespace: ElementView<'m>, filter: VisibilityFilter) {
        if !namespace.is_namespace() || !self.visited.insert((namespace.id().clone(), filter)) {
            return;
        }

        for membership in namespace.owned_memberships() {
            if filter.admits(membership.visibility()) {
                self.push(membership);
            }
        }

        for import in namespace.owned_imports() {
            if filter.admits_import(import.element.visibility) {
                self.collect_import(import);
            }
        }

        self.collect_inherited(namespace, filter.inherited());
    }

    fn collect_inherited(&mut self, ty: ElementView<'m>, filter: VisibilityFilter) {
        for general in ty.general_types() {
            self.collect(general, filter);
        }
    }

    fn collect_import(&mut self, import: ElementView<'m>) {
        let Some(target) = import.target() else {
            return;
        };
        let recursive = import.element.is_recursive;
        match import.kind() {
            ElementKind::NamespaceImport => self.collect_imported_namespace(target, recursive),
            ElementKind::MembershipImport => {
                let Some(membership) = target.as_membership() else {
                    return;
                };
                if membership.visibility() != Visibility::Public {
                    return;
                }
                self.push(membership);
                if recursive {
                    if let Some(member) = membership.member_element() {
                        self.collect_imported_namespace(member, true);
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_imported_namespace(&mut self, namespace: ElementView<'m>, recursive: bool) {
        self.collect(namespace, VisibilityFilter::PublicOnly);
        if !recursive || !self.expanded.insert(namespace.id().clone()) {
            return;
        }
        for membership in namespace.owned_memberships() {
            if membership.visibility() != Visibility::Public {
                continue;
            }
            if let Some(member) = membership.member_element().filter(|m| m.is_namespace()) {
                self.collect_imported_namespace(member, true);
            }
        }
    }

    fn push(&mut self, membership: MembershipView<'m>) {
        if membership.member_element().is_some() {
            self.result.insert(membership.id().clone());
        }
    }
}
