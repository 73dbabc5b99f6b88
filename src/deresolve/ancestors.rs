//! The containment path of the element being named.

use rustc_hash::FxHashMap;

use crate::model::ElementId;
use crate::scope::NamingEnvironment;

/// Every membership through which an element can be reached by descending
/// the containment tree, with its hop distance from the element.
///
/// The element's own owning membership is at distance 1, the namespace
/// above it at 2, that namespace's owning membership at 3, and so on.
#[derive(Debug, Default)]
pub struct AncestorSet {
    memberships: FxHashMap<ElementId, usize>,
    /// The element itself (distance 0) and its non-membership ancestors.
    elements: FxHashMap<ElementId, usize>,
}

impl AncestorSet {
    /// Walk the containment parents of `element` up to the root.
    ///
    /// Stops early on a malformed containment cycle.
    pub fn of<E: NamingEnvironment + ?Sized>(env: &E, element: &ElementId) -> Self {
        let mut set = Self::default();
        set.elements.insert(element.clone(), 0);

        let mut current = element.clone();
        let mut distance = 0;
        while let Some(parent) = env.parent(&current) {
            if set.contains(&parent) {
                break;
            }
            distance += 1;
            if env.is_membership(&parent) {
                set.memberships.insert(parent.clone(), distance);
            } else {
                set.elements.insert(parent.clone(), distance);
            }
            current = parent;
        }
        set
    }

    /// Distance of a containment membership.
    pub fn distance(&self, membership: &ElementId) -> Option<usize> {
        self.memberships.get(membership).copied()
    }

    /// Distance of a visible membership, which is either on the containment
    /// path or an alias of a namespace on it. An alias counts as far as that
    /// namespace's owning membership.
    ///
    /// An alias of the element itself never reaches it: the name it gives
    /// reads back as the alias, not as the element's owning membership.
    pub fn reach(&self, membership: &ElementId, member: impl FnOnce() -> Option<ElementId>) -> Option<usize> {
        self.distance(membership).or_else(|| {
            let member = member()?;
            self.elements
                .get(&member)
                .filter(|&&distance| distance > 0)
                .map(|distance| distance + 1)
        })
    }

    fn contains(&self, id: &ElementId) -> bool {
        self.memberships.contains_key(id) || self.elements.contains_key(id)
    }

    /// Returns true when nothing contains the element.
    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}
