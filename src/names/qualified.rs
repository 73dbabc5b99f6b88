//! Qualified names computed from the ownership tree.

use rustc_hash::FxHashSet;

use super::printable::printable_name;
use super::QUALIFIED_NAME_SEPARATOR;
use crate::model::ElementView;

/// The fully qualified name of `element`, e.g. `Vehicles::Car::'front wheel'`.
///
/// Segments are the printable effective names of the element and of each
/// owning namespace up to the root. An anonymous root namespace adds no
/// segment. Returns `None` when the element or an intermediate namespace is
/// unnamed, and for the root namespace itself.
pub fn qualified_name(element: ElementView<'_>) -> Option<String> {
    let mut segments = vec![printable_name(element.effective_name()?)];
    let mut visited = FxHashSet::default();
    visited.insert(element.id());

    let mut current = element.owning_namespace();
    while let Some(namespace) = current {
        if !visited.insert(namespace.id()) {
            return None;
        }
        let parent = namespace.owning_namespace();
        match namespace.effective_name() {
            Some(name) => segments.push(printable_name(name)),
            None if parent.is_none() => break,
            None => return None,
        }
        current = parent;
    }

    segments.reverse();
    Some(segments.join(QUALIFIED_NAME_SEPARATOR))
}
