//! Reference text for labels and textual export.
//!
//! Every referenced element is named as seen from the relationship that
//! references it, so the text reads back as the same element wherever it
//! is written.

use crate::deresolve::Deresolver;
use crate::model::{ElementKind, ElementView};
use crate::scope::NamingEnvironment;

/// ` : A, B` for the types of `feature`, or `""` when it is untyped.
pub fn typing_label<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    feature: ElementView<'_>,
) -> String {
    relationship_label(deresolver, feature, ElementKind::FeatureTyping, ":")
}

/// ` :> A, B` for the direct supertypes of `ty`.
pub fn specialization_label<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    ty: ElementView<'_>,
) -> String {
    relationship_label(deresolver, ty, ElementKind::Specialization, ":>")
}

/// ` :> a` for the features `feature` subsets.
pub fn subsetting_label<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    feature: ElementView<'_>,
) -> String {
    relationship_label(deresolver, feature, ElementKind::Subsetting, ":>")
}

/// ` :>> a` for the features `feature` redefines.
pub fn redefinition_label<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    feature: ElementView<'_>,
) -> String {
    relationship_label(deresolver, feature, ElementKind::Redefinition, ":>>")
}

fn relationship_label<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    element: ElementView<'_>,
    kind: ElementKind,
    operator: &str,
) -> String {
    let names: Vec<String> = element
        .owned_relationships_of_kind(kind)
        .into_iter()
        .filter_map(|rel| {
            let target = rel.target()?;
            deresolver.deresolved_name(Some(target.id()), Some(rel.id()))
        })
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        String::new()
    } else {
        format!(" {} {}", operator, names.join(", "))
    }
}

/// The import declaration for `import`, e.g. `private import Vehicles::*;`.
///
/// Returns `None` when `import` is not an import or its target is missing.
pub fn import_statement<E: NamingEnvironment + Sync>(
    deresolver: &Deresolver<E>,
    import: ElementView<'_>,
) -> Option<String> {
    let target = import.target()?;
    let (imported, suffix) = match import.kind() {
        ElementKind::NamespaceImport => (target, "::*"),
        ElementKind::MembershipImport => (target.as_membership()?.member_element()?, ""),
        _ => return None,
    };
    let name = deresolver.deresolved_name(Some(imported.id()), Some(import.id()))?;
    if name.is_empty() {
        return None;
    }

    let recursive = if import.element.is_recursive { "::**" } else { "" };
    let suffix = if recursive.is_empty() { suffix } else { recursive };
    let visibility = import
        .element
        .visibility
        .keyword()
        .map(|keyword| format!("{keyword} "))
        .unwrap_or_default();
    Some(format!("{visibility}import {name}{suffix};"))
}
