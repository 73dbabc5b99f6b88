//! Names relative to the enclosing packages of the reference.

use rstest::rstest;
use syster_names::model::ElementId;
use syster_names::scope::ModelScopes;
use syster_names::Deresolver;

use crate::helpers::model_fixtures::*;
use crate::helpers::name_assertions::*;

#[test]
fn test_sibling_package_member_from_usage() {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    assert_deresolves(&deresolver, &f.foo, &f.p, "Sub::Foo");
}

#[rstest]
#[case::from_own_package("sub", "Foo")]
#[case::from_itself("foo", "Foo")]
#[case::from_parent_package("pkg1", "Sub::Foo")]
#[case::from_usage_in_parent("p", "Sub::Foo")]
#[case::from_cousin_package("pkg2", "Pkg1::Sub::Foo")]
#[case::from_usage_in_cousin("q", "Pkg1::Sub::Foo")]
#[case::from_root_package("root", "Pkg1::Sub::Foo")]
#[case::from_anonymous_root("anonymous_root", "Root::Pkg1::Sub::Foo")]
fn test_foo_seen_from(#[case] context: &str, #[case] expected: &str) {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));
    let context: &ElementId = match context {
        "sub" => &f.sub,
        "foo" => &f.foo,
        "pkg1" => &f.pkg1,
        "p" => &f.p,
        "pkg2" => &f.pkg2,
        "q" => &f.q,
        "root" => &f.root,
        "anonymous_root" => &f.anonymous_root,
        other => panic!("unknown context {other}"),
    };

    assert_deresolves(&deresolver, &f.foo, context, expected);
}

#[test]
fn test_enclosing_packages_are_named_by_their_own_name() {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    assert_deresolves(&deresolver, &f.pkg1, &f.foo, "Pkg1");
    assert_deresolves(&deresolver, &f.root, &f.foo, "Root");
    assert_deresolves(&deresolver, &f.sub, &f.q, "Pkg1::Sub");
}

#[test]
fn test_without_context_the_absolute_name_is_used() {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    assert_eq!(
        deresolver.deresolved_name(Some(&f.foo), None).as_deref(),
        Some("Root::Pkg1::Sub::Foo")
    );
    assert_eq!(deresolver.deresolved_name(None, Some(&f.p)), None);
    assert_eq!(deresolver.deresolved_name(None, None), None);
}

#[test]
fn test_relationship_context_uses_the_specific_types_namespace() {
    use syster_names::model::{ElementKind, ModelBuilder, Visibility};

    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let pkg = b.package(&root, "Pkg").unwrap();
    let base = b
        .member(&pkg, ElementKind::PartDefinition, "Base", Visibility::Public)
        .unwrap();
    // A member of Derived with the same name as the supertype.
    let derived = b
        .member(&pkg, ElementKind::PartDefinition, "Derived", Visibility::Public)
        .unwrap();
    b.member(&derived, ElementKind::PartUsage, "Base", Visibility::Public)
        .unwrap();
    let specialization = b.specialization(&derived, &base).unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    assert_deresolves(&deresolver, &base, &specialization, "Base");
    assert_deresolves(&deresolver, &base, &derived, "Pkg::Base");
}
