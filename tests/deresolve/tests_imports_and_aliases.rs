//! Names through imports and alias memberships.

use syster_names::model::{ElementKind, ModelBuilder, Visibility};
use syster_names::scope::ModelScopes;
use syster_names::Deresolver;

use crate::helpers::model_fixtures::*;
use crate::helpers::name_assertions::*;

#[test]
fn test_closest_imported_membership_wins() {
    let f = importing_app();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    // Both `Deep` (through `import Lib::*`) and `Target` (through
    // `import Lib::Deep::*`) are visible; `Target` is closer.
    assert_deresolves(&deresolver, &f.target, &f.plain, "Target");
    assert_round_trip(&f.model, &deresolver, &f.target, &f.plain);
}

#[test]
fn test_alias_of_the_element_loses_to_its_import() {
    let f = importing_app();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    // `T` reads back as the alias membership, `Target` as the owning one.
    assert_deresolves(&deresolver, &f.target, &f.app, "Target");
    assert_round_trip(&f.model, &deresolver, &f.target, &f.app);
}

#[test]
fn test_alias_of_the_element_is_not_a_name_for_it() {
    // package Pkg { package Sub { part def Foo; } }
    // alias F for Pkg::Sub::Foo;
    // package Other;
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let pkg = b.package(&root, "Pkg").unwrap();
    let sub = b.package(&pkg, "Sub").unwrap();
    let foo = b
        .member(&sub, ElementKind::PartDefinition, "Foo", Visibility::Public)
        .unwrap();
    b.alias(&root, "F", &foo, Visibility::Public).unwrap();
    let other = b.package(&root, "Other").unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    assert_deresolves(&deresolver, &foo, &other, "Pkg::Sub::Foo");
    assert_round_trip(&model, &deresolver, &foo, &other);
    assert_deresolves(&deresolver, &foo, &pkg, "Sub::Foo");
    assert_round_trip(&model, &deresolver, &foo, &pkg);
}

#[test]
fn test_without_imports_the_owning_packages_are_used() {
    let f = importing_app();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    assert_deresolves(&deresolver, &f.target, &f.other, "Lib::Deep::Target");
    assert_deresolves(&deresolver, &f.deep, &f.other, "Lib::Deep");
    assert_deresolves(&deresolver, &f.deep, &f.plain, "Deep");
    assert_deresolves(&deresolver, &f.lib, &f.app, "Lib");
}

#[test]
fn test_alias_of_enclosing_package_prefixes_the_rest() {
    // package Vehicles { package Parts { part def Wheel; } }
    // package Shop { alias VP for Vehicles::Parts; }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let vehicles = b.package(&root, "Vehicles").unwrap();
    let parts = b.package(&vehicles, "Parts").unwrap();
    let wheel = b
        .member(&parts, ElementKind::PartDefinition, "Wheel", Visibility::Public)
        .unwrap();
    let shop = b.package(&root, "Shop").unwrap();
    b.alias(&shop, "VP", &parts, Visibility::Private).unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    assert_deresolves(&deresolver, &wheel, &shop, "VP::Wheel");
    assert_round_trip(&model, &deresolver, &wheel, &shop);
}

#[test]
fn test_recursive_import_reaches_nested_members() {
    // package Lib { package A { package B { part def Leaf; } } }
    // package App { import Lib::**; }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let lib = b.package(&root, "Lib").unwrap();
    let a = b.package(&lib, "A").unwrap();
    let inner = b.package(&a, "B").unwrap();
    let leaf = b
        .member(&inner, ElementKind::PartDefinition, "Leaf", Visibility::Public)
        .unwrap();
    let app = b.package(&root, "App").unwrap();
    b.import(&app, ElementKind::NamespaceImport, &lib, Visibility::Public, true)
        .unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    assert_deresolves(&deresolver, &leaf, &app, "Leaf");
    assert_round_trip(&model, &deresolver, &leaf, &app);
}

#[test]
fn test_quoted_names_are_printable() {
    // package 'Road Vehicles' { part def 'part'; }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let road = b.package(&root, "Road Vehicles").unwrap();
    let keyword_named = b
        .member(&road, ElementKind::PartDefinition, "part", Visibility::Public)
        .unwrap();
    let other = b.package(&root, "Other").unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    assert_deresolves(&deresolver, &keyword_named, &other, "'Road Vehicles'::'part'");
    assert_deresolves(&deresolver, &keyword_named, &road, "'part'");
    assert_round_trip(&model, &deresolver, &keyword_named, &other);
}
