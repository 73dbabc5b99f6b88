//! Inherited compartment items of specialized definitions.

use syster_names::compartment::inherited_compartment_items;
use syster_names::model::{ElementKind, ElementView, ModelBuilder, Visibility};

#[test]
fn test_parts_compartment_lists_unshadowed_inherited_parts() {
    // part def Vehicle {
    //     part engine;
    //     part wheels;
    //     attribute mass;
    //     protected part chassis;
    //     private part secret;
    // }
    // part def Car :> Vehicle {
    //     part engine;
    // }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let vehicle = b
        .member(&root, ElementKind::PartDefinition, "Vehicle", Visibility::Public)
        .unwrap();
    for (kind, name, visibility) in [
        (ElementKind::PartUsage, "engine", Visibility::Public),
        (ElementKind::PartUsage, "wheels", Visibility::Public),
        (ElementKind::AttributeUsage, "mass", Visibility::Public),
        (ElementKind::PartUsage, "chassis", Visibility::Protected),
        (ElementKind::PartUsage, "secret", Visibility::Private),
    ] {
        b.member(&vehicle, kind, name, visibility).unwrap();
    }
    let car = b
        .member(&root, ElementKind::PartDefinition, "Car", Visibility::Public)
        .unwrap();
    b.member(&car, ElementKind::PartUsage, "engine", Visibility::Public)
        .unwrap();
    b.specialization(&car, &vehicle).unwrap();
    let model = b.build();

    let car_view = ElementView::from_id(&car, &model).unwrap();
    let parts = inherited_compartment_items(car_view, |e| e.kind() == ElementKind::PartUsage);
    let names: Vec<_> = parts.iter().filter_map(|m| m.member_name()).collect();
    assert_eq!(names, vec!["wheels", "chassis"]);

    let attributes =
        inherited_compartment_items(car_view, |e| e.kind() == ElementKind::AttributeUsage);
    let names: Vec<_> = attributes.iter().filter_map(|m| m.member_name()).collect();
    assert_eq!(names, vec!["mass"]);
}

#[test]
fn test_transitive_inheritance_prefers_the_nearest_supertype() {
    // part def A { part x; part y; }
    // part def B :> A { part x; }
    // part def C :> B;
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let a = b
        .member(&root, ElementKind::PartDefinition, "A", Visibility::Public)
        .unwrap();
    b.member(&a, ElementKind::PartUsage, "x", Visibility::Public)
        .unwrap();
    b.member(&a, ElementKind::PartUsage, "y", Visibility::Public)
        .unwrap();
    let b_def = b
        .member(&root, ElementKind::PartDefinition, "B", Visibility::Public)
        .unwrap();
    let b_x = b
        .member(&b_def, ElementKind::PartUsage, "x", Visibility::Public)
        .unwrap();
    b.specialization(&b_def, &a).unwrap();
    let c = b
        .member(&root, ElementKind::PartDefinition, "C", Visibility::Public)
        .unwrap();
    b.specialization(&c, &b_def).unwrap();
    let model = b.build();

    let c_view = ElementView::from_id(&c, &model).unwrap();
    let items = inherited_compartment_items(c_view, |_| true);
    let members: Vec<_> = items
        .iter()
        .filter_map(|m| m.member_element())
        .map(|e| (e.effective_name(), e.id().clone()))
        .collect();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0], (Some("x"), b_x));
    assert_eq!(members[1].0, Some("y"));
}
