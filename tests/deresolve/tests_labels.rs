//! Labels reference their targets by deresolved names.

use syster_names::labels::{import_statement, specialization_label, typing_label};
use syster_names::model::{ElementId, ElementKind, ElementView, ModelBuilder, Visibility};
use syster_names::scope::ModelScopes;
use syster_names::Deresolver;

#[test]
fn test_typing_label_qualifies_a_shadowed_type() {
    // package Lib { part def Engine; }
    // package Car {
    //     part def Engine;
    //     part motor : Lib::Engine;
    //     part spare : Engine;
    // }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let lib = b.package(&root, "Lib").unwrap();
    let lib_engine = b
        .member(&lib, ElementKind::PartDefinition, "Engine", Visibility::Public)
        .unwrap();
    let car = b.package(&root, "Car").unwrap();
    let car_engine = b
        .member(&car, ElementKind::PartDefinition, "Engine", Visibility::Public)
        .unwrap();
    let motor = b
        .member(&car, ElementKind::PartUsage, "motor", Visibility::Public)
        .unwrap();
    b.typing(&motor, &lib_engine).unwrap();
    let spare = b
        .member(&car, ElementKind::PartUsage, "spare", Visibility::Public)
        .unwrap();
    b.typing(&spare, &car_engine).unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    let label = |id: &ElementId| typing_label(&deresolver, ElementView::from_id(id, &model).unwrap());
    assert_eq!(label(&motor), " : Lib::Engine");
    assert_eq!(label(&spare), " : Engine");
}

#[test]
fn test_specialization_and_import_text() {
    // package Defs { part def Vehicle; }
    // package Fleet {
    //     public import Defs::*;
    //     part def Truck :> Vehicle;
    // }
    let mut b = ModelBuilder::new();
    let root = b.root_namespace();
    let defs = b.package(&root, "Defs").unwrap();
    let vehicle = b
        .member(&defs, ElementKind::PartDefinition, "Vehicle", Visibility::Public)
        .unwrap();
    let fleet = b.package(&root, "Fleet").unwrap();
    let import = b.namespace_import(&fleet, &defs, Visibility::Public).unwrap();
    let truck = b
        .member(&fleet, ElementKind::PartDefinition, "Truck", Visibility::Public)
        .unwrap();
    b.specialization(&truck, &vehicle).unwrap();
    let model = b.build();
    let deresolver = Deresolver::new(ModelScopes::new(&model));

    let truck_view = ElementView::from_id(&truck, &model).unwrap();
    assert_eq!(specialization_label(&deresolver, truck_view), " :> Vehicle");

    let import_view = ElementView::from_id(&import, &model).unwrap();
    assert_eq!(
        import_statement(&deresolver, import_view).as_deref(),
        Some("import Defs::*;")
    );
}
