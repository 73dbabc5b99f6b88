//! Properties that hold for every element and context of a model.

use syster_names::model::{ElementId, Model};
use syster_names::scope::ModelScopes;
use syster_names::{Deresolver, DeresolverOptions};

use crate::helpers::model_fixtures::*;
use crate::helpers::name_assertions::*;

fn all_contexts(model: &Model) -> Vec<ElementId> {
    model.iter_elements().map(|e| e.id.clone()).collect()
}

#[test]
fn test_every_name_reads_back_as_its_element() {
    for model in [
        nested_packages().model,
        shadowed_packages().model,
        importing_app().model,
    ] {
        let deresolver = Deresolver::new(ModelScopes::new(&model));
        for element in named_elements(&model) {
            for context in all_contexts(&model) {
                assert_round_trip(&model, &deresolver, &element, &context);
            }
        }
    }
}

#[test]
fn test_repeated_calls_agree_and_hit_the_cache() {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));
    let elements = named_elements(&f.model);
    let contexts = all_contexts(&f.model);

    let first: Vec<_> = elements
        .iter()
        .flat_map(|e| contexts.iter().map(|c| deresolver.deresolved_name(Some(e), Some(c))))
        .collect();
    let stats = deresolver.cache_stats();

    let second: Vec<_> = elements
        .iter()
        .flat_map(|e| contexts.iter().map(|c| deresolver.deresolved_name(Some(e), Some(c))))
        .collect();

    assert_eq!(first, second);
    assert_eq!(deresolver.cache_stats(), stats);
}

#[test]
fn test_name_is_never_longer_than_the_absolute_name() {
    let f = nested_packages();
    let deresolver = Deresolver::new(ModelScopes::new(&f.model));

    for element in named_elements(&f.model) {
        let absolute = deresolver.deresolved_name(Some(&element), None).unwrap();
        for context in all_contexts(&f.model) {
            let name = deresolver
                .deresolved_name(Some(&element), Some(&context))
                .unwrap();
            assert!(
                name.len() <= absolute.len(),
                "'{}' is longer than '{}'",
                name,
                absolute
            );
        }
    }
}

#[test]
fn test_parallel_scan_is_deterministic() {
    let (model, wide, leaves) = wide_namespace(250);
    let sequential = Deresolver::with_options(
        ModelScopes::new(&model),
        DeresolverOptions::default().with_parallel_threshold(usize::MAX),
    );
    let parallel = Deresolver::with_options(
        ModelScopes::new(&model),
        DeresolverOptions::default().with_parallel_threshold(0),
    );
    assert_eq!(parallel.options().parallel_threshold, 0);

    for leaf in &leaves {
        let expected = sequential.deresolved_name(Some(leaf), Some(&wide));
        for _ in 0..3 {
            assert_eq!(parallel.deresolved_name(Some(leaf), Some(&wide)), expected);
        }
    }
}

#[test]
fn test_deresolver_is_shared_across_threads() {
    let (model, wide, leaves) = wide_namespace(40);
    let deresolver = Deresolver::new(ModelScopes::new(&model));
    let (shared, leaves_ref, wide_ref) = (&deresolver, &leaves, &wide);

    let names: Vec<Vec<Option<String>>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    leaves_ref
                        .iter()
                        .map(|leaf| shared.deresolved_name(Some(leaf), Some(wide_ref)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for per_thread in &names {
        for (i, name) in per_thread.iter().enumerate() {
            assert_eq!(name.as_deref(), Some(format!("P{i}::Leaf").as_str()));
        }
    }
    assert_eq!(deresolver.cache_stats().deresolved_names, leaves.len());
}
