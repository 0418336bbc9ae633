//! Scheme registry contracts
//!
//! Arguments naming the same scheme share one descriptor, and unknown
//! schemes are registered with the linked weighing function.

use std::sync::Arc;
use std::thread;

use argraph::{JsonCodec, Scheme, SchemeRegistry, WeighingFunction};

use crate::common::*;

#[test]
fn contract_unknown_scheme_is_registered_as_linked() {
    let registry = Arc::new(SchemeRegistry::with_basic_schemes());
    let codec = JsonCodec::with_registry(Arc::clone(&registry));

    let graph = codec.decode_str(TANDEM_GRAPH).unwrap();

    let scheme = registry.get("expert-opinion").unwrap();
    assert_eq!(scheme.weighing_function(), WeighingFunction::Linked);
    assert!(Arc::ptr_eq(graph.argument("a1").unwrap().scheme(), &scheme));
}

#[test]
fn contract_registered_scheme_keeps_its_weighing_function() {
    let registry = Arc::new(SchemeRegistry::new());
    registry.register(Scheme::new("expert-opinion", WeighingFunction::Convergent));
    let codec = JsonCodec::with_registry(Arc::clone(&registry));

    let graph = codec.decode_str(TANDEM_GRAPH).unwrap();

    let scheme = graph.argument("a1").unwrap().scheme();
    assert_eq!(scheme.weighing_function(), WeighingFunction::Convergent);
}

#[test]
fn contract_registry_outlives_a_decode() {
    let registry = Arc::new(SchemeRegistry::new());

    let first = JsonCodec::with_registry(Arc::clone(&registry))
        .decode_str(TANDEM_GRAPH)
        .unwrap();
    let second = JsonCodec::with_registry(Arc::clone(&registry))
        .decode_str(TANDEM_GRAPH)
        .unwrap();

    assert!(Arc::ptr_eq(
        first.argument("a1").unwrap().scheme(),
        second.argument("a1").unwrap().scheme()
    ));
}

#[test]
fn contract_concurrent_decodes_share_one_descriptor() {
    let registry = Arc::new(SchemeRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let graph = JsonCodec::with_registry(registry)
                    .decode_str(TANDEM_GRAPH)
                    .unwrap();
                Arc::clone(graph.argument("a1").unwrap().scheme())
            })
        })
        .collect();
    let schemes: Vec<Arc<Scheme>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for scheme in &schemes[1..] {
        assert!(Arc::ptr_eq(scheme, &schemes[0]));
    }
    assert_eq!(registry.len(), 2);
}
