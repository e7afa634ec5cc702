//! Property based tests for the construction order
//!
//! Uses proptest to verify:
//! 1. Every dependency is ordered before its dependents, whatever the input order
//! 2. Any cycle is detected
//! 3. Components without edges are all ordered
//! 4. A full scan builds every component of an acyclic graph

use std::collections::HashMap;

use proptest::prelude::*;
use tiny_injector::{
    topological, Arguments, Component, DependencyGraph, DynFactory, FnFactory, Injector,
    ScanError, TypeDescriptor, TypeInfo,
};

const NODES: usize = 8;

/// Distinct types, one per graph node
struct N<const I: usize>;

fn ids() -> [TypeInfo; NODES] {
    [
        TypeInfo::of::<N<0>>(),
        TypeInfo::of::<N<1>>(),
        TypeInfo::of::<N<2>>(),
        TypeInfo::of::<N<3>>(),
        TypeInfo::of::<N<4>>(),
        TypeInfo::of::<N<5>>(),
        TypeInfo::of::<N<6>>(),
        TypeInfo::of::<N<7>>(),
    ]
}

fn factory(index: usize, parameters: Vec<TypeInfo>) -> Box<dyn DynFactory> {
    fn make<const I: usize>(parameters: Vec<TypeInfo>) -> Box<dyn DynFactory> {
        Box::new(FnFactory::new(parameters, |_: &mut Arguments| Ok(N::<I>)))
    }

    match index {
        0 => make::<0>(parameters),
        1 => make::<1>(parameters),
        2 => make::<2>(parameters),
        3 => make::<3>(parameters),
        4 => make::<4>(parameters),
        5 => make::<5>(parameters),
        6 => make::<6>(parameters),
        7 => make::<7>(parameters),
        _ => unreachable!("only {NODES} node types exist"),
    }
}

/// Edges `i -> j` only for `j < i`, so the graph is acyclic
fn dag() -> impl Strategy<Value = Vec<Vec<usize>>> {
    proptest::collection::vec(proptest::bool::ANY, NODES * NODES).prop_map(|bits| {
        (0..NODES)
            .map(|i| (0..i).filter(|&j| bits[i * NODES + j]).collect())
            .collect()
    })
}

fn shuffled_nodes() -> impl Strategy<Value = Vec<usize>> {
    Just((0..NODES).collect::<Vec<_>>()).prop_shuffle()
}

fn descriptors(edges: &[Vec<usize>], input_order: &[usize]) -> Vec<TypeDescriptor> {
    let ids = ids();
    input_order
        .iter()
        .map(|&i| TypeDescriptor::new(ids[i], edges[i].iter().map(|&j| ids[j]).collect()))
        .collect()
}

fn assert_dependencies_first(order: &[TypeInfo], descriptors: &[TypeDescriptor]) {
    let position: HashMap<TypeInfo, usize> =
        order.iter().enumerate().map(|(idx, info)| (*info, idx)).collect();

    for descriptor in descriptors {
        for parameter in &descriptor.parameters {
            assert!(
                position[parameter] < position[&descriptor.identity],
                "{parameter} must come before {}",
                descriptor.identity
            );
        }
    }
}

proptest! {
    #[test]
    fn dependencies_precede_dependents(edges in dag(), input_order in shuffled_nodes()) {
        let descriptors = descriptors(&edges, &input_order);
        let graph = DependencyGraph::build(&descriptors).unwrap();

        let order = topological::sort(&graph).unwrap();

        prop_assert_eq!(order.len(), NODES);
        assert_dependencies_first(&order, &descriptors);
    }

    #[test]
    fn any_cycle_is_detected(
        mut edges in dag(),
        input_order in shuffled_nodes(),
        (low, high) in (0..NODES - 1).prop_flat_map(|low| (Just(low), low + 1..NODES)),
    ) {
        // high -> low is allowed by the dag, low -> high closes the cycle
        if !edges[high].contains(&low) {
            edges[high].push(low);
        }
        edges[low].push(high);
        let descriptors = descriptors(&edges, &input_order);
        let graph = DependencyGraph::build(&descriptors).unwrap();

        let result = topological::sort(&graph);

        let Err(ScanError::CyclicDependency { unresolved }) = result else {
            return Err(TestCaseError::fail("cycle was not detected"));
        };
        let ids = ids();
        prop_assert!(unresolved.contains(&ids[low]));
        prop_assert!(unresolved.contains(&ids[high]));
    }

    #[test]
    fn edgeless_graphs_order_every_node(input_order in shuffled_nodes()) {
        let edges = vec![Vec::new(); NODES];
        let descriptors = descriptors(&edges, &input_order);
        let graph = DependencyGraph::build(&descriptors).unwrap();

        let order = topological::sort(&graph).unwrap();

        prop_assert_eq!(order.len(), NODES);
    }

    #[test]
    fn scan_builds_every_acyclic_component(edges in dag(), input_order in shuffled_nodes()) {
        let ids = ids();
        let components: Vec<Component> = input_order
            .iter()
            .map(|&i| Component::new(factory(i, edges[i].iter().map(|&j| ids[j]).collect())))
            .collect();
        let descriptors = descriptors(&edges, &input_order);
        let mut injector = Injector::new();

        injector.scan(components).unwrap();

        let container = injector.container().unwrap();
        prop_assert_eq!(container.len(), NODES);
        assert_dependencies_first(container.construction_order(), &descriptors);
    }
}
