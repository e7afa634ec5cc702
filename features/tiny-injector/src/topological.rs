//! Construction order of a [DependencyGraph]
//!
//! Kahn's algorithm run from the components nothing depends on towards their dependencies.
//! Seeds are appended to the result, every node freed afterwards is put in front of it, so the
//! result lists dependencies before their dependents without a second pass.

use std::collections::VecDeque;

use crate::{dependency_graph::DependencyGraph, errors::ScanError, types::TypeInfo};

/// Sorts the graph so every type comes before all types depending on it
pub fn sort(graph: &DependencyGraph) -> Result<Vec<TypeInfo>, ScanError> {
    let nodes = graph.nodes();

    // Number of dependents per node
    let mut indegree = vec![0_usize; nodes.len()];
    for node in nodes {
        for &neighbor in &node.neighbors {
            indegree[neighbor] += 1;
        }
    }

    let mut sorted = VecDeque::with_capacity(nodes.len());
    let mut queue = VecDeque::new();

    for (idx, _) in indegree.iter().enumerate().filter(|(_, d)| **d == 0) {
        queue.push_back(idx);
        sorted.push_back(idx);
    }
    tracing::trace!("{} components have no dependents", queue.len());

    while let Some(idx) = queue.pop_front() {
        for &neighbor in &nodes[idx].neighbors {
            indegree[neighbor] -= 1;
            if indegree[neighbor] == 0 {
                queue.push_back(neighbor);
                sorted.push_front(neighbor);
            }
        }
    }

    if sorted.len() != nodes.len() {
        let unresolved: Vec<TypeInfo> = indegree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d > 0)
            .map(|(idx, _)| nodes[idx].value)
            .collect();

        tracing::error!("Cyclic dependencies detected among {:?}", unresolved);
        return Err(ScanError::CyclicDependency { unresolved });
    }

    Ok(sorted.into_iter().map(|idx| nodes[idx].value).collect())
}
