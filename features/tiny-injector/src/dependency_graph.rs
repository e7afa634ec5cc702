use std::{any::TypeId, collections::HashMap};

use crate::{
    errors::ScanError,
    types::{TypeDescriptor, TypeInfo},
};

/// Graph of all scanned components
///
/// Every type that is either a component or a constructor parameter of one gets exactly one
/// node. Edges point from a component to the types it depends on.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<TypeId, usize>,
}

#[derive(Debug)]
pub struct Node {
    pub value: TypeInfo,
    /// Indices of the nodes this node depends on, in parameter order
    pub neighbors: Vec<usize>,
    /// False if the type was only ever seen as a parameter
    pub discovered: bool,
}

impl DependencyGraph {
    pub fn build<'a>(
        descriptors: impl IntoIterator<Item = &'a TypeDescriptor>,
    ) -> Result<Self, ScanError> {
        let mut graph = Self::default();

        for descriptor in descriptors {
            graph.add(descriptor)?;
        }

        tracing::debug!("Dependency graph has {} nodes", graph.len());
        Ok(graph)
    }

    fn add(&mut self, descriptor: &TypeDescriptor) -> Result<(), ScanError> {
        let owner = self.obtain(descriptor.identity);
        if std::mem::replace(&mut self.nodes[owner].discovered, true) {
            return Err(ScanError::DuplicateComponent(descriptor.identity));
        }

        for parameter in &descriptor.parameters {
            let dependency = self.obtain(*parameter);
            tracing::trace!("{} depends on {}", descriptor.identity, parameter);
            self.nodes[owner].neighbors.push(dependency);
        }

        Ok(())
    }

    /// Index of the node for `info`, creating an undiscovered node if needed
    fn obtain(&mut self, info: TypeInfo) -> usize {
        if let Some(&idx) = self.index.get(&info.type_id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(Node {
            value: info,
            neighbors: Vec::new(),
            discovered: false,
        });
        self.index.insert(info.type_id, idx);
        idx
    }

    /// Nodes in the order they were first encountered
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, info: &TypeInfo) -> Option<&Node> {
        self.index.get(&info.type_id).map(|&idx| &self.nodes[idx])
    }

    /// The types `info` directly depends on
    pub fn dependencies_of(&self, info: &TypeInfo) -> Vec<TypeInfo> {
        self.node(info)
            .map(|node| {
                node.neighbors
                    .iter()
                    .map(|&idx| self.nodes[idx].value)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
