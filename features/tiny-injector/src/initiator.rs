use std::{any::TypeId, collections::HashMap, sync::Arc};

use crate::{
    container::DiContainer,
    dependency_graph::DependencyGraph,
    errors::{InjectError, ScanError},
    factories::{Arguments, DynFactory},
    topological,
    types::{DynError, Instance, TypeDescriptor, TypeInfo},
};

/// A scanned component: what it needs and how to build it
pub struct Component {
    pub descriptor: TypeDescriptor,
    pub factory: Box<dyn DynFactory>,
}
impl Component {
    pub fn new(factory: Box<dyn DynFactory>) -> Self {
        Self {
            descriptor: factory.descriptor(),
            factory,
        }
    }
}

/// Builds every singleton of a scan
///
/// Graph, order and instances are owned by the initiator until the [DiContainer] is handed out,
/// a failed run never exposes what was already built.
pub(crate) struct DiInitiator {
    components: HashMap<TypeId, Component>,
    /// All produced instances
    instances: HashMap<TypeId, Instance>,
}
impl DiInitiator {
    pub(crate) fn new() -> DiInitiator {
        DiInitiator {
            components: HashMap::new(),
            instances: HashMap::new(),
        }
    }

    pub fn initiate(mut self, components: Vec<Component>) -> Result<DiContainer, ScanError> {
        tracing::debug!("Initializing {} components", components.len());

        let graph = DependencyGraph::build(components.iter().map(|c| &c.descriptor))?;
        let order = topological::sort(&graph)?;
        drop(graph);

        self.components = components
            .into_iter()
            .map(|c| (c.descriptor.identity.type_id, c))
            .collect();

        self.run(&order)?;

        tracing::debug!("All {} singletons constructed", self.instances.len());
        // Parameter-only nodes always have a dependent, which fails before we get here
        debug_assert_eq!(order.len(), self.instances.len());

        Ok(DiContainer::new(self.instances, order))
    }

    /// Constructs the components in the given order
    fn run(&mut self, order: &[TypeInfo]) -> Result<(), ScanError> {
        for (built, identity) in order.iter().enumerate() {
            tracing::debug!(
                "Constructing components [{built} of {} complete]",
                order.len()
            );

            let Some(component) = self.components.get(&identity.type_id) else {
                // Only known as a parameter, its dependents report it missing
                tracing::trace!("Skipping {identity}, it is not a component");
                continue;
            };

            let arguments = component
                .descriptor
                .parameters
                .iter()
                .map(|parameter| {
                    self.instances
                        .get(&parameter.type_id)
                        .cloned()
                        .ok_or_else(|| ScanError::MissingDependency {
                            dependency: *parameter,
                            required_by: *identity,
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .inspect_err(|err| tracing::error!("{err}"))?;

            let mut arguments = Arguments::new(*identity, arguments);
            let instance = component
                .factory
                .construct(&mut arguments)
                .map_err(|error| {
                    tracing::error!("Factory for {identity} failed: {error}");
                    ScanError::ConstructionFailed {
                        component: *identity,
                        error: Arc::new(error),
                    }
                })?;

            if instance.info != *identity {
                tracing::error!("Factory for {identity} built a {}", instance.info);
                let error: DynError = Box::new(InjectError::WrongInstance {
                    component: *identity,
                    actual: instance.info,
                });
                return Err(ScanError::ConstructionFailed {
                    component: *identity,
                    error: Arc::new(error),
                });
            }

            tracing::debug!("Constructed instance of {}", instance.info.type_name);
            self.instances.insert(identity.type_id, instance);
        }

        Ok(())
    }
}
