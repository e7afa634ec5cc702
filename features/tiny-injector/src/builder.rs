use std::sync::Arc;

use crate::{
    container::DiContainer,
    discovery::ComponentSource,
    errors::ScanError,
    factories::{Arguments, DynFactory, ExistingInstance, FnFactory, InstanceFactory},
    initiator::{Component, DiInitiator},
    types::{DynError, Injectable, TypeInfo},
};

/// Explicit list of components
///
/// Register factories, closures and pre built values, then [DiBuilder::build] a fresh
/// [DiContainer] or hand the builder to [crate::Injector::scan].
pub struct DiBuilder {
    pub(crate) components: Vec<Component>,
}
impl Default for DiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiBuilder {
    pub fn new() -> Self {
        DiBuilder {
            components: Vec::new(),
        }
    }
}
impl DiBuilder {
    /// Registers a value that is already built, it takes no parameters
    pub fn add_instance<T: Injectable>(self, instance: T) -> Self {
        self.add_boxed(Box::new(ExistingInstance(Arc::new(instance))))
    }

    pub fn add_factory<Factory: InstanceFactory + 'static>(self, factory: Factory) -> Self {
        self.add_boxed(Box::new(factory))
    }

    /// Registers a closure building `T` from the given parameters
    ///
    /// ```
    /// use std::sync::Arc;
    /// use tiny_injector::{Arguments, DiBuilder, TypeInfo};
    ///
    /// struct Greeting(Arc<String>);
    ///
    /// let container = DiBuilder::new()
    ///     .add_instance(String::from("hello"))
    ///     .add_fn(vec![TypeInfo::of::<String>()], |args: &mut Arguments| {
    ///         Ok(Greeting(args.resolve()?))
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(*container.retrieve::<Greeting>().unwrap().0, "hello");
    /// ```
    pub fn add_fn<T, Construct>(self, parameters: Vec<TypeInfo>, construct: Construct) -> Self
    where
        T: Injectable,
        Construct: Fn(&mut Arguments) -> Result<T, DynError> + Send + Sync + 'static,
    {
        self.add_boxed(Box::new(FnFactory::new(parameters, construct)))
    }

    pub fn add_boxed(mut self, factory: Box<dyn DynFactory>) -> Self {
        self.components.push(Component::new(factory));
        self
    }

    /// Adds every component of another source
    pub fn add_source(mut self, source: impl ComponentSource) -> Self {
        self.components.extend(source.into_components());
        self
    }

    /// Builds a fresh container from the registered components
    pub fn build(self) -> Result<DiContainer, ScanError> {
        DiInitiator::new().initiate(self.components)
    }
}

impl ComponentSource for DiBuilder {
    fn into_components(self) -> Vec<Component> {
        self.components
    }
}
