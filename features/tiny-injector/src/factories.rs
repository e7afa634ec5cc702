use std::{marker::PhantomData, sync::Arc};

use crate::{
    errors::InjectError,
    resolver::Resolver,
    types::{DynError, Injectable, Instance, TypeDescriptor, TypeInfo},
};

/// A Factory providing the singleton of a given type
pub trait InstanceFactory: Send + Sync {
    type Provides: Injectable;

    /// Returns the typeinfo about the factory's provided type
    fn supplies() -> TypeInfo {
        TypeInfo::of::<Self::Provides>()
    }

    /// Returns the types the factory takes, in the order it resolves them from [Arguments]
    fn parameters() -> Vec<TypeInfo>;

    /// Constructs the singleton of the factory's provided type
    ///
    /// Every declared parameter has already been built when this is called.
    fn construct(&self, args: &mut Arguments) -> Result<Self::Provides, DynError>;
}

/// Wrapper Trait for factories, providing instances of Any
pub trait DynFactory: Send + Sync {
    fn descriptor(&self) -> TypeDescriptor;

    fn construct(&self, args: &mut Arguments) -> Result<Instance, DynError>;
}
// Impl DynFactory for any InstanceFactory
impl<T: Injectable, SpecificFactory: InstanceFactory<Provides = T>> DynFactory for SpecificFactory {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(SpecificFactory::supplies(), SpecificFactory::parameters())
    }

    fn construct(&self, args: &mut Arguments) -> Result<Instance, DynError> {
        InstanceFactory::construct(self, args).map(Instance::new)
    }
}

/// Factory backed by a closure
pub struct FnFactory<T, Construct> {
    parameters: Vec<TypeInfo>,
    construct: Construct,
    _provides: PhantomData<fn() -> T>,
}
impl<T, Construct> FnFactory<T, Construct>
where
    T: Injectable,
    Construct: Fn(&mut Arguments) -> Result<T, DynError> + Send + Sync,
{
    pub fn new(parameters: Vec<TypeInfo>, construct: Construct) -> Self {
        Self {
            parameters,
            construct,
            _provides: PhantomData,
        }
    }
}
impl<T, Construct> DynFactory for FnFactory<T, Construct>
where
    T: Injectable,
    Construct: Fn(&mut Arguments) -> Result<T, DynError> + Send + Sync,
{
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(TypeInfo::of::<T>(), self.parameters.clone())
    }

    fn construct(&self, args: &mut Arguments) -> Result<Instance, DynError> {
        (self.construct)(args).map(Instance::new)
    }
}

/// Hands out a value that was built before scanning
pub(crate) struct ExistingInstance<T>(pub(crate) Arc<T>);
impl<T: Injectable> DynFactory for ExistingInstance<T> {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::leaf(TypeInfo::of::<T>())
    }

    fn construct(&self, _: &mut Arguments) -> Result<Instance, DynError> {
        Ok(Instance::from_arc(self.0.clone()))
    }
}

/// The already built dependencies of a component, in declaration order
///
/// Factories consume them front to back, usually through [Arguments::resolve].
pub struct Arguments {
    component: TypeInfo,
    values: std::vec::IntoIter<Instance>,
    position: usize,
}
impl Arguments {
    pub fn new(component: TypeInfo, values: Vec<Instance>) -> Self {
        Self {
            component,
            values: values.into_iter(),
            position: 0,
        }
    }

    /// The component being constructed
    pub fn component(&self) -> TypeInfo {
        self.component
    }

    /// Resolves the next argument
    pub fn resolve<R: Resolver>(&mut self) -> Result<R, InjectError> {
        R::resolve(self)
    }

    /// Takes the next argument, which must be of the `expected` type
    pub fn next_argument(&mut self, expected: TypeInfo) -> Result<Instance, InjectError> {
        let position = self.position;
        let Some(instance) = self.values.next() else {
            return Err(InjectError::ArgumentsExhausted {
                component: self.component,
                position,
            });
        };
        self.position += 1;

        if instance.info != expected {
            return Err(InjectError::ArgumentMismatch {
                component: self.component,
                position,
                expected,
                actual: instance.info,
            });
        }

        Ok(instance)
    }

    /// Number of arguments not yet taken
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}
