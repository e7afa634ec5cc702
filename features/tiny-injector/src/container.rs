use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
};

use crate::{
    errors::RetrieveError,
    types::{Injectable, Instance, TypeInfo},
};

/// Container holding all constructed singletons
///
/// Frozen once built, clones share the same singletons.
#[derive(Clone)]
pub struct DiContainer(pub Arc<DiContainerInner>);
pub struct DiContainerInner {
    instances: HashMap<TypeId, Instance>,
    order: Vec<TypeInfo>,
}
impl Debug for DiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.0.order.iter().map(|info| info.type_name))
            .finish()
    }
}

impl DiContainer {
    pub(crate) fn new(instances: HashMap<TypeId, Instance>, order: Vec<TypeInfo>) -> Self {
        Self(Arc::new(DiContainerInner { instances, order }))
    }

    /// Gets the singleton of the requested type
    pub fn retrieve<T: Injectable>(&self) -> Result<Arc<T>, RetrieveError> {
        self.get(&TypeInfo::of::<T>())?
            .downcast()
            .map_err(|actual_type| RetrieveError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })
    }

    /// Gets the untyped singleton of `info`
    pub fn get(&self, info: &TypeInfo) -> Result<&Instance, RetrieveError> {
        self.0
            .instances
            .get(&info.type_id)
            .ok_or(RetrieveError::UnknownComponent(info.type_name))
    }

    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.0.instances.contains_key(&info.type_id)
    }

    /// The order the singletons were constructed in
    pub fn construction_order(&self) -> &[TypeInfo] {
        &self.0.order
    }

    pub fn len(&self) -> usize {
        self.0.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.instances.is_empty()
    }
}
