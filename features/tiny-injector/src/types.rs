use std::{
    any::{Any, TypeId},
    hash::{Hash, Hasher},
    sync::Arc,
};

/// All errors must be Send + Sync so they can be shared across threads
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Singletons are shared between every caller of the container
/// So anything injectable needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A constructed singleton
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    pub instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub(crate) fn new<ExistingInstance: Injectable>(instance: ExistingInstance) -> Self {
        Self::from_arc(Arc::new(instance))
    }

    pub(crate) fn from_arc<ExistingInstance: Injectable>(instance: Arc<ExistingInstance>) -> Self {
        Instance {
            info: TypeInfo::of::<ExistingInstance>(),
            instance,
        }
    }

    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.instance.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }

    /// Returns true if both refer to the same singleton
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
///
/// Identity is the [TypeId] alone, the name is only kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}
impl Eq for TypeInfo {}
impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

/// A component type together with the types its constructor takes, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub identity: TypeInfo,
    pub parameters: Vec<TypeInfo>,
}
impl TypeDescriptor {
    pub fn new(identity: TypeInfo, parameters: Vec<TypeInfo>) -> Self {
        Self {
            identity,
            parameters,
        }
    }

    /// Descriptor of a component without constructor parameters
    pub fn leaf(identity: TypeInfo) -> Self {
        Self::new(identity, Vec::new())
    }
}
