//! Finding the components a scan consumes
//!
//! A [ComponentSource] is anything that yields components. [crate::DiBuilder] lists them
//! explicitly, [Discovered] collects every component marked with [crate::component!] below a
//! module path.
//!
//! ```
//! use tiny_injector::{component, Arguments, Discovered, FnFactory, Injector};
//!
//! pub struct Clock;
//!
//! component!(FnFactory::new(vec![], |_: &mut Arguments| Ok(Clock)));
//!
//! fn main() {
//!     let mut injector = Injector::new();
//!     injector.scan(Discovered::under(module_path!())).unwrap();
//!     assert!(injector.retrieve::<Clock>().is_ok());
//! }
//! ```

use std::any::TypeId;

use crate::{factories::DynFactory, initiator::Component, types::TypeDescriptor};

/// Yields the components of one scan
pub trait ComponentSource {
    fn into_components(self) -> Vec<Component>;
}

impl ComponentSource for Vec<Component> {
    fn into_components(self) -> Vec<Component> {
        self
    }
}

/// The marker of components registered without an explicit one
pub enum ComponentMarker {}

/// Link time registration of a component, submitted by [crate::component!]
pub struct ComponentRegistration {
    module_path: &'static str,
    marker: fn() -> TypeId,
    make: fn() -> Box<dyn DynFactory>,
}
impl ComponentRegistration {
    pub const fn new(
        module_path: &'static str,
        marker: fn() -> TypeId,
        make: fn() -> Box<dyn DynFactory>,
    ) -> Self {
        Self {
            module_path,
            marker,
            make,
        }
    }

    /// Module the component was registered in
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// True if the component was registered with marker `M`
    pub fn is_marked<M: ?Sized + 'static>(&self) -> bool {
        (self.marker)() == TypeId::of::<M>()
    }
}

inventory::collect!(ComponentRegistration);

/// Marks a factory as a component of the enclosing module
///
/// `component!(factory)` uses [ComponentMarker], `component!(marker = Type, factory)` registers
/// the component under another marker type, found with [Discovered::marked].
/// The expression is evaluated every time the component is discovered.
#[macro_export]
macro_rules! component {
    (marker = $marker:ty, $factory:expr) => {
        const _: () = {
            fn marker() -> ::core::any::TypeId {
                ::core::any::TypeId::of::<$marker>()
            }

            fn make() -> ::std::boxed::Box<dyn $crate::DynFactory> {
                ::std::boxed::Box::new($factory)
            }

            $crate::inventory::submit! {
                $crate::discovery::ComponentRegistration::new(::core::module_path!(), marker, make)
            }
        };
    };
    ($factory:expr) => {
        $crate::component!(marker = $crate::discovery::ComponentMarker, $factory);
    };
}

/// All registered components with one marker inside a namespace
#[derive(Debug, Clone)]
pub struct Discovered {
    namespace: String,
    marker: TypeId,
}
impl Discovered {
    /// Components registered in `namespace` or any module below it
    pub fn under(namespace: impl Into<String>) -> Self {
        Self::marked::<ComponentMarker>(namespace)
    }

    /// Components carrying marker `M`, registered in `namespace` or any module below it
    pub fn marked<M: ?Sized + 'static>(namespace: impl Into<String>) -> Self {
        let mut namespace = namespace.into();
        while namespace.ends_with("::") {
            namespace.truncate(namespace.len() - 2);
        }

        Self {
            namespace,
            marker: TypeId::of::<M>(),
        }
    }

    /// Every component registered without an explicit marker
    pub fn all() -> Self {
        Self::under("")
    }

    fn registrations(&self) -> impl Iterator<Item = &'static ComponentRegistration> + '_ {
        inventory::iter::<ComponentRegistration>
            .into_iter()
            .filter(|registration| (registration.marker)() == self.marker)
            .filter(|registration| in_namespace(&self.namespace, registration.module_path))
    }

    /// Descriptors of the matching components, without building anything
    pub fn descriptors(&self) -> Vec<TypeDescriptor> {
        self.registrations()
            .map(|registration| (registration.make)().descriptor())
            .collect()
    }
}

impl ComponentSource for Discovered {
    fn into_components(self) -> Vec<Component> {
        let components: Vec<Component> = self
            .registrations()
            .map(|registration| {
                tracing::trace!("Discovered component in {}", registration.module_path);
                Component::new((registration.make)())
            })
            .collect();

        tracing::debug!(
            "Discovered {} components under '{}'",
            components.len(),
            self.namespace
        );
        components
    }
}

/// True if `module_path` is `namespace` or nested below it
fn in_namespace(namespace: &str, module_path: &str) -> bool {
    if namespace.is_empty() {
        return true;
    }

    match module_path.strip_prefix(namespace) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}
