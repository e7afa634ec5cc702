//! A tiny dependency injection container.
//!
//! Components declare the types their constructor takes. A scan orders all components so
//! every dependency is built before its dependents, then builds exactly one singleton per
//! component and wires it with the singletons it depends on.
//!
//! The crate consists of the following parts:
//!
//! 1. Sources - [DiBuilder] lists components explicitly, [Discovered] collects the ones marked
//!    with [component!] below a module path
//! 2. Factories - [InstanceFactory] implementations or closures building a component from its
//!    [Arguments]
//! 3. Scanning - [DependencyGraph], [topological::sort] and the initiator building the singletons
//! 4. Retrieval - the frozen [DiContainer], owned by an [Injector] or by the process ([global])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tiny_injector::{Arguments, DiBuilder, DynError, InstanceFactory, Injector, TypeInfo};
//!
//! struct Database;
//! struct Repository {
//!     database: Arc<Database>,
//! }
//!
//! struct RepositoryFactory;
//! impl InstanceFactory for RepositoryFactory {
//!     type Provides = Repository;
//!
//!     fn parameters() -> Vec<TypeInfo> {
//!         vec![TypeInfo::of::<Database>()]
//!     }
//!
//!     fn construct(&self, args: &mut Arguments) -> Result<Repository, DynError> {
//!         Ok(Repository {
//!             database: args.resolve()?,
//!         })
//!     }
//! }
//!
//! let mut injector = Injector::new();
//! injector
//!     .scan(
//!         DiBuilder::new()
//!             .add_factory(RepositoryFactory)
//!             .add_instance(Database),
//!     )
//!     .unwrap();
//!
//! let repository = injector.retrieve::<Repository>().unwrap();
//! assert!(Arc::ptr_eq(
//!     &repository.database,
//!     &injector.retrieve::<Database>().unwrap()
//! ));
//! ```

pub mod builder;
pub mod container;
pub mod dependency_graph;
pub mod discovery;
pub mod errors;
pub mod factories;
pub mod global;
pub mod initiator;
pub mod injector;
pub mod resolver;
pub mod topological;
pub mod types;

pub use builder::DiBuilder;
pub use container::DiContainer;
pub use dependency_graph::DependencyGraph;
pub use discovery::{ComponentMarker, ComponentSource, Discovered};
pub use errors::{InjectError, RetrieveError, ScanError};
pub use factories::{Arguments, DynFactory, FnFactory, InstanceFactory};
pub use initiator::Component;
pub use injector::Injector;
pub use resolver::Resolver;
pub use types::{DynError, Injectable, Instance, TypeDescriptor, TypeInfo};

#[doc(hidden)]
pub use inventory;
