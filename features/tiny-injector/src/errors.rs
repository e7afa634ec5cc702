use std::sync::Arc;

use thiserror::Error;

use crate::types::{DynError, TypeInfo};

/// Errors while scanning components and building the singletons
#[derive(Error, Debug, Clone)]
pub enum ScanError {
    /// The injector has already been scanned, successfully or not
    #[error("Components have already been scanned")]
    AlreadyScanned,

    /// Two components provide the same type
    #[error("A Type has been registered twice: '{0}'")]
    DuplicateComponent(TypeInfo),

    /// Not every component could be ordered
    #[error("Cyclic dependencies detected, unresolved components: {unresolved:?}")]
    CyclicDependency { unresolved: Vec<TypeInfo> },

    /// A constructor parameter was never built
    #[error("'{required_by}' needs '{dependency}' but it is missing")]
    MissingDependency {
        dependency: TypeInfo,
        required_by: TypeInfo,
    },

    /// A Factory failed to build
    #[error("Factory for '{component}' failed - error: {error}")]
    ConstructionFailed {
        component: TypeInfo,
        error: Arc<DynError>,
    },
}

/// Errors when trying to retrieve a singleton
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrieveError {
    /// No scan has completed yet
    #[error("Retrieve called before components were scanned")]
    NotScanned,
    /// The requested type was never registered
    #[error("No such singleton: '{0}'")]
    UnknownComponent(&'static str),

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors while a factory pulls its arguments
#[derive(Error, Debug)]
pub enum InjectError {
    /// The factory asked for more arguments than it declared
    #[error("Argument {position} of '{component}' requested but only {position} were declared")]
    ArgumentsExhausted {
        component: TypeInfo,
        position: usize,
    },
    /// The factory asked for arguments in a different order than it declared
    #[error("Argument {position} of '{component}' is '{actual}', not '{expected}'")]
    ArgumentMismatch {
        component: TypeInfo,
        position: usize,
        expected: TypeInfo,
        actual: TypeInfo,
    },

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
    /// The factory built a different type than it supplies
    #[error("Factory for '{component}' built a '{actual}'")]
    WrongInstance {
        component: TypeInfo,
        actual: TypeInfo,
    },
    /// Generic error during Injection
    #[error("Error during injection: {0}")]
    Other(DynError),
}
