use crate::{errors::InjectError, factories::Arguments, types::TypeInfo};

pub mod arc;

/// Allows custom behaviour on injection
///
/// A resolver consumes the arguments of exactly one declared parameter.
pub trait Resolver {
    fn resolve(args: &mut Arguments) -> Result<Self, InjectError>
    where
        Self: Sized;

    /// The parameter type this resolver consumes
    fn parameter() -> TypeInfo;
}
