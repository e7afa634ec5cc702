use std::{any::type_name, sync::Arc};

use crate::{
    errors::InjectError,
    factories::Arguments,
    resolver::Resolver,
    types::{Injectable, TypeInfo},
};

impl<T: Injectable> Resolver for Arc<T> {
    fn resolve(args: &mut Arguments) -> Result<Self, InjectError> {
        let resolved = args.next_argument(TypeInfo::of::<T>())?;
        let downcasted = resolved
            .downcast::<T>()
            .map_err(|actual_type| InjectError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })?;

        Ok(downcasted)
    }

    fn parameter() -> TypeInfo {
        TypeInfo::of::<T>()
    }
}
