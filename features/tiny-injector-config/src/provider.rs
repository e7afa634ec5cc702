use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

use tiny_injector::TypeInfo;

use crate::errors::ConfigError;

/// A provider to register all configs.
///
/// Configs can be registered and retrieved based on type. The provider itself is registered
/// as a component, so factories can pull their configs through [`crate::config::Config`].
#[derive(Default)]
pub struct ConfigProvider {
    configs: HashMap<TypeId, Arc<dyn Any + Send + Sync + 'static>>,
}

impl std::fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigProvider")
            .field("configs", &self.configs.len())
            .finish()
    }
}

impl ConfigProvider {
    /// Initializes an empty Config Provider
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Retrieve a config with specified type.
    ///
    /// If the config type was never registered, it will return [`ConfigError::ConfigMissing`]
    pub fn get_config<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, ConfigError> {
        self.configs
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.clone().downcast().ok())
            .ok_or_else(|| ConfigError::ConfigMissing(TypeInfo::of::<T>()))
    }

    /// Add a config to the registry.
    ///
    /// If the config type is already registered, it will return
    /// [`ConfigError::ConfigAlreadyRegistered`]
    pub fn add_config<T: Send + Sync + 'static>(
        &mut self,
        config: T,
    ) -> Result<&mut Self, ConfigError> {
        let type_id = TypeId::of::<T>();

        if self.configs.contains_key(&type_id) {
            tracing::warn!("Config '{}' registered twice", TypeInfo::of::<T>());
            return Err(ConfigError::ConfigAlreadyRegistered(TypeInfo::of::<T>()));
        }

        tracing::debug!("Registered config '{}'", TypeInfo::of::<T>());
        self.configs.insert(type_id, Arc::new(config));
        Ok(self)
    }

    /// Can optionally add a config to the registry.
    ///
    /// If the config provided is `Some(T)`, it will be the same as calling [`ConfigProvider::add_config`]
    /// If the config provided is `None`, then the function just returns `Ok(self)` for chaining
    pub fn maybe_add_config<T: Send + Sync + 'static>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, ConfigError> {
        match config {
            Some(c) => self.add_config(c),
            None => Ok(self),
        }
    }
}
