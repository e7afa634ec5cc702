use std::{ops::Deref, sync::Arc};

use tiny_injector::{Arguments, InjectError, Resolver, TypeInfo};

use crate::provider::ConfigProvider;

/// A wrapper type to allow for config injections
///
/// Resolving a `Config<T>` consumes a [`ConfigProvider`] argument, so factories declare
/// the provider as the parameter and pull the config out of it.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use tiny_injector::{Arguments, DiBuilder, Resolver};
/// use tiny_injector_config::{Config, ConfigProvider};
///
/// struct ServerConfig {
///     port: u16,
/// }
///
/// struct Server {
///     port: u16,
/// }
///
/// let mut provider = ConfigProvider::initialize();
/// provider.add_config(ServerConfig { port: 8080 }).unwrap();
///
/// let container = DiBuilder::new()
///     .add_instance(provider)
///     .add_fn(
///         vec![Config::<ServerConfig>::parameter()],
///         |args: &mut Arguments| {
///             let config: Config<ServerConfig> = args.resolve()?;
///             Ok(Server { port: config.port })
///         },
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(container.retrieve::<Server>().unwrap().port, 8080);
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T> Config<T> {
    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}

impl<T: Send + Sync + 'static> Resolver for Config<T> {
    fn resolve(args: &mut Arguments) -> Result<Self, InjectError> {
        let config_provider = args.resolve::<Arc<ConfigProvider>>()?;

        let config = config_provider
            .get_config::<T>()
            .map_err(|e| InjectError::Other(Box::new(e)))?;

        Ok(Config { inner: config })
    }

    fn parameter() -> TypeInfo {
        TypeInfo::of::<ConfigProvider>()
    }
}
