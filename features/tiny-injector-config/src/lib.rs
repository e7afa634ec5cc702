//! Tiny Injector Config provides a registry of configs that can be injected in the components.
//!
//! It is split into two major parts:
//! 1. ConfigProvider: Used to create the registry of all configs
//! 2. Config<T>: A wrapper type to be able to resolve configs inside a factory
//!
//! # Examples
//!
//! ```rust
//! use tiny_injector_config::ConfigProvider;
//!
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut config_provider = ConfigProvider::default();
//! config_provider
//!     .add_config(AppConfig {
//!         host: "localhost".to_string(),
//!         port: 8080,
//!     })
//!     .unwrap();
//!
//! let retrieved = config_provider.get_config::<AppConfig>().unwrap();
//! assert_eq!(retrieved.host, "localhost");
//! assert_eq!(retrieved.port, 8080);
//! ```

pub mod config;
pub mod errors;
pub mod provider;

pub use config::Config;
pub use errors::ConfigError;
pub use provider::ConfigProvider;
