//! Application layer: config resolution, injection, and generation services.

pub mod error;
pub mod injector;
pub mod ports;
pub mod resolver;
pub mod services;

pub use error::ApplicationError;
pub use injector::ConfigInjector;
pub use services::{
    ComponentOptions, ComponentService, ComponentTemplates, ScriptOptions, ScriptService,
    ScriptTemplates,
};
