//! Sitegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sitegen
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sitegen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ConfigInjector, ComponentService,     │
//! │   ScriptService, config resolver)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │  (Filesystem, SettingsStore, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sitegen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, JsonSettingsStore,   │
//! │   SimpleRenderer, builtin templates)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (deep_merge, naming, ProjectType,      │
//! │   ScaffoldPlan)                         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The heart of the crate is the configuration resolver
//! ([`application::resolver::resolve`]): it walks a directory chain upward
//! from a working directory, locates the nearest configuration file at each
//! level, and deep-merges results so that configuration closer to the start
//! directory wins over configuration from ancestor directories.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentService, ConfigInjector, ScriptService,
        ports::{Filesystem, SettingsStore, TemplateRenderer},
        resolver::{self, ConfigFile},
    };
    pub use crate::domain::{
        ComponentStructure, FileToWrite, ProjectType, RenderContext, ScaffoldPlan, deep_merge,
        remove_empty,
    };
    pub use crate::error::{SitegenError, SitegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
