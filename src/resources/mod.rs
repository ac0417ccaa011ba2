//! ECS resources.
//!
//! Submodules overview:
//! - [`lifecycleconfig`] – INI-backed configuration
//! - [`scene`] – current scene and pending transition
//! - [`singletonregistry`] – shared registry of live singleton instances
//! - [`systemsstore`] – named system IDs, used for scene enter systems

pub mod lifecycleconfig;
pub mod scene;
pub mod singletonregistry;
pub mod systemsstore;
