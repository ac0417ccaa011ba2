//! ECS components for entity lifetime management.
//!
//! Submodules overview:
//! - [`persistent`] – markers for entities that persist across scene changes
//! - [`singleton`] – trait for components with at most one live instance

pub mod persistent;
pub mod singleton;
