//! ECS systems and world helpers.
//!
//! Submodules overview:
//! - [`scene`] – pending scene detection, scene loading and scene membership
//! - [`singleton`] – singleton observers and the find-or-create accessor

pub mod scene;
pub mod singleton;
