//! Event types and their observers.
//!
//! Submodules overview:
//! - [`scene`] – scene transition event and the observer applying it
//! - [`singleton`] – events published when a singleton registration changes

pub mod scene;
pub mod singleton;
