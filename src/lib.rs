//! Aberred lifecycle library.
//!
//! Entity lifetime helpers for `bevy_ecs` worlds organised in scenes:
//!
//! - [`components::persistent`] – markers that keep entities across scene changes
//! - [`components::singleton`] – the [`Singleton`](components::singleton::Singleton) component contract
//! - [`events`] – scene transition and singleton lifecycle events
//! - [`resources`] – scene state, singleton registry, configuration, named systems
//! - [`systems`] – scene transition helpers, singleton observers and accessor
//! - [`setup`] – one-call world setup

pub mod components;
pub mod events;
pub mod resources;
pub mod setup;
pub mod systems;
