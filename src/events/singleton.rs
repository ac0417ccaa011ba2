//! Singleton lifecycle events.
//!
//! Triggered by the observers in [`crate::systems::singleton`] whenever the
//! registry changes hands. Game code can observe them instead of overriding
//! per-type attach/destroy hooks:
//!
//! ```ignore
//! world.add_observer(|ev: On<SingletonRegistered>| {
//!     info!("{} is now {:?}", ev.type_name, ev.entity);
//! });
//! ```

use bevy_ecs::prelude::*;

/// An entity became the registered instance of `type_name`.
#[derive(Event, Debug, Clone, Copy)]
pub struct SingletonRegistered {
    pub entity: Entity,
    pub type_name: &'static str,
    /// Whether the entity was marked to survive scene transitions.
    pub persistent: bool,
}

/// A duplicate instance lost the race and its entity is being despawned.
#[derive(Event, Debug, Clone, Copy)]
pub struct SingletonRejected {
    pub entity: Entity,
    pub holder: Entity,
    pub type_name: &'static str,
}

/// The registered instance of `type_name` was removed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SingletonReleased {
    pub entity: Entity,
    pub type_name: &'static str,
}
