//! Persistent entity marker components.
//!
//! Entities with the [`Persistent`] component will not be despawned when
//! switching scenes. Use this for global state, audio controllers, or any
//! entity that must survive scene transitions.
//!
//! [`DontDestroyOnLoad`] is the attachable marker: inserting it on an entity
//! also inserts [`Persistent`], so the entity (and everything parented under
//! it) is skipped by the scene transition observer in
//! [`crate::events::scene`].

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::lifecycle::Add;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Tag component used to mark entities that should persist across scene changes.
///
/// Entities with this component will not be despawned when switching scenes.
/// Only root entities are considered; a child lives and dies with its root.
#[derive(Component, Clone, Debug, Default)]
pub struct Persistent;

/// Marker that exempts its entity from scene transition cleanup.
///
/// Attaching it is idempotent: a second insert re-asserts the same
/// [`Persistent`] flag and nothing else.
#[derive(Component, Clone, Copy, Debug, Default)]
#[require(Persistent)]
pub struct DontDestroyOnLoad;

/// Mark `entity` as surviving scene transitions.
pub fn mark_persistent(commands: &mut Commands, entity: Entity) {
    commands.entity(entity).insert(DontDestroyOnLoad);
}

/// Observer that reports where a [`DontDestroyOnLoad`] marker was attached.
///
/// The flag is honoured only on hierarchy roots, so attaching the marker to a
/// child is allowed but logged.
pub fn observe_dont_destroy_on_load(add: On<Add, DontDestroyOnLoad>, parents: Query<&ChildOf>) {
    let entity = add.entity;
    match parents.get(entity) {
        Ok(child_of) => warn!(
            "DontDestroyOnLoad on {:?} has no effect while it is parented to {:?}",
            entity,
            child_of.parent()
        ),
        Err(_) => debug!("{:?} will survive scene transitions", entity),
    }
}
