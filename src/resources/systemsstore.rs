//! Registry for dynamically addressable systems.
//!
//! Allows systems to be registered under string keys and looked up later to
//! run via their [`bevy_ecs::system::SystemId`]. The scene transition
//! observer uses it to run a scene's enter system by scene name.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::components::persistent::Persistent;

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}

/// Register `system` in the world and store it under `name`.
///
/// Registered systems are stored as entities, so they are marked
/// [`Persistent`] to survive scene transitions.
pub fn register_named_system<M>(
    world: &mut World,
    name: impl Into<String>,
    system: impl IntoSystem<(), (), M> + 'static,
) -> SystemId {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    world
        .get_resource_or_init::<SystemsStore>()
        .insert(name, id);
    id
}
