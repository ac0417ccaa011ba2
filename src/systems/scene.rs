use crate::components::persistent::Persistent;
use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::{CurrentScene, NextScene, PERSISTENT_SCENE};
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    // Check if there is a pending scene change
    if next_scene.is_pending() {
        // If there is, trigger the SceneChangedEvent
        commands.trigger(SceneChangedEvent {});
    }
}

/// Request a transition to `name` and apply it immediately.
pub fn load_scene(world: &mut World, name: impl Into<String>) {
    world.get_resource_or_init::<NextScene>().set(name);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

/// Walk up the hierarchy to the root entity.
pub fn root_of(world: &World, entity: Entity) -> Entity {
    let mut current = entity;
    while let Some(child_of) = world.get::<ChildOf>(current) {
        current = child_of.parent();
    }
    current
}

/// Name of the scene `entity` currently belongs to.
///
/// Entities under a [`Persistent`] root report [`PERSISTENT_SCENE`]; all
/// others report the current scene. Returns `None` for despawned entities.
pub fn scene_of(world: &World, entity: Entity) -> Option<String> {
    world.get_entity(entity).ok()?;
    let root = root_of(world, entity);
    if world.get::<Persistent>(root).is_some() {
        return Some(PERSISTENT_SCENE.to_string());
    }
    world
        .get_resource::<CurrentScene>()
        .map(|scene| scene.name().to_string())
}
