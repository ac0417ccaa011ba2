//! World setup for the lifecycle layer.
//!
//! [`setup_lifecycle`] inserts the resources and spawns the observers that
//! scene transitions and persistence markers rely on. Observers are spawned
//! [`Persistent`] so the first transition does not remove them.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::persistent::{Persistent, observe_dont_destroy_on_load};
use crate::events::scene::observe_scene_change_event;
use crate::resources::lifecycleconfig::LifecycleConfig;
use crate::resources::scene::{CurrentScene, NextScene};
use crate::resources::singletonregistry::SingletonRegistry;
use crate::resources::systemsstore::SystemsStore;

/// Insert lifecycle resources and observers into `world`.
pub fn setup_lifecycle(world: &mut World, config: LifecycleConfig) {
    info!("Setting up lifecycle, initial scene '{}'", config.initial_scene);
    world.insert_resource(CurrentScene::new(config.initial_scene.clone()));
    world.insert_resource(NextScene::new());
    world.init_resource::<SingletonRegistry>();
    world.init_resource::<SystemsStore>();
    world.insert_resource(config);

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(observe_dont_destroy_on_load), Persistent));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
}
