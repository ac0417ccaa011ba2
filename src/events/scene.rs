//! Scene transition event and observer.
//!
//! Systems request a scene change by updating [`NextScene`]. Emitting a
//! [`SceneChangedEvent`] then triggers the observer in this module, which
//! tears down the outgoing scene, applies the transition to [`CurrentScene`]
//! and runs the incoming scene's enter system stored in [`SystemsStore`].
//!
//! Teardown despawns every root entity that is not [`Persistent`]. Children
//! are despawned with their root, and survive with it.
use crate::components::persistent::Persistent;
use crate::resources::scene::NextScenes::{Pending, Unchanged};
use crate::resources::scene::{CurrentScene, NextScene};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending scene transition should be applied.
///
/// Emitting this event causes [`observe_scene_change_event`] to read
/// [`NextScene`]. If it contains [`Pending`], the scene is swapped; if it is
/// [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Root entities destroyed by a scene transition. Observers are engine
/// plumbing, not scene content, and are never collected.
type SceneRoots<'w, 's> =
    Query<'w, 's, Entity, (Without<ChildOf>, Without<Persistent>, Without<Observer>)>;

/// Observer that applies a pending scene transition.
///
/// Contract
/// - Reads the intention from [`NextScene`].
/// - If pending:
///   - despawns all non-persistent root entities
///   - records the new scene in [`CurrentScene`]
///   - runs the system registered under the scene name, if any
///   - resets [`NextScene`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: Option<ResMut<NextScene>>,
    mut current_scene: Option<ResMut<CurrentScene>>,
    roots: SceneRoots,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("SceneChangedEvent triggered");

    if let (Some(next_scene), Some(current_scene)) =
        (next_scene.as_deref_mut(), current_scene.as_deref_mut())
    {
        // Clone so we don't keep an immutable borrow while resetting.
        let next_value = next_scene.get().clone();
        match next_value {
            Pending(new_scene) => {
                info!(
                    "Transitioning from scene '{}' to '{}'",
                    current_scene.name(),
                    new_scene
                );
                let mut despawned = 0usize;
                for entity in roots.iter() {
                    commands.entity(entity).try_despawn();
                    despawned += 1;
                }
                debug!("Despawned {} scene root(s)", despawned);

                current_scene.set(new_scene.clone());
                next_scene.reset();

                if let Some(system_id) = systems_store.as_deref().and_then(|s| s.get(&new_scene))
                {
                    debug!("Running enter system for scene '{}'", new_scene);
                    commands.run_system(*system_id);
                }
            }
            Unchanged => {
                debug!("No scene change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_scene_change_event. next_scene: {:?}, current_scene: {:?}",
            next_scene.is_some(),
            current_scene.is_some()
        );
    }
}
