//! Singleton lifecycle observers and accessor.
//!
//! # Lifecycle
//!
//! For every [`Singleton`] type `T` the registry slot is either empty or holds
//! one entity:
//!
//! - attaching `T` to an entity while the slot is empty registers it
//! - attaching `T` while another entity holds the slot despawns the newcomer
//! - removing `T` from the holder (or despawning it) empties the slot
//! - [`singleton_instance`] fills an empty slot by finding an existing `T` or
//!   spawning a fresh entity
//!
//! A root-level holder gets
//! [`DontDestroyOnLoad`](crate::components::persistent::DontDestroyOnLoad).
//! A parented holder lives and dies with its parent.

use bevy_ecs::component::Mutable;
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::lifecycle::{Add, Remove};
use bevy_ecs::name::Name;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::persistent::{Persistent, mark_persistent};
use crate::components::singleton::Singleton;
use crate::events::singleton::{SingletonRegistered, SingletonRejected, SingletonReleased};
use crate::resources::lifecycleconfig::LifecycleConfig;
use crate::resources::singletonregistry::{Claim, SingletonRegistry};

/// Install the attach/destroy observers for `T`.
///
/// Idempotent. Also inserts a [`SingletonRegistry`] if the world has none.
/// Observer entities are [`Persistent`] so scene transitions keep them.
pub fn register_singleton<T: Singleton>(world: &mut World) {
    let registry = world.get_resource_or_init::<SingletonRegistry>().clone();
    if !registry.lock().mark_observed::<T>() {
        return;
    }
    world.spawn((Observer::new(on_singleton_added::<T>), Persistent));
    world.spawn((Observer::new(on_singleton_removed::<T>), Persistent));
    world.flush();
    debug!("Registered singleton observers for {}", T::type_name());
}

/// Whether a newly registered instance gets [`mark_persistent`].
fn should_persist(config: Option<&LifecycleConfig>, is_root: bool) -> bool {
    is_root && config.is_none_or(|c| c.persist_root_singletons)
}

/// Apply the attach policy to instances spawned before the observers existed.
///
/// `entity` has already been registered; every other `T` loses the race.
fn adopt_unobserved<T: Singleton>(world: &mut World, entity: Entity, duplicates: &[Entity]) {
    for &duplicate in duplicates {
        info!(
            "Duplicate {} on {:?}, keeping {:?}",
            T::type_name(),
            duplicate,
            entity
        );
        world.commands().entity(duplicate).try_despawn();
        world.trigger(SingletonRejected {
            entity: duplicate,
            holder: entity,
            type_name: T::type_name(),
        });
    }

    let is_root = world.get::<ChildOf>(entity).is_none();
    let persistent = should_persist(world.get_resource::<LifecycleConfig>(), is_root);
    if persistent {
        mark_persistent(&mut world.commands(), entity);
    }
    world.trigger(SingletonRegistered {
        entity,
        type_name: T::type_name(),
        persistent,
    });
    world.flush();
}

/// Attach hook: claim the registry slot or lose the race.
pub fn on_singleton_added<T: Singleton>(
    add: On<Add, T>,
    mut commands: Commands,
    registry: Option<Res<SingletonRegistry>>,
    config: Option<Res<LifecycleConfig>>,
    parents: Query<(), With<ChildOf>>,
) {
    let entity = add.entity;
    let Some(registry) = registry else {
        warn!(
            "SingletonRegistry missing; {} on {:?} is unmanaged",
            T::type_name(),
            entity
        );
        return;
    };

    match registry.claim::<T>(entity) {
        Claim::Denied { holder } => {
            info!(
                "Duplicate {} on {:?}, keeping {:?}",
                T::type_name(),
                entity,
                holder
            );
            commands.entity(entity).try_despawn();
            commands.trigger(SingletonRejected {
                entity,
                holder,
                type_name: T::type_name(),
            });
        }
        Claim::Granted => {
            let persistent = should_persist(config.as_deref(), !parents.contains(entity));
            if persistent {
                mark_persistent(&mut commands, entity);
            }
            debug!(
                "{:?} is the {} instance (persistent: {})",
                entity,
                T::type_name(),
                persistent
            );
            commands.trigger(SingletonRegistered {
                entity,
                type_name: T::type_name(),
                persistent,
            });
        }
    }
}

/// Destroy hook: empty the slot if `entity` still holds it.
pub fn on_singleton_removed<T: Singleton>(
    remove: On<Remove, T>,
    mut commands: Commands,
    registry: Option<Res<SingletonRegistry>>,
) {
    let entity = remove.entity;
    let Some(registry) = registry else {
        return;
    };
    if registry.release::<T>(entity) {
        debug!("{} released by {:?}", T::type_name(), entity);
        commands.trigger(SingletonReleased {
            entity,
            type_name: T::type_name(),
        });
    }
}

/// Return the entity holding the single live `T`, creating it if needed.
///
/// Looks in the registry first, then for any entity already carrying `T`,
/// and finally spawns a new entity named [`Singleton::node_name`]. Repeated
/// calls return the same entity until it is despawned or loses `T`.
pub fn singleton_instance<T: Singleton>(world: &mut World) -> Entity {
    register_singleton::<T>(world);
    let registry = world.get_resource_or_init::<SingletonRegistry>().clone();

    let mut state = registry.lock();
    if let Some(entity) = state.holder::<T>() {
        if world.get::<T>(entity).is_some() {
            return entity;
        }
        warn!(
            "Registered {} on {:?} is gone; discarding registration",
            T::type_name(),
            entity
        );
        state.clear::<T>();
    }

    let existing: Vec<Entity> = world
        .query_filtered::<Entity, With<T>>()
        .iter(world)
        .collect();
    if let Some((&entity, duplicates)) = existing.split_first() {
        debug!("Found existing {} on {:?}", T::type_name(), entity);
        state.set::<T>(entity);
        drop(state);
        adopt_unobserved::<T>(world, entity, duplicates);
        return entity;
    }

    // Reserve the slot for an empty entity, then attach `T` with the guard
    // released: the attach observer takes the same lock and finds its own
    // reservation.
    let entity = world.spawn_empty().id();
    state.set::<T>(entity);
    drop(state);

    info!("Creating {} on {:?}", T::type_name(), entity);
    world
        .entity_mut(entity)
        .insert((Name::new(T::node_name()), T::default()));
    world.flush();
    entity
}

/// Run `f` against the single live `T`, creating it if needed.
///
/// Returns `None` only when another observer despawns the new entity or
/// removes `T` from it while it is being created.
pub fn with_singleton<T, R>(world: &mut World, f: impl FnOnce(&mut T) -> R) -> Option<R>
where
    T: Singleton<Mutability = Mutable>,
{
    let entity = singleton_instance::<T>(world);
    let mut instance = world.get_mut::<T>(entity)?;
    Some(f(&mut *instance))
}
