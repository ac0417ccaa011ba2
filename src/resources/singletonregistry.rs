//! Registry of live singleton instances.
//!
//! One slot per component type, keyed by [`TypeId`]. The registry is a cheap
//! handle around shared state, so it can be cloned out of the world and read
//! from other threads. Every mutation, from the attach/destroy observers and
//! from the lazy accessor alike, goes through the same mutex.

use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::any::TypeId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::components::singleton::Singleton;

/// Outcome of an attach-time claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The entity is (now) the registered instance.
    Granted,
    /// Another live instance already holds the slot.
    Denied { holder: Entity },
}

/// Registration record for one component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub entity: Entity,
    pub type_name: &'static str,
}

/// Registry state. Only reachable through [`SingletonRegistry::lock`].
#[derive(Debug, Default)]
pub struct RegistryState {
    slots: FxHashMap<TypeId, Slot>,
    observed: FxHashSet<TypeId>,
}

impl RegistryState {
    /// Currently registered entity for `T`, if any.
    pub fn holder<T: Singleton>(&self) -> Option<Entity> {
        self.slots.get(&TypeId::of::<T>()).map(|slot| slot.entity)
    }

    /// Register `entity` unless a different entity already holds the slot.
    pub fn claim<T: Singleton>(&mut self, entity: Entity) -> Claim {
        match self.slots.get(&TypeId::of::<T>()) {
            Some(slot) if slot.entity != entity => Claim::Denied {
                holder: slot.entity,
            },
            _ => {
                self.set::<T>(entity);
                Claim::Granted
            }
        }
    }

    /// Clear the slot for `T`, but only if `entity` is the registered one.
    pub fn release<T: Singleton>(&mut self, entity: Entity) -> bool {
        let key = TypeId::of::<T>();
        if self.slots.get(&key).is_some_and(|slot| slot.entity == entity) {
            self.slots.remove(&key);
            true
        } else {
            false
        }
    }

    /// Unconditionally register `entity` for `T`.
    pub fn set<T: Singleton>(&mut self, entity: Entity) {
        self.slots.insert(
            TypeId::of::<T>(),
            Slot {
                entity,
                type_name: T::type_name(),
            },
        );
    }

    /// Unconditionally clear the slot for `T`.
    pub fn clear<T: Singleton>(&mut self) -> Option<Slot> {
        self.slots.remove(&TypeId::of::<T>())
    }

    /// Record that lifecycle observers exist for `T`. Returns `false` if they
    /// already did.
    pub fn mark_observed<T: Singleton>(&mut self) -> bool {
        self.observed.insert(TypeId::of::<T>())
    }

    pub fn is_observed<T: Singleton>(&self) -> bool {
        self.observed.contains(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Snapshot of every registration.
    pub fn slots(&self) -> Vec<Slot> {
        self.slots.values().copied().collect()
    }
}

/// Shared, thread-safe singleton registry resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct SingletonRegistry {
    inner: Arc<Mutex<RegistryState>>,
}

impl SingletonRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the registry guard.
    ///
    /// A panic while the guard was held leaves the map in a consistent state
    /// (every mutation is a single insert or remove), so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn holder<T: Singleton>(&self) -> Option<Entity> {
        self.lock().holder::<T>()
    }

    pub fn claim<T: Singleton>(&self, entity: Entity) -> Claim {
        self.lock().claim::<T>(entity)
    }

    pub fn release<T: Singleton>(&self, entity: Entity) -> bool {
        self.lock().release::<T>(entity)
    }

    pub fn is_observed<T: Singleton>(&self) -> bool {
        self.lock().is_observed::<T>()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
