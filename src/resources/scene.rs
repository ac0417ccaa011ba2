//! Scene resources.
//!
//! These resources track the currently loaded scene and any pending
//! transition requested by systems. See
//! `crate::events::scene::observe_scene_change_event` for how a transition is
//! applied.

use bevy_ecs::prelude::Resource;

/// Name of the container reported for entities that survive scene loads.
pub const PERSISTENT_SCENE: &str = "DontDestroyOnLoad";

/// Representation of a requested next scene.
///
/// Use [`NextScene::set`] to mark a transition as pending; an observer will
/// later apply it and reset the value to [`NextScenes::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(String),
}

/// Authoritative current scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrentScene {
    name: String,
    loads: u32,
}

impl CurrentScene {
    /// Start in `name` without counting it as a load.
    pub fn new(name: impl Into<String>) -> Self {
        CurrentScene {
            name: name.into(),
            loads: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of transitions applied so far.
    pub fn loads(&self) -> u32 {
        self.loads
    }

    /// Record that `name` has been loaded.
    pub fn set(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.loads += 1;
    }
}

/// Intent to change to a new scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    /// Create a new value initialized to [`NextScenes::Unchanged`].
    pub fn new() -> Self {
        NextScene {
            next: NextScenes::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    /// Request a transition to `name` by marking it as pending.
    ///
    /// Reloading the current scene is a valid request.
    pub fn set(&mut self, name: impl Into<String>) {
        self.next = NextScenes::Pending(name.into());
        // The system `check_pending_scene` will handle the event emission.
    }

    /// Reset to [`NextScenes::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextScenes::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_scene_counts_loads() {
        let mut scene = CurrentScene::new("main");
        assert_eq!(scene.name(), "main");
        assert_eq!(scene.loads(), 0);
        scene.set("main");
        scene.set("level1");
        assert_eq!(scene.name(), "level1");
        assert_eq!(scene.loads(), 2);
    }

    #[test]
    fn next_scene_set_and_reset() {
        let mut next = NextScene::new();
        assert!(!next.is_pending());
        next.set("level1");
        assert_eq!(next.get(), &NextScenes::Pending("level1".into()));
        next.reset();
        assert_eq!(next.get(), &NextScenes::Unchanged);
    }
}
