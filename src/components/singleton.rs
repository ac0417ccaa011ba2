//! Singleton component contract.
//!
//! Any component type implementing [`Singleton`] can be managed by the
//! singleton observers and accessor in [`crate::systems::singleton`]: at most
//! one entity carries a registered instance, the instance is created on first
//! access, and the registration is dropped when that instance goes away.
//!
//! ```ignore
//! #[derive(Component, Default)]
//! struct AudioDirector { volume: f32 }
//!
//! impl Singleton for AudioDirector {}
//!
//! let entity = singleton_instance::<AudioDirector>(&mut world);
//! ```

use bevy_ecs::prelude::Component;

/// A component with at most one live, registered instance per world.
pub trait Singleton: Component + Default {
    /// Name given to the entity spawned when no instance exists yet.
    ///
    /// Defaults to the unqualified type name.
    fn node_name() -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }

    /// Full type name used in logs and lifecycle events.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Strip the module path from a type name, ignoring generic arguments.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component, Default)]
    struct GameDirector;

    impl Singleton for GameDirector {}

    #[derive(Component, Default)]
    struct Named;

    impl Singleton for Named {
        fn node_name() -> String {
            "custom".into()
        }
    }

    #[test]
    fn short_name_strips_module_path() {
        assert_eq!(short_type_name("a::b::Director"), "Director");
        assert_eq!(short_type_name("Director"), "Director");
        assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper");
    }

    #[test]
    fn default_node_name_is_type_name() {
        assert_eq!(GameDirector::node_name(), "GameDirector");
        assert!(GameDirector::type_name().ends_with("GameDirector"));
    }

    #[test]
    fn node_name_can_be_overridden() {
        assert_eq!(Named::node_name(), "custom");
    }
}
