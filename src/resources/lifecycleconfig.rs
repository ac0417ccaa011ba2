//! Lifecycle configuration resource.
//!
//! Settings loaded from an INI configuration file. Missing keys keep their
//! defaults, so an absent or partial file is never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scenes]
//! initial = main
//!
//! [singletons]
//! persist_roots = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_INITIAL_SCENE: &str = "main";
const DEFAULT_PERSIST_ROOT_SINGLETONS: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./lifecycle.ini";

/// Lifecycle configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LifecycleConfig {
    /// Scene name reported before the first transition.
    pub initial_scene: String,
    /// Mark root-level singletons [`DontDestroyOnLoad`] on registration.
    ///
    /// [`DontDestroyOnLoad`]: crate::components::persistent::DontDestroyOnLoad
    pub persist_root_singletons: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            initial_scene: DEFAULT_INITIAL_SCENE.to_string(),
            persist_root_singletons: DEFAULT_PERSIST_ROOT_SINGLETONS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(initial) = config.get("scenes", "initial") {
            if !initial.is_empty() {
                self.initial_scene = initial;
            }
        }
        if let Some(persist) = config.getbool("singletons", "persist_roots").ok().flatten() {
            self.persist_root_singletons = persist;
        }

        info!(
            "Loaded config: initial scene '{}', persist root singletons={}",
            self.initial_scene, self.persist_root_singletons
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("scenes", "initial", Some(self.initial_scene.clone()));
        config.set(
            "singletons",
            "persist_roots",
            Some(self.persist_root_singletons.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "aberredlifecycle-{}-{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn defaults() {
        let config = LifecycleConfig::new();
        assert_eq!(config.initial_scene, "main");
        assert!(config.persist_root_singletons);
        assert_eq!(config.config_path, PathBuf::from("./lifecycle.ini"));
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = LifecycleConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config, LifecycleConfig::with_path(temp_path("missing")));
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let mut saved = LifecycleConfig::with_path(&path);
        saved.initial_scene = "title".into();
        saved.persist_root_singletons = false;
        saved.save_to_file().unwrap();

        let mut loaded = LifecycleConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[singletons]\npersist_roots = false\n").unwrap();

        let mut config = LifecycleConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.initial_scene, "main");
        assert!(!config.persist_root_singletons);
        std::fs::remove_file(path).ok();
    }
}
