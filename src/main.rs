//! Aberred lifecycle demo entry point.
//!
//! Runs a headless world through a few scene transitions and logs what
//! survives each one:
//!
//! - a [`GameDirector`] singleton created lazily on first access
//! - a duplicate director spawned on purpose, which gets despawned
//! - per-scene entities spawned by each scene's enter system
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --transitions 3
//! ```

use aberredlifecycle::components::persistent::DontDestroyOnLoad;
use aberredlifecycle::components::singleton::Singleton;
use aberredlifecycle::resources::lifecycleconfig::LifecycleConfig;
use aberredlifecycle::resources::scene::{CurrentScene, NextScene};
use aberredlifecycle::resources::systemsstore::register_named_system;
use aberredlifecycle::setup::setup_lifecycle;
use aberredlifecycle::systems::scene::{check_pending_scene, scene_of};
use aberredlifecycle::systems::singleton::{singleton_instance, with_singleton};
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

const SCENES: [&str; 2] = ["menu", "level"];

/// Aberred lifecycle demo
#[derive(Parser)]
#[command(version, about = "Headless demo of persistent entities and singletons across scene loads")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of scene transitions to run.
    #[arg(long, default_value_t = 3)]
    transitions: u32,
}

/// Game-wide state that outlives every scene.
#[derive(Component, Debug, Default)]
struct GameDirector {
    scenes_seen: u32,
}

impl Singleton for GameDirector {}

fn spawn_scene_content(mut commands: Commands, scene: Res<CurrentScene>) {
    let root = commands
        .spawn(Name::new(format!("{}-root", scene.name())))
        .id();
    commands.spawn((Name::new(format!("{}-child", scene.name())), ChildOf(root)));
}

fn log_world(world: &mut World) {
    let mut names = world.query::<(Entity, &Name)>();
    let entries: Vec<(Entity, String)> = names
        .iter(world)
        .map(|(entity, name)| (entity, name.as_str().to_string()))
        .collect();
    for (entity, name) in entries {
        let scene = scene_of(world, entity).unwrap_or_default();
        log::info!("  {:?} '{}' in scene '{}'", entity, name, scene);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => LifecycleConfig::with_path(path),
        None => LifecycleConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let mut world = World::new();
    setup_lifecycle(&mut world, config);
    for scene in SCENES {
        register_named_system(&mut world, scene, spawn_scene_content);
    }
    world.spawn((Name::new("hud"), DontDestroyOnLoad));
    world.flush();

    let director = singleton_instance::<GameDirector>(&mut world);
    log::info!("GameDirector lives on {:?}", director);

    let duplicate = world.spawn(GameDirector::default()).id();
    world.flush();
    log::info!(
        "Duplicate {:?} alive after attach: {}",
        duplicate,
        world.get_entity(duplicate).is_ok()
    );

    let mut update = Schedule::default();
    update.add_systems(check_pending_scene);

    for i in 0..cli.transitions {
        let next = SCENES[i as usize % SCENES.len()];
        world.resource_mut::<NextScene>().set(next);
        update.run(&mut world);

        let scene = world.resource::<CurrentScene>().name().to_string();
        match with_singleton::<GameDirector, _>(&mut world, |d| {
            d.scenes_seen += 1;
            d.scenes_seen
        }) {
            Some(seen) => log::info!(
                "Scene '{}' loaded, director has seen {} scene(s)",
                scene,
                seen
            ),
            None => log::warn!("Scene '{}' loaded, director was despawned", scene),
        }
        log_world(&mut world);
    }

    let survivor = singleton_instance::<GameDirector>(&mut world);
    log::info!(
        "Director after {} transition(s): {:?} (same entity: {})",
        cli.transitions,
        survivor,
        survivor == director
    );
}
