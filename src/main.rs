//! Headless sprite animation player.
//!
//! Loads clip definitions from a JSON file and playback settings from an INI
//! file, spawns one animated entity in a `bevy_ecs` world and runs the
//! animator system for a fixed number of frames, printing the displayed frame
//! of every tick.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and the clip file
//! 2. Spawn an entity with an [`Animator`] holding every clip and a [`Sprite`]
//! 3. Each tick:
//!    - apply switches scheduled with `--at`
//!    - advance [`WorldTime`] and run [`animator_system`]
//!    - print clip, frame index, sprite rect and flips
//!
//! # Running
//!
//! ```sh
//! cargo run -- --config assets/config.ini --play walk --at 12=hit --at 20=walk
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;

use spriteanimator::components::animator::Animator;
use spriteanimator::components::sprite::Sprite;
use spriteanimator::events::animation::{
    AnimationEndedEvent, SwitchAnimationEvent, switch_animation_observer,
};
use spriteanimator::resources::animationstore::AnimationStore;
use spriteanimator::resources::animconfig::{self, AnimatorConfig};
use spriteanimator::resources::worldtime::WorldTime;
use spriteanimator::systems::animation::animator_system;
use spriteanimator::systems::time::update_world_time;

/// Sprite-sheet animation player
#[derive(Parser)]
#[command(version, about = "Plays sprite-sheet clips headlessly and prints every frame.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON clip file. Overrides `[assets] clips` from the config.
    #[arg(long, value_name = "PATH")]
    clips: Option<PathBuf>,

    /// Animation to start with.
    #[arg(long, value_name = "NAME")]
    play: Option<String>,

    /// Request a switch before the given tick, e.g. `--at 12=hit`. Repeatable.
    #[arg(long = "at", value_name = "TICK=NAME", value_parser = parse_switch)]
    switches: Vec<(u32, String)>,

    /// Number of ticks to simulate. Overrides the config.
    #[arg(long)]
    ticks: Option<u32>,

    /// Frame delta in seconds. Must be positive. Overrides the config.
    #[arg(long, value_parser = parse_dt)]
    dt: Option<f32>,

    /// List the registered animation ids and exit.
    #[arg(long)]
    list: bool,
}

fn parse_switch(s: &str) -> Result<(u32, String), String> {
    let (tick, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TICK=NAME, got '{}'", s))?;
    let tick = tick
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid tick '{}': {}", tick, e))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("animation name cannot be empty".to_string());
    }
    Ok((tick, name.to_string()))
}

fn parse_dt(s: &str) -> Result<f32, String> {
    let dt = s
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid dt '{}': {}", s, e))?;
    animconfig::positive("dt", dt).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AnimatorConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }
    if let Some(clips) = cli.clips {
        config.clips_path = clips;
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }

    let store = match AnimationStore::load_from_file(&config.clips_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading {}: {e}", config.clips_path.display());
            std::process::exit(1);
        }
    };

    let mut animator = store.animator_with_all();

    if cli.list {
        let mut ids = animator.all_animation_ids();
        ids.sort_by_key(|id| id.id);
        for id in ids {
            println!("{:>4}  {}", id.id, id.name);
        }
        return;
    }

    if let Some(name) = &cli.play {
        if !animator.request_switch_by_name(name) {
            eprintln!("Error: animation '{}' is not registered", name);
            std::process::exit(1);
        }
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.add_observer(switch_animation_observer);

    let ended: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let ended_clone = Arc::clone(&ended);
    world.add_observer(move |trigger: On<AnimationEndedEvent>| {
        log::info!("Animation '{}' ended", trigger.event().name);
        if let Ok(mut names) = ended_clone.lock() {
            names.push(trigger.event().name.clone());
        }
    });

    let entity = world.spawn((animator, Sprite::default())).id();

    let mut schedule = Schedule::default();
    schedule.add_systems(animator_system);

    println!("tick  animation         frame  tex_key           x       y  flip");
    for tick in 0..config.ticks {
        for (_, name) in cli.switches.iter().filter(|(at, _)| *at == tick) {
            world.trigger(SwitchAnimationEvent::new(entity, name.as_str()));
        }

        update_world_time(&mut world, config.dt);
        schedule.run(&mut world);

        let animator = world.get::<Animator>(entity);
        let sprite = world.get::<Sprite>(entity);
        if let (Some(animator), Some(sprite)) = (animator, sprite) {
            println!(
                "{:>4}  {:<16}  {:>5}  {:<16}  {:>6.1}  {:>6.1}  {}{}",
                tick,
                animator.current_animation_name().unwrap_or("-"),
                animator.current_frame_index(),
                sprite.tex_key,
                sprite.offset_x,
                sprite.offset_y,
                if sprite.flip_h { "H" } else { "." },
                if sprite.flip_v { "V" } else { "." },
            );
        }
    }

    if let Ok(names) = ended.lock() {
        log::info!("{} end-of-animation events fired", names.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("12=hit").unwrap(), (12, "hit".to_string()));
        assert!(parse_switch("hit").is_err());
        assert!(parse_switch("3= ").is_err());
    }

    #[test]
    fn test_dt_flag_must_be_positive() {
        assert_eq!(parse_dt("0.25").unwrap(), 0.25);
        assert!(parse_dt("0").is_err());
        assert!(parse_dt("-0.1").is_err());
        assert!(parse_dt("inf").is_err());
        assert!(parse_dt("fast").is_err());
    }

    #[test]
    fn test_cli_rejects_negative_dt() {
        assert!(Cli::try_parse_from(["spriteanimator", "--dt", "-1"]).is_err());
        let cli = Cli::try_parse_from(["spriteanimator", "--dt", "0.5"]).unwrap();
        assert_eq!(cli.dt, Some(0.5));
    }
}
