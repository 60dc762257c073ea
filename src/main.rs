//! Cloud Wizard headless driver - runs a scripted session and logs HUD stats.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Load a JSON simulation config
//!   --seed <SEED>     Random seed (default: entropy)
//!   --seconds <S>     Simulated seconds to run (default: 60)
//!   --clouds <N>      Clouds to release over wilted plants (default: 10)
//!   --dump-config     Print the default config as JSON and exit

use std::path::PathBuf;

use cloud_wizard::core::logging;
use cloud_wizard::core::types::Vec2;
use cloud_wizard::sim::{AudioCue, SimConfig, SimEvent, Simulation};

const TICK_RATE: u32 = 60;
/// Ticks the pointer is held while a cloud forms.
const HOLD_TICKS: u32 = 30;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--dump-config") {
        match SimConfig::default().to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match parse_str_arg(&args, "--config").map(PathBuf::from) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    let seconds = parse_f32_arg(&args, "--seconds").unwrap_or(60.0).max(0.0);
    let clouds = parse_u32_arg(&args, "--clouds").unwrap_or(10);

    let built = match parse_u64_arg(&args, "--seed") {
        Some(seed) => Simulation::seeded(config, seed),
        None => Simulation::new(config),
    };
    let mut sim = match built {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Cloud Wizard: running {:.0}s at {} Hz with {} scripted clouds", seconds, TICK_RATE, clouds);
    run_session(&mut sim, seconds, clouds);

    let hud = sim.hud();
    log::info!(
        "Session finished: {} of {} plants revived, {} magic left, day phase {:.3}",
        hud.plants_revived,
        sim.plants().len(),
        hud.magic_power,
        sim.day_night().phase()
    );
}

/// Release clouds evenly over the session, each above a wilted plant.
fn run_session(sim: &mut Simulation, seconds: f32, clouds: u32) {
    let dt = 1.0 / TICK_RATE as f32;
    let total_ticks = (seconds * TICK_RATE as f32).round() as u32;
    let interval = if clouds == 0 { u32::MAX } else { (total_ticks / clouds).max(HOLD_TICKS + 1) };
    let mut released = 0;
    let mut hold = 0;

    for tick in 0..total_ticks {
        if hold > 0 {
            hold -= 1;
            if hold == 0 {
                sim.pointer_up();
            }
        } else if released < clouds && tick % interval == 0 {
            if let Some(target) = next_wilted(sim) {
                match sim.begin_cloud_at(target) {
                    Ok(_) => hold = HOLD_TICKS,
                    Err(e) => log::warn!("{}", e),
                }
                released += 1;
            }
        }

        sim.tick(dt);

        for event in sim.drain_events() {
            match event {
                SimEvent::PlantRevived { plant, total_revived } => {
                    log::debug!("Plant {:?} revived, {} total", plant, total_revived)
                }
                SimEvent::Audio(AudioCue::AmbientVolumes { .. }) => {}
                other => log::trace!("{:?}", other),
            }
        }

        if (tick + 1) % (TICK_RATE * 10) == 0 {
            let hud = sim.hud();
            log::info!(
                "t={:>5.1}s magic={} revived={} clouds={}",
                sim.elapsed(),
                hud.magic_power,
                hud.plants_revived,
                sim.clouds().len()
            );
        }
    }
}

/// Ground position of the first plant no cloud is already raining on.
fn next_wilted(sim: &Simulation) -> Option<Vec2> {
    sim.plants()
        .iter()
        .filter(|p| !p.is_revived() && p.revived_progress() == 0.0)
        .find(|p| !sim.clouds().iter().any(|c| c.target() == Some(p.id())))
        .map(|p| p.position())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    parse_str_arg(args, flag).and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    parse_str_arg(args, flag).and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    parse_str_arg(args, flag).and_then(|s| s.parse().ok())
}
