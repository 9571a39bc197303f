//! random_walk: headless driver for the rust_lcm engine.
//!
//! Loads a JSON scenario (or uses the built-in one), starts the scheduler
//! from a separate input thread through the command queue, ticks until the
//! tick budget runs out or the run reaches a terminal state, and writes the
//! trajectory to CSV.
//!
//! ```text
//! RUST_LOG=info cargo run --release -p random_walk -- scenario.json
//! ```

mod scenario;

use std::path::Path;
use std::thread;
use std::time::Instant;

use anyhow::{Result, anyhow};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lcm_core::SimRng;
use lcm_output::{CsvWriter, TrajectoryObserver};
use lcm_sim::{AllOnLandmarks, Completion, RoundState, Scheduler, SchedulerBuilder};

use scenario::Scenario;

/// Offset separating the scatter stream from the agents' own RNG streams.
const SCATTER_STREAM: u64 = 0x5CA7;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::from_path(Path::new(&path))?,
        None => Scenario::default(),
    };

    println!("=== random_walk (rust_lcm) ===");
    println!(
        "Agents: {}  |  Landmarks: {}  |  Ticks: {}  |  Seed: {}",
        scenario.agents.len(),
        scenario.landmarks.len(),
        scenario.ticks,
        scenario.config.seed,
    );
    println!();

    let mut rng = SimRng::new(scenario.config.seed).child(SCATTER_STREAM);
    let builder = SchedulerBuilder::new(scenario.config.clone(), scenario.policies()?)
        .orientations(scenario.orientations())
        .initial_positions(scenario.initial_positions(&mut rng)?)
        .landmarks(scenario.landmarks.clone());

    if scenario.stop_on_landmarks {
        run(builder.completion(AllOnLandmarks).build()?, &scenario)
    } else {
        run(builder.build()?, &scenario)
    }
}

fn run<C: Completion>(mut sched: Scheduler<C>, scenario: &Scenario) -> Result<()> {
    if sched.state() == RoundState::Error {
        warn!("starting configuration collides; nothing to run");
    }

    let writer = CsvWriter::new(&scenario.output_dir)?;
    let mut obs = TrajectoryObserver::new(writer);
    obs.record_initial(&sched);

    // Input thread: the start command goes through the queue and is applied
    // at the beginning of the first tick.
    let sender = sched.command_sender();
    thread::spawn(move || sender.start())
        .join()
        .map_err(|_| anyhow!("input thread panicked"))??;

    let t0 = Instant::now();
    let calls = sched.run_until_terminal(scenario.ticks, &mut obs);
    let elapsed = t0.elapsed();
    obs.finish()?;

    info!(calls, state = %sched.state(), round = sched.current_round(), "run finished");

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  state     : {}", sched.state());
    println!("  rounds    : {}", sched.current_round());
    println!("  ticks     : {}", sched.tick());
    match sched.last_collision() {
        Some(points) => {
            let list: Vec<String> = points.iter().map(ToString::to_string).collect();
            println!("  collision : {}", list.join(" "));
        }
        None => println!("  collision : none"),
    }
    println!(
        "  {} : {} rows, collisions.csv : {} rows",
        scenario.output_dir.join("positions.csv").display(),
        obs.positions_written(),
        obs.collisions_written(),
    );
    println!();

    println!("{:<6} {:<10} {:<12} {:<12}", "Agent", "Frame", "Local", "Global");
    println!("{}", "-".repeat(42));
    let locals = sched.local_positions();
    let globals = sched.global_positions();
    for (i, (local, global)) in locals.iter().zip(&globals).enumerate() {
        let frame = sched
            .orientation(lcm_core::AgentId(i as u32))
            .map(|o| o.to_string())
            .unwrap_or_default();
        println!("{:<6} {:<10} {:<12} {:<12}", i, frame, local.to_string(), global.to_string());
    }

    Ok(())
}
