//! office — six-office floor rescue demo.
//!
//! Loads the floor (the embedded `building.json`, or the path given as the
//! first argument), prints the graph and its distance matrix, then runs:
//!
//! 1. a hand-driven walkthrough with one firefighter,
//! 2. the single-agent sweep from `EXIT_R`,
//! 3. the two-agent greedy dispatch, writing its event log to CSV.
//!
//! Set `RUST_LOG=debug` to see every scheduler step.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rescue_agent::{Firefighter, Outcome, World};
use rescue_building::{BuildingGraph, load_building_json, load_building_reader};
use rescue_core::{AgentId, RescueConfig};
use rescue_output::{CsvWriter, DistanceMatrix, GraphSummary, RescueOutputObserver};
use rescue_sim::{NoopObserver, RescueBuilder, RunSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_JSON:           &str = include_str!("../building.json");
const WALKTHROUGH_VELOCITY: u32  = 3;
const BASE_VELOCITY:        u32  = 5;
const DISPATCH_AGENTS:      usize = 2;
const OUTPUT_DIR:           &str = "output/office";

// ── Walkthrough ───────────────────────────────────────────────────────────────

fn show(what: &str, outcome: &Outcome) {
    println!("{what}");
    println!("  time: {}", outcome.ticks);
    println!("  path: {}", outcome.path.join(" -> "));
}

/// One firefighter driven step by step, exercising every operation.
fn walkthrough(world: &mut World) {
    let mut ff = Firefighter::new(AgentId(0), WALKTHROUGH_VELOCITY);
    ff.place(world, "EXIT_R");

    for room in ["TR", "TM", "BM"] {
        let outcome = ff.explore_room(world, room);
        show(&format!("Explore room {room}"), &outcome);
    }

    ff.place(world, "EXIT_L");
    let outcome = ff.rescue_room_to_location(world, "TM", "H_M");
    show("Rescue room TM to H_M", &outcome);

    let outcome = ff.move_to(world, "EXIT_R");
    show("Move to EXIT_R", &outcome);

    ff.place(world, "EXIT_R");
    let outcome = ff.rescue_room_to_nearest_exit(world, "BM");
    show("Rescue room BM to nearest exit", &outcome);

    ff.unload(world);
    println!("Delivered {} occupants", ff.delivered());
}

fn print_summary(summary: &RunSummary) {
    println!("{:<8} {:<8} {:>8} {:>9} {:>8} {:>10}", "Agent", "Start", "Finish", "Explored", "Rescued", "Delivered");
    println!("{}", "-".repeat(56));
    for a in &summary.agents {
        println!(
            "{:<8} {:<8} {:>8} {:>9} {:>8} {:>10}",
            a.agent.0, a.start, a.finish.0, a.explored, a.rescued, a.delivered
        );
    }
    if !summary.is_complete() {
        println!("Unresolved rooms: {}", summary.unresolved.join(", "));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Load the floor.
    let graph: BuildingGraph = match std::env::args().nth(1) {
        Some(path) => load_building_json(path)?,
        None => load_building_reader(Cursor::new(FLOOR_JSON))?,
    };
    println!("=== office — building rescue ===");
    print!("{}", GraphSummary(&graph));
    println!();

    let mut world = World::new(graph.clone());
    println!("Distance matrix:");
    print!("{}", DistanceMatrix(&world.oracle));
    println!();

    // 2. Walkthrough.
    println!("--- Walkthrough (velocity {WALKTHROUGH_VELOCITY}) ---");
    walkthrough(&mut world);
    println!();

    // 3. Single-agent sweep.
    println!("--- Rescue building with 1 firefighter ---");
    let config = RescueConfig::new(1, BASE_VELOCITY).with_start_labels(["EXIT_R"]);
    let mut rescue = RescueBuilder::new(config, World::new(graph.clone())).build()?;
    let summary = rescue.sweep(&mut NoopObserver);
    println!("Total time with 1 firefighter: {}", summary.total.0);
    print_summary(&summary);
    println!();

    // 4. Two-agent dispatch with CSV output.
    println!("--- Rescue building with {DISPATCH_AGENTS} firefighters ---");
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = RescueOutputObserver::new(writer);

    let config = RescueConfig::new(DISPATCH_AGENTS, BASE_VELOCITY);
    let mut rescue = RescueBuilder::new(config, World::new(graph)).build()?;
    let t0 = Instant::now();
    let summary = rescue.dispatch(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!(
        "Total time with {DISPATCH_AGENTS} firefighters: {} (computed in {:.3} ms)",
        summary.total.0,
        elapsed.as_secs_f64() * 1e3
    );
    print_summary(&summary);
    println!("Event log written to {OUTPUT_DIR}/rescue_events.csv");

    Ok(())
}
