#![deny(clippy::all, clippy::pedantic)]
//! # Machine Runtime
//!
//! Headless driver for the machine simulation. Seeks the chosen
//! machine through a frame range while logging progress, scrubs
//! backward and re-seeks to verify the replay lands on the same state,
//! then records one frame of draw output into a display list.

use anyhow::{ensure, Context, Result};
use canvas::DisplayList;
use clap::Parser;
use machine::MachineSystem;

#[derive(Parser)]
#[command(about = "Run a machine deterministically across a frame range")]
struct Args {
    /// Machine number to load.
    #[arg(long, default_value_t = 1)]
    machine: i32,

    /// Frame to run to.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Frames of machine time per second.
    #[arg(long, default_value_t = 30.0)]
    rate: f32,

    /// Log progress every this many frames.
    #[arg(long, default_value_t = 30)]
    report_every: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut system = MachineSystem::new();
    system.set_frame_rate(args.rate);
    system.set_machine_number(args.machine);
    ensure!(
        system.machine().is_some(),
        "no machine numbered {}",
        args.machine
    );

    let report_every = args.report_every.max(1);
    let mut frame = 0;
    while frame < args.frames {
        frame = (frame + report_every).min(args.frames);
        system.seek_to_frame(frame);
        let machine = system.machine().context("machine went away mid-run")?;
        tracing::info!(
            frame,
            time = system.machine_time(),
            score = machine.total_score(),
            bodies = machine.world().body_count(),
            "advanced"
        );
    }

    let first_run = system
        .machine()
        .context("machine went away mid-run")?
        .snapshot();

    // Scrub halfway back and seek forward again; the replay has to
    // land on the exact same state.
    system.seek_to_frame(args.frames / 2);
    system.seek_to_frame(args.frames);
    let replayed = system
        .machine()
        .context("machine went away mid-run")?
        .snapshot();
    ensure!(
        replayed == first_run,
        "replay diverged from the first run at frame {}",
        args.frames
    );
    tracing::info!(frame = args.frames, "replay matched the first run");

    // Named to avoid shadowing by `tracing::field::display` inside the
    // `tracing::info!` expansion below.
    let mut display_list = DisplayList::new();
    system.draw(&mut display_list);
    ensure!(
        display_list.is_balanced(),
        "draw output left unbalanced state pushes"
    );
    tracing::info!(ops = display_list.ops().len(), "recorded one frame of draw output");

    Ok(())
}
