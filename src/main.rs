//! Gerstner ocean - headless surface simulator
//!
//! Builds the ocean tile once, then steps the wave field frame by frame the
//! way a renderer would, optionally dumping heightmaps along the way.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, error, info};

use gerstner_ocean::cli::Args;
use gerstner_ocean::error::Result;
use gerstner_ocean::heightmap::{self, Heightmap};
use gerstner_ocean::ocean::{Displacement, OceanSimulator};
use gerstner_ocean::rendering;

fn run(args: &Args) -> Result<()> {
    let config = args.surface_config()?;
    let dt = args.frame_dt_s()?;
    let preset = args.parse_preset();
    let export = args.create_export_config()?;

    let ocean = OceanSimulator::from_params(&config, &preset.waves())?;
    let (vertex_bytes, index_bytes) =
        rendering::mesh_bytes(ocean.grid().vertices(), ocean.grid().indices());
    info!(
        "Static upload: {} vertex bytes, {} index bytes",
        vertex_bytes.len(),
        index_bytes.len()
    );

    let mut displacements: Vec<Displacement> = Vec::new();
    let mut total = Duration::ZERO;
    let mut slowest = Duration::ZERO;
    let mut peak = 0.0f32;

    for frame in 0..args.frames {
        let time_s = frame as f32 * dt;

        let started = Instant::now();
        ocean.tick_into(time_s, &mut displacements);
        let elapsed = started.elapsed();
        total += elapsed;
        slowest = slowest.max(elapsed);

        let upload = rendering::displacement_bytes(ocean.grid().vertices(), &displacements)?;
        debug!(
            "frame {frame}: t={time_s:.3}s tick {:.3} ms, {} bytes",
            elapsed.as_secs_f64() * 1000.0,
            upload.len()
        );

        peak = peak.max(heightmap::peak_height(&displacements));

        if let Some(ref export) = export {
            if export.wants_frame(frame) {
                Heightmap::from_displacements(ocean.grid().resolution(), &displacements)?
                    .save_png(export.frame_path(frame))?;
            }
        }
    }

    if args.frames > 0 {
        info!(
            "Simulated {} frames of {} waves: mean tick {:.3} ms, slowest {:.3} ms, peak height {:.3} m",
            args.frames,
            ocean.field().len(),
            total.as_secs_f64() * 1000.0 / args.frames as f64,
            slowest.as_secs_f64() * 1000.0,
            peak
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Gerstner ocean - headless surface simulator");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
