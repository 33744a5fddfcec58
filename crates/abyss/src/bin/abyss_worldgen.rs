//! # ABYSS World Generator
//!
//! Headless generation run: builds a seabed, prints what ended up in it and
//! times a few frames of the dive.
//!
//! ## Usage
//!
//! ```bash
//! abyss_worldgen [config.toml] [--frames N] [--seed S]
//! ```
//!
//! Set `RUST_LOG=debug` for per-pass generation logs.

use std::process::ExitCode;
use std::time::Instant;

use abyss::procedural::BlockType;
use abyss::{Dive, GameConfig};

const DEFAULT_FRAMES: u32 = 60;
const FRAME_DT: f32 = 1.0 / 60.0;

struct Args {
    config: Option<String>,
    frames: u32,
    seed: Option<u64>,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut parsed = Args {
        config: None,
        frames: DEFAULT_FRAMES,
        seed: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" | "-f" => {
                if let Some(value) = args.get(i + 1) {
                    parsed.frames = value.parse().unwrap_or(DEFAULT_FRAMES);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if let Some(value) = args.get(i + 1) {
                    parsed.seed = value.parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: abyss_worldgen [CONFIG] [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --frames <N>    Frames to build (default: {DEFAULT_FRAMES})");
                println!("  -s, --seed <SEED>   Override the world seed");
                println!("  -h, --help          Show this help");
                return None;
            }
            path => parsed.config = Some(path.to_string()),
        }
        i += 1;
    }
    Some(parsed)
}

fn main() -> ExitCode {
    env_logger::init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         ABYSS WORLD GENERATOR                                    ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let Some(args) = parse_args() else {
        return ExitCode::SUCCESS;
    };

    let mut config = match args.config.as_deref() {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let start = Instant::now();
    let mut dive = Dive::new(&config);
    let gen_ms = start.elapsed().as_secs_f64() * 1000.0;

    let world = dive.world();
    let report = world.report();

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  WORLD");
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Seed:         {}", world.seed().value());
    println!("  Map:          {0} x {0}, max height {1}", world.map_size(), world.max_height());
    println!("  Generated in: {gen_ms:.2} ms");
    println!("  Voxels:       {}", world.voxels().len());
    for block in BlockType::ALL {
        let count = world.voxels().count_of(block);
        if count > 0 {
            println!("    {:<12} {count}", format!("{block:?}"));
        }
    }
    println!();
    println!(
        "  Seaweed:      {} ({} in the dense patch)",
        world.seaweeds().len(),
        report.patch_seaweeds
    );
    println!("  Coral blades: {}", world.coral_rects().len());
    match world.reef_region() {
        Some(reef) => println!(
            "  Reef:         {}x{} at ({}, {})",
            reef.width, reef.depth, reef.x0, reef.z0
        ),
        None => println!("  Reef:         none"),
    }
    println!(
        "  Caves:        {} columns, {} blocks removed",
        report.carved_columns, report.carved_blocks
    );
    let [sx, sy, sz] = world.spawn_position();
    println!(
        "  Spawn:        ({sx:.1}, {sy:.1}, {sz:.1}){}",
        if report.spawn_fallback { " [fallback]" } else { "" }
    );
    println!();

    if args.frames == 0 {
        return ExitCode::SUCCESS;
    }

    let mut visible = 0u64;
    let mut culled = 0u64;
    let mut build_ms = 0.0f64;
    for _ in 0..args.frames {
        let frame = dive.tick(FRAME_DT);
        visible += u64::from(frame.stats.visible_voxels);
        culled += u64::from(frame.stats.culled_voxels);
        build_ms += f64::from(frame.stats.build_time_ms);
    }
    let frames = f64::from(args.frames);

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  FRAMES ({})", args.frames);
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Avg visible voxels: {:.0}", visible as f64 / frames);
    println!("  Avg culled voxels:  {:.0}", culled as f64 / frames);
    println!("  Avg build time:     {:.3} ms", build_ms / frames);
    println!("  Bubbles alive:      {}", dive.bubbles().len());
    println!("  Minimap:            {:?} px", dive.minimap().pixel_size());

    ExitCode::SUCCESS
}
