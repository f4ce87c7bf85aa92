//! # mapgen
//!
//! Generate a cave and print it as ASCII.
//!
//! ```text
//! mapgen [CONFIG.toml] [SEED] [--outline]
//! ```
//!
//! With no config the reference tuning is used; with no seed a random one
//! is drawn and reported so the run can be reproduced.

use std::error::Error;
use std::process::ExitCode;

use hollow::AsciiCanvas;
use hollow_procedural::{CaveConfig, CaveGenerator, SeedMode};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mapgen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut config = CaveConfig::default();
    let mut seed_mode = SeedMode::Random;
    let mut show_outline = false;

    for arg in std::env::args().skip(1) {
        if arg == "--outline" {
            show_outline = true;
        } else if let Ok(seed) = arg.parse::<i64>() {
            seed_mode = SeedMode::Fixed(seed);
        } else {
            let text = std::fs::read_to_string(&arg)?;
            config = toml::from_str(&text)?;
        }
    }

    let generator = CaveGenerator::new(config)?;
    let world = generator.generate(seed_mode);

    let mut canvas = AsciiCanvas::new(
        generator.config().width,
        generator.config().height,
    );
    world.paint_open_cells(&mut canvas);
    if show_outline {
        canvas.overlay(world.outline_mask(), '+');
    }

    print!("{}", canvas.render());

    let total = world.cave_mask().cells().len();
    let open = world.cave_mask().count(|open| open);
    println!();
    println!("seed: {}", world.seed().value());
    println!(
        "open: {open}/{total} cells ({:.1}%)",
        open as f64 / total as f64 * 100.0
    );
    println!(
        "ore:  {} cells, outlined: {}",
        world.biome_map().count(|b| b == hollow_procedural::BIOME_ORE),
        world.outline_mask().count(|edge| edge)
    );

    Ok(())
}
