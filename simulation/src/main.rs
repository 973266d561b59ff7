//! Life Runner
//!
//! Headless front end for the engine: seeds or loads a grid, advances it and
//! prints the grid every time the engine reports a change.

use std::cell::Cell;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulation::config::LifeConfig;
use simulation::{GridState, SimulationEngine};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let config = LifeConfig::parse();

    // Logs go to stderr so stdout only carries the grid
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;
    Ok(())
}

/// What a run did, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    redraws: u32,
    generation: u64,
}

/// Set up the grid from `config`, then advance it, redrawing into `out`
/// each time the engine reports a change. Stops early once stable.
fn run<W: Write>(config: &LifeConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let mut engine = SimulationEngine::with_observer(config.size, move || flag.set(true))?;

    if let Some(path) = &config.snapshot {
        let result = engine
            .load_from_file(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?;
        info!(population = result.population, generation = result.generation, "snapshot loaded");
    } else if let Some(path) = &config.pattern {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading pattern {}", path.display()))?;
        let pattern: GridState = text.parse()?;
        engine.place_pattern(&pattern, 0, 0)?;
        info!(population = engine.population(), "pattern placed");
    } else {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population = engine.seed_random(&mut rng, config.density)?;
        info!(size = config.size, population, "grid seeded");
    }
    let mut redraws = u32::from(redraw(&engine, &dirty, out)?);

    for _ in 0..config.generations {
        let result = engine.advance_generation();
        if !result.changed {
            info!(generation = result.generation, "population is stable");
            break;
        }
        redraws += u32::from(redraw(&engine, &dirty, out)?);
    }

    info!(
        generation = engine.generation(),
        population = engine.population(),
        "run complete"
    );

    if let Some(path) = &config.export {
        let stats = engine
            .save_to_file(path)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        info!(bytes = stats.file_bytes, "snapshot written to {}", path.display());
    }

    Ok(RunSummary {
        redraws,
        generation: engine.generation(),
    })
}

/// Print the grid if the engine reported a change since the last redraw.
fn redraw<W: Write>(engine: &SimulationEngine, dirty: &Cell<bool>, out: &mut W) -> io::Result<bool> {
    if !dirty.replace(false) {
        return Ok(false);
    }
    writeln!(out, "generation {}", engine.generation())?;
    writeln!(out, "{}\n", engine.grid())?;
    Ok(true)
}
