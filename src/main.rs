//! Air Balloon headless runner
//!
//! Drives a full session without a window: ticks the simulation, draws every
//! frame into a recording surface and prints a JSON summary at the end.
//! Useful for replaying seeds and checking tuning files.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use air_balloon::Tuning;
    use air_balloon::renderer::{ImageHandle, RecordingSurface};
    use air_balloon::sim::{GameImages, GamePhase, GameState, TickInput, tick};

    #[derive(Parser)]
    #[command(name = "air-balloon")]
    #[command(about = "Run a headless Air Balloon session and print a summary")]
    struct Args {
        /// RNG seed for coin and bomb spawns
        #[arg(short, long, default_value_t = 1)]
        seed: u64,

        /// Number of ticks to simulate
        #[arg(short, long, default_value_t = 3000)]
        ticks: u64,

        /// Tuning JSON file (defaults are used when omitted)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Fire the burner every N ticks (0 = never)
        #[arg(short, long, default_value_t = 25)]
        burn_every: u64,
    }

    /// Natural sizes of the stock art
    fn stock_images() -> GameImages {
        GameImages {
            background: ImageHandle::new(0, 1200.0, 720.0),
            balloon: ImageHandle::new(1, 400.0, 560.0),
            coin: ImageHandle::new(2, 1000.0, 100.0),
            bomb: ImageHandle::new(3, 480.0, 120.0),
        }
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };

        let mut state = GameState::new(args.seed, stock_images(), tuning);
        let mut surface = RecordingSurface::new();
        let mut blits = 0usize;

        for t in 0..args.ticks {
            let input = TickInput {
                burner: args.burn_every > 0 && t % args.burn_every == 0,
            };
            tick(&mut state, &input);

            surface.clear();
            state.draw(&mut surface);
            blits += surface.blit_count();

            if state.phase == GamePhase::GameOver {
                break;
            }
        }

        log::info!(
            "Finished after {} ticks ({} blits drawn)",
            state.time_ticks,
            blits
        );
        let summary = serde_json::to_string_pretty(&state.snapshot())
            .context("serializing session summary")?;
        println!("{summary}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Air Balloon (headless) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `sim::tick` from their own frame callback
}
