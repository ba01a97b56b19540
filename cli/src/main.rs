use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use treasure_hunt_core::{Game, RandomOpponent};

mod console;

#[derive(Parser, Debug)]
#[command(version, about = "Hide five treasure chests and race the AI to dig up theirs", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for the AI instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show where the AI hid its chests
    #[arg(long)]
    reveal_ai: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = Game::new();
    let mut opponent = RandomOpponent::new(seed);
    let winner = console::Console::new(io::stdin().lock(), io::stdout().lock())
        .reveal_ai(args.reveal_ai)
        .run(&mut game, &mut opponent)?;
    log::info!("{:?} won with seed {}", winner, seed);

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("final state: {}", serde_json::to_string(&game)?);
    }
    Ok(())
}
