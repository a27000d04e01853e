use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hatfield_core::{DEFAULT_MAX_ATTEMPTS, GameConfig, PlayEngine, generate_valid_field};

mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Find your hat without falling in a hole", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of rows in the field
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
    rows: u8,

    /// Number of columns in the field
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
    columns: u8,

    /// Percent chance for each cell to hold a hole
    #[arg(short = 'H', long, default_value_t = GameConfig::DEFAULT_HAZARD_CHANCE)]
    hazard_chance: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many unsolvable fields
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new((args.rows, args.columns), args.hazard_chance);
    let field = generate_valid_field(config, seed, args.max_attempts).with_context(|| {
        format!(
            "could not build a {}x{} field at {}% holes from seed {}",
            config.size.0, config.size.1, config.hazard_chance, seed
        )
    })?;

    let mut engine = PlayEngine::new(field);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut engine, stdin.lock(), stdout.lock()).context("terminal I/O failed")?;
    Ok(())
}

fn clock_seed() -> u64 {
    use web_time::SystemTime;

    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
