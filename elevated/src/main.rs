use clap::Parser;

use arena_api::lineio::{LineIO, Trace};
use arena_elevated::config::{Config, StrategyKind};
use arena_elevated::dispatch::Session;
use arena_elevated::strategy::{CycleStrategy, RandomTravelStrategy};

#[derive(Parser, Debug)]
struct Args {
    /// TOML file with bot settings; flags below override it.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    #[arg(long)]
    verbose: bool,
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,
    #[arg(long)]
    timer_ms: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config: Config = match &args.config {
        Some(path) => arena_api::config::load(path)?,
        None => Config::default(),
    };
    config.verbose |= args.verbose;
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(timer_ms) = args.timer_ms {
        config.timer_ms = timer_ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    arena_api::logging::init(config.verbose);
    log::debug!("Starting with {config:?}");

    let mut io = LineIO::new(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        Trace {
            verbose: config.verbose,
        },
    );
    match config.strategy {
        StrategyKind::Cycle => Session::new(CycleStrategy, config.timer_ms).run(&mut io),
        StrategyKind::RandomTravel => {
            Session::new(RandomTravelStrategy::new(config.seed), config.timer_ms).run(&mut io)
        }
    }
}
