use clap::Parser;

use arena_api::lineio::{LineIO, Trace};
use arena_vijf::config::Config;
use arena_vijf::player::Player;
use arena_vijf::strategy::{Picker, StrategyKind};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    #[arg(long)]
    verbose: bool,
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,
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
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    arena_api::logging::init(config.verbose);

    let mut io = LineIO::new(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        Trace {
            verbose: config.verbose,
        },
    );
    Player::new(Picker::new(config.strategy, config.seed)).run(&mut io)
}
