use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Cycle,
    RandomTravel,
}

fn default_timer_ms() -> u64 {
    100
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    // Echo every wire line to stderr.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default = "default_timer_ms")]
    pub timer_ms: u64,
    // Only used by the random-travel strategy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            strategy: StrategyKind::default(),
            timer_ms: default_timer_ms(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let f = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let cfg: Config = arena_api::config::load(f.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.timer_ms, 100);
    }

    #[test]
    fn reads_strategy_and_seed() {
        let mut f = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(f, "strategy = \"random-travel\"\nseed = 5\ntimer_ms = 40").unwrap();
        let cfg: Config = arena_api::config::load(f.path()).unwrap();
        assert_eq!(cfg.strategy, StrategyKind::RandomTravel);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.timer_ms, 40);
        assert!(!cfg.verbose);
    }
}
