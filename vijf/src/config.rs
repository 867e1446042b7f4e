use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub seed: Option<u64>,
}
