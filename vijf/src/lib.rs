pub mod cards;
pub mod config;
pub mod error;
pub mod player;
pub mod strategy;
pub mod turn;
