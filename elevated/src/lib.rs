pub mod config;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod setup;
pub mod strategy;
pub mod successor;

pub type Floor = i64;
