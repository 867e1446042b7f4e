pub mod config;
pub mod lineio;
pub mod logging;
pub mod textapi;
