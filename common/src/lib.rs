pub mod config;
pub mod games;
pub mod host;
pub mod logger;
