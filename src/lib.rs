pub mod app;
pub mod cli;
pub mod config;
pub mod output;
pub mod runner;
pub mod util;
