// ABOUTME: Library exports for bz-replace modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests and benchmarks

pub mod cli;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod output;
pub mod replace;
pub mod runner;
pub mod types;
