//! `ledger-balance` command-line front-end.

pub mod app;
pub mod config;

pub use app::{load_ledger, run};
pub use config::Cli;
