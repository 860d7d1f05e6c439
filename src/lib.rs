pub mod ai;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod history;
pub mod logging;
pub mod ui;
