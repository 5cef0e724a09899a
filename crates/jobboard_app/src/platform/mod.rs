//! Terminal front end for the job board.
mod app;
mod commands;
mod config;
mod effects;
mod form;
mod logging;
mod render;

pub use app::run_app;
