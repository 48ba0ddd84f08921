pub mod cli;
pub mod config;
pub mod game;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod ui;
