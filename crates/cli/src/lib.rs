pub mod cli;
pub mod commands;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod server;
