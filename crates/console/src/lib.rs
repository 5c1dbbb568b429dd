//! `stockroom-console` — a line-oriented front end over one in-memory store.

pub mod command;
pub mod config;
pub mod shell;

pub use command::{Command, ParseError, parse};
pub use config::AppConfig;
pub use shell::{Flow, Shell};
