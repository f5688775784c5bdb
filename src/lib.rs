//! agenda - A plain-text task tracker
//!
//! Tasks are stored one per line as
//! `[DDMMYYYY] [HHMM] [(X)] description [@context] [+project]`.
//! This crate provides the line parser, the display ranking, the line
//! stores and the command-line interface built on them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use crate::core::{parse_line, rank, Task};
pub use error::AgendaError;
