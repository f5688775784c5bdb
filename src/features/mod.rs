//! Feature implementations for agenda.
//!
//! This module contains features built on top of the task stores:
//! - Completion chart

pub mod chart;
