//! Backdated commit generation for contribution graphs.
//!
//! A run walks every day of a date range, draws a random number of commits for it,
//! appends a note per commit to an activity file and commits that file through git
//! with a forged timestamp.

pub mod activity;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod git;
pub mod model;
pub mod orchestrator;
pub mod report;
