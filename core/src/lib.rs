//! gradesout-core — roster loading, name conversion, and grade report
//! rendering for the `gradesout` CLI.

pub mod api;
pub mod config;
pub mod distribute;
pub mod error;
pub mod name;
pub mod report;
pub mod roster;
