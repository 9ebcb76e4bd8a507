//! Leave Scheduling Engine.
//!
//! This crate selects which days of a year a person should take as paid leave
//! so that, for a fixed leave budget, the total number of consecutive days off
//! (leave + weekends + public holidays + company days) is maximized, subject
//! to minimum/maximum break lengths and a minimum spacing between breaks.
//! Any leftover budget is spent greedily by extending existing breaks or
//! creating new ones.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod report;
