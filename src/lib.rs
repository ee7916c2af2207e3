//! Roster reformatting engine for retail store schedules.
//!
//! This crate ingests a staff roster workbook, reclassifies each cell's
//! free-text shift entry into a normalized shift code with computed work
//! hours, aggregates per-day staffing statistics, and re-emits a reformatted
//! roster sheet grouped by role priority with a statistics footer.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod models;
pub mod sheet;
