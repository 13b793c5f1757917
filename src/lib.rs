//! Crew hours aggregation and reporting engine.
//!
//! This crate turns raw clock-in/clock-out time entries into per-employee,
//! per-job-site and per-pay-period hour totals, with the weekly overtime
//! split, and renders them as daily, weekly and monthly reports in JSON or
//! CSV. Pay periods run Monday to Saturday.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod service;
pub mod store;
