#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal contact form with inline validation and a submission preview.

pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
