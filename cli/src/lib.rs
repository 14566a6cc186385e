//! Calorie Calculator CLI Library
//!
//! This library exposes the CLI modules for use in tests.

pub mod app;
pub mod config;
