//! Verso - travel inspiration bookmarking API
//!
//! This library provides the core functionality for the Verso service:
//! storing bookmarked places (cafés and activities) and summarizing them
//! by country and city.
//!
//! # Architecture
//! - `storage`: Store trait, SeaORM backend and data models
//! - `services`: Business logic shared by the HTTP handlers
//! - `api`: HTTP services and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and other process-level utilities

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
