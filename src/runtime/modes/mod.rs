//! Mode routing
//!
//! Entry points for the execution modes:
//! - Server mode (HTTP server, default)
//! - Config generation

pub mod config_gen;
pub mod server;

pub use config_gen::run_config_gen;
pub use server::run_server;
