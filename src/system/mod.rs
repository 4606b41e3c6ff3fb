//! System-level modules
//!
//! Process-level concerns such as logging initialization.

pub mod logging;
