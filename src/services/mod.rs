//! Business services
//!
//! Service layer shared by the HTTP handlers.

mod inspiration_service;

pub use inspiration_service::InspirationService;
