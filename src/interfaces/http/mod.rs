//! HTTP REST API interfaces
//!
//! - `modules`: Request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod modules;
pub mod router;

pub use router::create_api_router;
