//! Infrastructure layer: database access

pub mod database;
