//! catalogd - an in-memory product catalog HTTP service
//!
//! CRUD over a single Product collection with substring search, category
//! filtering, pagination, and a static API-key gate.

pub mod catalog;
pub mod cli;
pub mod http_server;
