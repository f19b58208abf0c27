//! Storage abstractions for service layer
//!
//! File-backed persistence helpers shared by the in-memory backend.

pub mod json_snapshot;
