//! HTTP front end for the addressbook service: axum routes, error mapping,
//! OpenAPI document and startup wiring.

pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod openapi;

pub use startup::{build_app, build_provider, run, serve};
