//! Service layer for addressbooks, contacts, orgs and their addresses.
//! - `addressbooks::domain` holds the wire DTOs and their validation rules.
//! - `addressbooks::ServiceProvider` is the backend contract; `memory` and
//!   `seaorm` are the bundled implementations.
//! - `pagination` turns raw list parameters into offset/limit windows.

pub mod errors;
pub mod pagination;
pub mod storage;
pub mod addressbooks;
#[cfg(test)]
pub mod test_support;
