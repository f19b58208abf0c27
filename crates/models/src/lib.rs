//! SeaORM entities backing the relational addressbook store.
//!
//! Rows mirror the service DTOs column-for-column; enum-typed attributes are
//! stored as their upper-case wire names. Scope uniqueness is encoded in the
//! composite primary keys (`addressbook_id, id` for contacts and orgs,
//! `addressbook_id, owner_kind, owner_id, id` for addresses).

pub mod errors;
pub mod db;
pub mod addressbook;
pub mod contact;
pub mod org;
pub mod address;

#[cfg(test)]
mod tests;
