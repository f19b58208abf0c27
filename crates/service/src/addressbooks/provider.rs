use std::sync::Arc;

use async_trait::async_trait;

use super::domain::{Address, Addressbook, Contact, Org};
use crate::errors::ServiceError;
use crate::pagination::ListQuery;

/// Caller identity used for audit stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub principal: String,
}

impl RequestContext {
    pub const ANONYMOUS: &'static str = "anonymous";

    pub fn new(principal: impl Into<String>) -> Self { Self { principal: principal.into() } }

    pub fn anonymous() -> Self { Self::new(Self::ANONYMOUS) }
}

impl Default for RequestContext {
    fn default() -> Self { Self::anonymous() }
}

/// Backend contract for the addressbook hierarchy.
///
/// Scoped lists are ordered by ascending id. A list below a parent that does
/// not exist is empty rather than an error. Creates fail with
/// [`ServiceError::NotFound`] when the parent is missing and with
/// [`ServiceError::Duplicate`] when the supplied id is taken in that scope.
/// Updates replace every mutable field. Deletes cascade to owned children
/// and are all-or-nothing.
#[async_trait]
pub trait ServiceProvider: Send + Sync {
    async fn list(&self, q: &ListQuery) -> Result<Vec<Addressbook>, ServiceError>;
    async fn create(&self, ctx: &RequestContext, addressbook: Addressbook) -> Result<Addressbook, ServiceError>;
    async fn read(&self, id: &str) -> Result<Addressbook, ServiceError>;
    async fn update(&self, ctx: &RequestContext, id: &str, addressbook: Addressbook) -> Result<Addressbook, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;

    /// Contacts of every addressbook, ordered by contact id then addressbook id.
    async fn list_all_contacts(&self, q: &ListQuery) -> Result<Vec<Contact>, ServiceError>;
    /// Orgs of every addressbook, ordered by org id then addressbook id.
    async fn list_all_orgs(&self, q: &ListQuery) -> Result<Vec<Org>, ServiceError>;

    async fn list_contacts(&self, aid: &str, q: &ListQuery) -> Result<Vec<Contact>, ServiceError>;
    async fn create_contact(&self, ctx: &RequestContext, aid: &str, contact: Contact) -> Result<Contact, ServiceError>;
    async fn read_contact(&self, aid: &str, cid: &str) -> Result<Contact, ServiceError>;
    async fn update_contact(&self, ctx: &RequestContext, aid: &str, cid: &str, contact: Contact) -> Result<Contact, ServiceError>;
    async fn delete_contact(&self, aid: &str, cid: &str) -> Result<(), ServiceError>;

    async fn list_orgs(&self, aid: &str, q: &ListQuery) -> Result<Vec<Org>, ServiceError>;
    async fn create_org(&self, ctx: &RequestContext, aid: &str, org: Org) -> Result<Org, ServiceError>;
    async fn read_org(&self, aid: &str, oid: &str) -> Result<Org, ServiceError>;
    async fn update_org(&self, ctx: &RequestContext, aid: &str, oid: &str, org: Org) -> Result<Org, ServiceError>;
    async fn delete_org(&self, aid: &str, oid: &str) -> Result<(), ServiceError>;

    async fn list_addresses(&self, aid: &str, cid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError>;
    async fn create_address(&self, ctx: &RequestContext, aid: &str, cid: &str, address: Address) -> Result<Address, ServiceError>;
    async fn read_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<Address, ServiceError>;
    async fn update_address(&self, ctx: &RequestContext, aid: &str, cid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError>;
    async fn delete_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<(), ServiceError>;

    async fn list_org_addresses(&self, aid: &str, oid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError>;
    async fn create_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, address: Address) -> Result<Address, ServiceError>;
    async fn read_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<Address, ServiceError>;
    async fn update_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError>;
    async fn delete_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<(), ServiceError>;
}

/// Process-wide provider handle injected into the HTTP layer.
pub type SharedProvider = Arc<dyn ServiceProvider>;
