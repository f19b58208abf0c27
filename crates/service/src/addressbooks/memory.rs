//! In-memory `ServiceProvider`.
//!
//! The whole hierarchy lives in one tree of `BTreeMap`s behind a single
//! `RwLock`. Keys are entity ids, so iteration order is the listing order.
//! Every mutation runs under the write lock, which makes cascade deletes
//! atomic. With a snapshot file configured, the tree is written after each
//! mutation and the change is rolled back if the write fails.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use super::domain::{compare_by_id, Address, Addressbook, Contact, Org, Resource};
use super::lifecycle::{prepare_create, prepare_update};
use super::provider::{RequestContext, ServiceProvider};
use crate::errors::ServiceError;
use crate::pagination::ListQuery;
use crate::storage::json_snapshot::JsonSnapshot;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Tree {
    #[serde(default)]
    addressbooks: BTreeMap<String, BookNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookNode {
    addressbook: Addressbook,
    #[serde(default)]
    contacts: BTreeMap<String, OwnerNode<Contact>>,
    #[serde(default)]
    orgs: BTreeMap<String, OwnerNode<Org>>,
}

/// A contact or org together with the addresses it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwnerNode<T> {
    entity: T,
    #[serde(default)]
    addresses: BTreeMap<String, Address>,
}

#[derive(Debug, Clone, Copy)]
enum Owner {
    Contact,
    Org,
}

/// Map value holding one entity plus whatever it owns.
trait Node {
    type Entity: Resource;

    fn wrap(entity: Self::Entity) -> Self;
    fn entity(&self) -> &Self::Entity;
    /// Swap the entity, keeping owned children.
    fn replace(&mut self, entity: Self::Entity);
}

impl Node for BookNode {
    type Entity = Addressbook;

    fn wrap(addressbook: Addressbook) -> Self {
        Self { addressbook, contacts: BTreeMap::new(), orgs: BTreeMap::new() }
    }
    fn entity(&self) -> &Addressbook { &self.addressbook }
    fn replace(&mut self, entity: Addressbook) { self.addressbook = entity; }
}

impl<T: Resource> Node for OwnerNode<T> {
    type Entity = T;

    fn wrap(entity: T) -> Self { Self { entity, addresses: BTreeMap::new() } }
    fn entity(&self) -> &T { &self.entity }
    fn replace(&mut self, entity: T) { self.entity = entity; }
}

impl Node for Address {
    type Entity = Address;

    fn wrap(entity: Address) -> Self { entity }
    fn entity(&self) -> &Address { self }
    fn replace(&mut self, entity: Address) { *self = entity; }
}

fn list_in<N: Node>(scope: &BTreeMap<String, N>, q: &ListQuery) -> Vec<N::Entity> {
    q.window(
        scope
            .values()
            .map(Node::entity)
            .filter(|e| q.matches(&e.search_text()))
            .cloned(),
    )
}

fn create_in<N: Node>(
    scope: &mut BTreeMap<String, N>,
    ctx: &RequestContext,
    entity: N::Entity,
) -> Result<N::Entity, ServiceError> {
    let prepared = prepare_create(entity, ctx)?;
    let id = prepared.id().unwrap_or_default().to_string();
    if scope.contains_key(&id) {
        return Err(ServiceError::duplicate(N::Entity::KIND, &id));
    }
    scope.insert(id, N::wrap(prepared.clone()));
    Ok(prepared)
}

fn read_in<N: Node>(scope: &BTreeMap<String, N>, id: &str) -> Result<N::Entity, ServiceError> {
    scope
        .get(id)
        .map(|n| n.entity().clone())
        .ok_or_else(|| ServiceError::not_found(N::Entity::KIND, id))
}

fn update_in<N: Node>(
    scope: &mut BTreeMap<String, N>,
    ctx: &RequestContext,
    id: &str,
    entity: N::Entity,
) -> Result<N::Entity, ServiceError> {
    let node = scope.get_mut(id).ok_or_else(|| ServiceError::not_found(N::Entity::KIND, id))?;
    let updated = prepare_update(node.entity(), entity, id, ctx)?;
    node.replace(updated.clone());
    Ok(updated)
}

fn delete_in<N: Node>(scope: &mut BTreeMap<String, N>, id: &str) -> Result<(), ServiceError> {
    scope
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found(N::Entity::KIND, id))
}

impl Tree {
    fn book(&self, aid: &str) -> Result<&BookNode, ServiceError> {
        self.addressbooks.get(aid).ok_or_else(|| ServiceError::not_found(Addressbook::KIND, aid))
    }

    fn book_mut(&mut self, aid: &str) -> Result<&mut BookNode, ServiceError> {
        self.addressbooks.get_mut(aid).ok_or_else(|| ServiceError::not_found(Addressbook::KIND, aid))
    }

    fn addresses(&self, aid: &str, owner: Owner, oid: &str) -> Result<&BTreeMap<String, Address>, ServiceError> {
        let book = self.book(aid)?;
        match owner {
            Owner::Contact => book.contacts.get(oid).map(|n| &n.addresses).ok_or_else(|| ServiceError::not_found(Contact::KIND, oid)),
            Owner::Org => book.orgs.get(oid).map(|n| &n.addresses).ok_or_else(|| ServiceError::not_found(Org::KIND, oid)),
        }
    }

    fn addresses_mut(&mut self, aid: &str, owner: Owner, oid: &str) -> Result<&mut BTreeMap<String, Address>, ServiceError> {
        let book = self.book_mut(aid)?;
        match owner {
            Owner::Contact => book.contacts.get_mut(oid).map(|n| &mut n.addresses).ok_or_else(|| ServiceError::not_found(Contact::KIND, oid)),
            Owner::Org => book.orgs.get_mut(oid).map(|n| &mut n.addresses).ok_or_else(|| ServiceError::not_found(Org::KIND, oid)),
        }
    }

    /// Flatten one kind of child across all addressbooks; ties on id keep addressbook order.
    fn all<T: Resource>(&self, q: &ListQuery, children: impl Fn(&BookNode) -> Vec<&T>) -> Vec<T> {
        let mut all: Vec<T> = self
            .addressbooks
            .values()
            .flat_map(|b| children(b))
            .filter(|e| q.matches(&e.search_text()))
            .cloned()
            .collect();
        all.sort_by(compare_by_id);
        q.window(all)
    }
}

/// `ServiceProvider` backed by process memory, optionally mirrored to a JSON file.
#[derive(Debug, Default)]
pub struct InMemoryServiceProvider {
    tree: RwLock<Tree>,
    snapshot: Option<JsonSnapshot<Tree>>,
}

impl InMemoryServiceProvider {
    pub fn new() -> Self { Self::default() }

    /// Load state from `path` if it exists and persist every later mutation there.
    pub async fn with_snapshot<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let snapshot = JsonSnapshot::<Tree>::new(path).await?;
        let tree = snapshot.load().await?.unwrap_or_default();
        info!(
            path = %snapshot.path().display(),
            addressbooks = tree.addressbooks.len(),
            "memory provider loaded snapshot"
        );
        Ok(Self { tree: RwLock::new(tree), snapshot: Some(snapshot) })
    }

    async fn mutate<R>(&self, f: impl FnOnce(&mut Tree) -> Result<R, ServiceError>) -> Result<R, ServiceError> {
        let mut tree = self.tree.write().await;
        let Some(snapshot) = &self.snapshot else {
            return f(&mut tree);
        };
        let backup = tree.clone();
        let out = f(&mut tree)?;
        if let Err(e) = snapshot.save(&tree).await {
            *tree = backup;
            warn!(error = %e, path = %snapshot.path().display(), "snapshot write failed; mutation rolled back");
            return Err(e);
        }
        Ok(out)
    }

    async fn list_owned(&self, aid: &str, owner: Owner, oid: &str, q: &ListQuery) -> Vec<Address> {
        let tree = self.tree.read().await;
        tree.addresses(aid, owner, oid).map(|m| list_in(m, q)).unwrap_or_default()
    }

    async fn create_owned(&self, ctx: &RequestContext, aid: &str, owner: Owner, oid: &str, address: Address) -> Result<Address, ServiceError> {
        self.mutate(|t| create_in(t.addresses_mut(aid, owner, oid)?, ctx, address)).await
    }

    async fn read_owned(&self, aid: &str, owner: Owner, oid: &str, adrid: &str) -> Result<Address, ServiceError> {
        let tree = self.tree.read().await;
        read_in(tree.addresses(aid, owner, oid)?, adrid)
    }

    async fn update_owned(&self, ctx: &RequestContext, aid: &str, owner: Owner, oid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        self.mutate(|t| update_in(t.addresses_mut(aid, owner, oid)?, ctx, adrid, address)).await
    }

    async fn delete_owned(&self, aid: &str, owner: Owner, oid: &str, adrid: &str) -> Result<(), ServiceError> {
        self.mutate(|t| delete_in(t.addresses_mut(aid, owner, oid)?, adrid)).await
    }
}

#[async_trait]
impl ServiceProvider for InMemoryServiceProvider {
    async fn list(&self, q: &ListQuery) -> Result<Vec<Addressbook>, ServiceError> {
        let tree = self.tree.read().await;
        Ok(list_in(&tree.addressbooks, q))
    }

    #[instrument(skip_all, fields(principal = %ctx.principal))]
    async fn create(&self, ctx: &RequestContext, addressbook: Addressbook) -> Result<Addressbook, ServiceError> {
        let created = self.mutate(|t| create_in(&mut t.addressbooks, ctx, addressbook)).await?;
        info!(id = created.id.as_deref().unwrap_or_default(), "addressbook created");
        Ok(created)
    }

    async fn read(&self, id: &str) -> Result<Addressbook, ServiceError> {
        let tree = self.tree.read().await;
        read_in(&tree.addressbooks, id)
    }

    #[instrument(skip(self, ctx, addressbook), fields(principal = %ctx.principal))]
    async fn update(&self, ctx: &RequestContext, id: &str, addressbook: Addressbook) -> Result<Addressbook, ServiceError> {
        self.mutate(|t| update_in(&mut t.addressbooks, ctx, id, addressbook)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let removed = self
            .mutate(|t| {
                let book = t.addressbooks.remove(id).ok_or_else(|| ServiceError::not_found(Addressbook::KIND, id))?;
                Ok((book.contacts.len(), book.orgs.len()))
            })
            .await?;
        info!(contacts = removed.0, orgs = removed.1, "addressbook deleted with its children");
        Ok(())
    }

    async fn list_all_contacts(&self, q: &ListQuery) -> Result<Vec<Contact>, ServiceError> {
        let tree = self.tree.read().await;
        Ok(tree.all(q, |b| b.contacts.values().map(Node::entity).collect()))
    }

    async fn list_all_orgs(&self, q: &ListQuery) -> Result<Vec<Org>, ServiceError> {
        let tree = self.tree.read().await;
        Ok(tree.all(q, |b| b.orgs.values().map(Node::entity).collect()))
    }

    async fn list_contacts(&self, aid: &str, q: &ListQuery) -> Result<Vec<Contact>, ServiceError> {
        let tree = self.tree.read().await;
        Ok(tree.book(aid).map(|b| list_in(&b.contacts, q)).unwrap_or_default())
    }

    #[instrument(skip(self, ctx, contact), fields(principal = %ctx.principal))]
    async fn create_contact(&self, ctx: &RequestContext, aid: &str, contact: Contact) -> Result<Contact, ServiceError> {
        self.mutate(|t| create_in(&mut t.book_mut(aid)?.contacts, ctx, contact)).await
    }

    async fn read_contact(&self, aid: &str, cid: &str) -> Result<Contact, ServiceError> {
        let tree = self.tree.read().await;
        read_in(&tree.book(aid)?.contacts, cid)
    }

    #[instrument(skip(self, ctx, contact), fields(principal = %ctx.principal))]
    async fn update_contact(&self, ctx: &RequestContext, aid: &str, cid: &str, contact: Contact) -> Result<Contact, ServiceError> {
        self.mutate(|t| update_in(&mut t.book_mut(aid)?.contacts, ctx, cid, contact)).await
    }

    #[instrument(skip(self))]
    async fn delete_contact(&self, aid: &str, cid: &str) -> Result<(), ServiceError> {
        self.mutate(|t| delete_in(&mut t.book_mut(aid)?.contacts, cid)).await
    }

    async fn list_orgs(&self, aid: &str, q: &ListQuery) -> Result<Vec<Org>, ServiceError> {
        let tree = self.tree.read().await;
        Ok(tree.book(aid).map(|b| list_in(&b.orgs, q)).unwrap_or_default())
    }

    #[instrument(skip(self, ctx, org), fields(principal = %ctx.principal))]
    async fn create_org(&self, ctx: &RequestContext, aid: &str, org: Org) -> Result<Org, ServiceError> {
        self.mutate(|t| create_in(&mut t.book_mut(aid)?.orgs, ctx, org)).await
    }

    async fn read_org(&self, aid: &str, oid: &str) -> Result<Org, ServiceError> {
        let tree = self.tree.read().await;
        read_in(&tree.book(aid)?.orgs, oid)
    }

    #[instrument(skip(self, ctx, org), fields(principal = %ctx.principal))]
    async fn update_org(&self, ctx: &RequestContext, aid: &str, oid: &str, org: Org) -> Result<Org, ServiceError> {
        self.mutate(|t| update_in(&mut t.book_mut(aid)?.orgs, ctx, oid, org)).await
    }

    #[instrument(skip(self))]
    async fn delete_org(&self, aid: &str, oid: &str) -> Result<(), ServiceError> {
        self.mutate(|t| delete_in(&mut t.book_mut(aid)?.orgs, oid)).await
    }

    async fn list_addresses(&self, aid: &str, cid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError> {
        Ok(self.list_owned(aid, Owner::Contact, cid, q).await)
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn create_address(&self, ctx: &RequestContext, aid: &str, cid: &str, address: Address) -> Result<Address, ServiceError> {
        self.create_owned(ctx, aid, Owner::Contact, cid, address).await
    }

    async fn read_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<Address, ServiceError> {
        self.read_owned(aid, Owner::Contact, cid, adrid).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn update_address(&self, ctx: &RequestContext, aid: &str, cid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        self.update_owned(ctx, aid, Owner::Contact, cid, adrid, address).await
    }

    #[instrument(skip(self))]
    async fn delete_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<(), ServiceError> {
        self.delete_owned(aid, Owner::Contact, cid, adrid).await
    }

    async fn list_org_addresses(&self, aid: &str, oid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError> {
        Ok(self.list_owned(aid, Owner::Org, oid, q).await)
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn create_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, address: Address) -> Result<Address, ServiceError> {
        self.create_owned(ctx, aid, Owner::Org, oid, address).await
    }

    async fn read_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<Address, ServiceError> {
        self.read_owned(aid, Owner::Org, oid, adrid).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn update_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        self.update_owned(ctx, aid, Owner::Org, oid, adrid, address).await
    }

    #[instrument(skip(self))]
    async fn delete_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<(), ServiceError> {
        self.delete_owned(aid, Owner::Org, oid, adrid).await
    }
}
