//! Relational `ServiceProvider` on top of the `models` entities.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, instrument, warn};

use models::{address, addressbook, contact, org};

use super::domain::{audit_now, Address, Addressbook, AuditFields, Contact, MessageType, Org, Resource};
use super::lifecycle::{prepare_create, prepare_update};
use super::provider::{RequestContext, ServiceProvider};
use crate::errors::ServiceError;
use crate::pagination::ListQuery;

/// SeaORM-backed provider.
pub struct SeaOrmServiceProvider {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceProvider {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn stamp(at: Option<DateTime<Utc>>) -> DateTimeWithTimeZone {
    at.unwrap_or_else(audit_now).into()
}

fn audit_from(
    created_at: DateTimeWithTimeZone,
    created_by: String,
    modified_at: DateTimeWithTimeZone,
    modified_by: String,
) -> AuditFields {
    AuditFields {
        created_at: Some(created_at.with_timezone(&Utc)),
        created_by: Some(created_by),
        modified_at: Some(modified_at.with_timezone(&Utc)),
        modified_by: Some(modified_by),
    }
}

fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Case-insensitive substring match over `cols`; blank query matches all rows.
fn text_filter<C: ColumnTrait + 'static>(q: &ListQuery, cols: &[C]) -> Condition {
    let needle = q.query.trim();
    if needle.is_empty() {
        return Condition::all();
    }
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    cols.iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::expr(Func::lower(Expr::col(*col))).like(pattern.as_str()))
    })
}

fn cascade_failed(e: DbErr) -> ServiceError {
    warn!(error = %e, "cascade delete failed; transaction rolled back");
    ServiceError::Internal(format!("delete failed: {e}"))
}

/// A row deleted between the existence check and the write surfaces as not found.
fn update_failed(e: DbErr, kind: &str, id: &str) -> ServiceError {
    match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(kind, id),
        other => other.into(),
    }
}

fn addressbook_from(m: addressbook::Model) -> Addressbook {
    Addressbook {
        id: Some(m.id),
        name: m.name,
        description: m.description,
        audit: audit_from(m.created_at, m.created_by, m.modified_at, m.modified_by),
    }
}

fn addressbook_row(ab: Addressbook) -> addressbook::ActiveModel {
    addressbook::ActiveModel {
        id: Set(ab.id.unwrap_or_default()),
        name: Set(ab.name),
        description: Set(ab.description),
        created_at: Set(stamp(ab.audit.created_at)),
        created_by: Set(ab.audit.created_by.unwrap_or_default()),
        modified_at: Set(stamp(ab.audit.modified_at)),
        modified_by: Set(ab.audit.modified_by.unwrap_or_default()),
    }
}

fn contact_from(m: contact::Model) -> Contact {
    Contact {
        id: Some(m.id),
        formatted_name: m.formatted_name,
        first_name: m.first_name,
        last_name: m.last_name,
        middle_name: m.middle_name,
        prefix: m.prefix,
        suffix: m.suffix,
        nick_name: m.nick_name,
        job_title: m.job_title,
        department: m.department,
        company: m.company,
        org_id: m.org_id,
        birthday: m.birthday,
        photo_url: m.photo_url,
        note: m.note,
        is_favorite: m.is_favorite,
        is_private: m.is_private,
        audit: audit_from(m.created_at, m.created_by, m.modified_at, m.modified_by),
    }
}

fn contact_row(aid: &str, c: Contact) -> contact::ActiveModel {
    contact::ActiveModel {
        addressbook_id: Set(aid.to_string()),
        id: Set(c.id.unwrap_or_default()),
        formatted_name: Set(c.formatted_name),
        first_name: Set(c.first_name),
        last_name: Set(c.last_name),
        middle_name: Set(c.middle_name),
        prefix: Set(c.prefix),
        suffix: Set(c.suffix),
        nick_name: Set(c.nick_name),
        job_title: Set(c.job_title),
        department: Set(c.department),
        company: Set(c.company),
        org_id: Set(c.org_id),
        birthday: Set(c.birthday),
        photo_url: Set(c.photo_url),
        note: Set(c.note),
        is_favorite: Set(c.is_favorite),
        is_private: Set(c.is_private),
        created_at: Set(stamp(c.audit.created_at)),
        created_by: Set(c.audit.created_by.unwrap_or_default()),
        modified_at: Set(stamp(c.audit.modified_at)),
        modified_by: Set(c.audit.modified_by.unwrap_or_default()),
    }
}

fn org_from(m: org::Model) -> Result<Org, ServiceError> {
    Ok(Org {
        id: Some(m.id),
        name: m.name,
        description: m.description,
        cost_center: m.cost_center,
        stock_exchange: m.stock_exchange,
        ticker_symbol: m.ticker_symbol,
        org_type: m.org_type.parse()?,
        logo_url: m.logo_url,
        audit: audit_from(m.created_at, m.created_by, m.modified_at, m.modified_by),
    })
}

fn org_row(aid: &str, o: Org) -> org::ActiveModel {
    org::ActiveModel {
        addressbook_id: Set(aid.to_string()),
        id: Set(o.id.unwrap_or_default()),
        name: Set(o.name),
        description: Set(o.description),
        cost_center: Set(o.cost_center),
        stock_exchange: Set(o.stock_exchange),
        ticker_symbol: Set(o.ticker_symbol),
        org_type: Set(o.org_type.as_str().to_string()),
        logo_url: Set(o.logo_url),
        created_at: Set(stamp(o.audit.created_at)),
        created_by: Set(o.audit.created_by.unwrap_or_default()),
        modified_at: Set(stamp(o.audit.modified_at)),
        modified_by: Set(o.audit.modified_by.unwrap_or_default()),
    }
}

fn address_from(m: address::Model) -> Result<Address, ServiceError> {
    Ok(Address {
        id: Some(m.id),
        address_type: Some(m.address_type.parse()?),
        attribute_type: Some(m.attribute_type.parse()?),
        msg_type: m.msg_type.as_deref().map(|s| s.parse::<MessageType>()).transpose()?,
        value: m.value,
        street: m.street,
        postal_code: m.postal_code,
        city: m.city,
        country_code: m.country_code,
        audit: audit_from(m.created_at, m.created_by, m.modified_at, m.modified_by),
    })
}

fn address_row(aid: &str, owner_kind: &str, owner_id: &str, a: Address) -> address::ActiveModel {
    address::ActiveModel {
        addressbook_id: Set(aid.to_string()),
        owner_kind: Set(owner_kind.to_string()),
        owner_id: Set(owner_id.to_string()),
        id: Set(a.id.unwrap_or_default()),
        address_type: Set(a.address_type.map(|t| t.as_str()).unwrap_or_default().to_string()),
        attribute_type: Set(a.attribute_type.map(|t| t.as_str()).unwrap_or_default().to_string()),
        msg_type: Set(a.msg_type.map(|t| t.as_str().to_string())),
        value: Set(a.value),
        street: Set(a.street),
        postal_code: Set(a.postal_code),
        city: Set(a.city),
        country_code: Set(a.country_code),
        created_at: Set(stamp(a.audit.created_at)),
        created_by: Set(a.audit.created_by.unwrap_or_default()),
        modified_at: Set(stamp(a.audit.modified_at)),
        modified_by: Set(a.audit.modified_by.unwrap_or_default()),
    }
}

impl SeaOrmServiceProvider {
    async fn find_addressbook(&self, aid: &str) -> Result<Option<addressbook::Model>, ServiceError> {
        Ok(addressbook::Entity::find_by_id(aid.to_string()).one(&self.db).await?)
    }

    async fn require_addressbook(&self, aid: &str) -> Result<(), ServiceError> {
        match self.find_addressbook(aid).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found(Addressbook::KIND, aid)),
        }
    }

    async fn find_contact(&self, aid: &str, cid: &str) -> Result<Option<contact::Model>, ServiceError> {
        Ok(contact::Entity::find_by_id((aid.to_string(), cid.to_string())).one(&self.db).await?)
    }

    async fn find_org(&self, aid: &str, oid: &str) -> Result<Option<org::Model>, ServiceError> {
        Ok(org::Entity::find_by_id((aid.to_string(), oid.to_string())).one(&self.db).await?)
    }

    /// Fails with NotFound unless the addressbook and the owning contact/org exist.
    async fn require_owner(&self, aid: &str, owner_kind: &str, owner_id: &str) -> Result<(), ServiceError> {
        address::validate_owner_kind(owner_kind)?;
        self.require_addressbook(aid).await?;
        let exists = if owner_kind == address::OWNER_CONTACT {
            self.find_contact(aid, owner_id).await?.is_some()
        } else {
            self.find_org(aid, owner_id).await?.is_some()
        };
        if exists {
            Ok(())
        } else {
            let kind = if owner_kind == address::OWNER_CONTACT { Contact::KIND } else { Org::KIND };
            Err(ServiceError::not_found(kind, owner_id))
        }
    }

    async fn find_address(&self, aid: &str, owner_kind: &str, owner_id: &str, adrid: &str) -> Result<Option<address::Model>, ServiceError> {
        let key = (aid.to_string(), owner_kind.to_string(), owner_id.to_string(), adrid.to_string());
        Ok(address::Entity::find_by_id(key).one(&self.db).await?)
    }

    async fn list_owned(&self, aid: &str, owner_kind: &str, owner_id: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError> {
        address::validate_owner_kind(owner_kind)?;
        let rows = address::Entity::find()
            .filter(address::Column::AddressbookId.eq(aid))
            .filter(address::Column::OwnerKind.eq(owner_kind))
            .filter(address::Column::OwnerId.eq(owner_id))
            .filter(text_filter(q, &[
                address::Column::Value,
                address::Column::Street,
                address::Column::PostalCode,
                address::Column::City,
            ]))
            .order_by_asc(address::Column::Id)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        rows.into_iter().map(address_from).collect()
    }

    async fn create_owned(&self, ctx: &RequestContext, aid: &str, owner_kind: &str, owner_id: &str, address: Address) -> Result<Address, ServiceError> {
        self.require_owner(aid, owner_kind, owner_id).await?;
        let prepared = prepare_create(address, ctx)?;
        let id = prepared.id().unwrap_or_default().to_string();
        if self.find_address(aid, owner_kind, owner_id, &id).await?.is_some() {
            return Err(ServiceError::duplicate(Address::KIND, &id));
        }
        let row = address_row(aid, owner_kind, owner_id, prepared).insert(&self.db).await?;
        info!(addressbook = aid, owner_kind, owner = owner_id, id = %row.id, "address created");
        address_from(row)
    }

    async fn read_owned(&self, aid: &str, owner_kind: &str, owner_id: &str, adrid: &str) -> Result<Address, ServiceError> {
        address::validate_owner_kind(owner_kind)?;
        let row = self
            .find_address(aid, owner_kind, owner_id, adrid)
            .await?
            .ok_or_else(|| ServiceError::not_found(Address::KIND, adrid))?;
        address_from(row)
    }

    async fn update_owned(&self, ctx: &RequestContext, aid: &str, owner_kind: &str, owner_id: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        let existing = self.read_owned(aid, owner_kind, owner_id, adrid).await?;
        let updated = prepare_update(&existing, address, adrid, ctx)?;
        let row = address_row(aid, owner_kind, owner_id, updated)
            .update(&self.db)
            .await
            .map_err(|e| update_failed(e, Address::KIND, adrid))?;
        address_from(row)
    }

    async fn delete_owned(&self, aid: &str, owner_kind: &str, owner_id: &str, adrid: &str) -> Result<(), ServiceError> {
        address::validate_owner_kind(owner_kind)?;
        let key = (aid.to_string(), owner_kind.to_string(), owner_id.to_string(), adrid.to_string());
        let res = address::Entity::delete_by_id(key).exec(&self.db).await.map_err(cascade_failed)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(Address::KIND, adrid));
        }
        Ok(())
    }

    /// Remove a contact or org and its addresses in one transaction.
    async fn delete_owner(&self, aid: &str, owner_kind: &str, owner_id: &str) -> Result<u64, ServiceError> {
        let txn = self.db.begin().await.map_err(cascade_failed)?;
        let addresses = address::Entity::delete_many()
            .filter(address::Column::AddressbookId.eq(aid))
            .filter(address::Column::OwnerKind.eq(owner_kind))
            .filter(address::Column::OwnerId.eq(owner_id))
            .exec(&txn)
            .await
            .map_err(cascade_failed)?;
        let owner = if owner_kind == address::OWNER_CONTACT {
            contact::Entity::delete_by_id((aid.to_string(), owner_id.to_string())).exec(&txn).await
        } else {
            org::Entity::delete_by_id((aid.to_string(), owner_id.to_string())).exec(&txn).await
        }
        .map_err(cascade_failed)?;
        if owner.rows_affected == 0 {
            txn.rollback().await.map_err(cascade_failed)?;
            let kind = if owner_kind == address::OWNER_CONTACT { Contact::KIND } else { Org::KIND };
            return Err(ServiceError::not_found(kind, owner_id));
        }
        txn.commit().await.map_err(cascade_failed)?;
        Ok(addresses.rows_affected)
    }
}

#[async_trait]
impl ServiceProvider for SeaOrmServiceProvider {
    async fn list(&self, q: &ListQuery) -> Result<Vec<Addressbook>, ServiceError> {
        let rows = addressbook::Entity::find()
            .filter(text_filter(q, &[addressbook::Column::Name, addressbook::Column::Description]))
            .order_by_asc(addressbook::Column::Id)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(addressbook_from).collect())
    }

    #[instrument(skip_all, fields(principal = %ctx.principal))]
    async fn create(&self, ctx: &RequestContext, addressbook: Addressbook) -> Result<Addressbook, ServiceError> {
        let prepared = prepare_create(addressbook, ctx)?;
        let id = prepared.id().unwrap_or_default().to_string();
        if self.find_addressbook(&id).await?.is_some() {
            return Err(ServiceError::duplicate(Addressbook::KIND, &id));
        }
        let row = addressbook_row(prepared).insert(&self.db).await?;
        info!(id = %row.id, "addressbook created");
        Ok(addressbook_from(row))
    }

    async fn read(&self, id: &str) -> Result<Addressbook, ServiceError> {
        self.find_addressbook(id)
            .await?
            .map(addressbook_from)
            .ok_or_else(|| ServiceError::not_found(Addressbook::KIND, id))
    }

    #[instrument(skip(self, ctx, addressbook), fields(principal = %ctx.principal))]
    async fn update(&self, ctx: &RequestContext, id: &str, addressbook: Addressbook) -> Result<Addressbook, ServiceError> {
        let existing = self.read(id).await?;
        let updated = prepare_update(&existing, addressbook, id, ctx)?;
        let row = addressbook_row(updated)
            .update(&self.db)
            .await
            .map_err(|e| update_failed(e, Addressbook::KIND, id))?;
        Ok(addressbook_from(row))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let txn = self.db.begin().await.map_err(cascade_failed)?;
        let addresses = address::Entity::delete_many()
            .filter(address::Column::AddressbookId.eq(id))
            .exec(&txn)
            .await
            .map_err(cascade_failed)?;
        let contacts = contact::Entity::delete_many()
            .filter(contact::Column::AddressbookId.eq(id))
            .exec(&txn)
            .await
            .map_err(cascade_failed)?;
        let orgs = org::Entity::delete_many()
            .filter(org::Column::AddressbookId.eq(id))
            .exec(&txn)
            .await
            .map_err(cascade_failed)?;
        let book = addressbook::Entity::delete_by_id(id.to_string()).exec(&txn).await.map_err(cascade_failed)?;
        if book.rows_affected == 0 {
            txn.rollback().await.map_err(cascade_failed)?;
            return Err(ServiceError::not_found(Addressbook::KIND, id));
        }
        txn.commit().await.map_err(cascade_failed)?;
        info!(
            addresses = addresses.rows_affected,
            contacts = contacts.rows_affected,
            orgs = orgs.rows_affected,
            "addressbook deleted with its children"
        );
        Ok(())
    }

    async fn list_all_contacts(&self, q: &ListQuery) -> Result<Vec<Contact>, ServiceError> {
        let rows = contact::Entity::find()
            .filter(text_filter(q, &[
                contact::Column::FormattedName,
                contact::Column::FirstName,
                contact::Column::LastName,
                contact::Column::NickName,
                contact::Column::Company,
                contact::Column::Department,
                contact::Column::JobTitle,
            ]))
            .order_by_asc(contact::Column::Id)
            .order_by_asc(contact::Column::AddressbookId)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(contact_from).collect())
    }

    async fn list_all_orgs(&self, q: &ListQuery) -> Result<Vec<Org>, ServiceError> {
        let rows = org::Entity::find()
            .filter(text_filter(q, &[org::Column::Name, org::Column::Description, org::Column::TickerSymbol]))
            .order_by_asc(org::Column::Id)
            .order_by_asc(org::Column::AddressbookId)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        rows.into_iter().map(org_from).collect()
    }

    async fn list_contacts(&self, aid: &str, q: &ListQuery) -> Result<Vec<Contact>, ServiceError> {
        let rows = contact::Entity::find()
            .filter(contact::Column::AddressbookId.eq(aid))
            .filter(text_filter(q, &[
                contact::Column::FormattedName,
                contact::Column::FirstName,
                contact::Column::LastName,
                contact::Column::NickName,
                contact::Column::Company,
                contact::Column::Department,
                contact::Column::JobTitle,
            ]))
            .order_by_asc(contact::Column::Id)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(contact_from).collect())
    }

    #[instrument(skip(self, ctx, contact), fields(principal = %ctx.principal))]
    async fn create_contact(&self, ctx: &RequestContext, aid: &str, contact: Contact) -> Result<Contact, ServiceError> {
        self.require_addressbook(aid).await?;
        let prepared = prepare_create(contact, ctx)?;
        let id = prepared.id().unwrap_or_default().to_string();
        if self.find_contact(aid, &id).await?.is_some() {
            return Err(ServiceError::duplicate(Contact::KIND, &id));
        }
        let row = contact_row(aid, prepared).insert(&self.db).await?;
        Ok(contact_from(row))
    }

    async fn read_contact(&self, aid: &str, cid: &str) -> Result<Contact, ServiceError> {
        self.find_contact(aid, cid)
            .await?
            .map(contact_from)
            .ok_or_else(|| ServiceError::not_found(Contact::KIND, cid))
    }

    #[instrument(skip(self, ctx, contact), fields(principal = %ctx.principal))]
    async fn update_contact(&self, ctx: &RequestContext, aid: &str, cid: &str, contact: Contact) -> Result<Contact, ServiceError> {
        let existing = self.read_contact(aid, cid).await?;
        let updated = prepare_update(&existing, contact, cid, ctx)?;
        let row = contact_row(aid, updated)
            .update(&self.db)
            .await
            .map_err(|e| update_failed(e, Contact::KIND, cid))?;
        Ok(contact_from(row))
    }

    #[instrument(skip(self))]
    async fn delete_contact(&self, aid: &str, cid: &str) -> Result<(), ServiceError> {
        let addresses = self.delete_owner(aid, address::OWNER_CONTACT, cid).await?;
        info!(addresses, "contact deleted");
        Ok(())
    }

    async fn list_orgs(&self, aid: &str, q: &ListQuery) -> Result<Vec<Org>, ServiceError> {
        let rows = org::Entity::find()
            .filter(org::Column::AddressbookId.eq(aid))
            .filter(text_filter(q, &[org::Column::Name, org::Column::Description, org::Column::TickerSymbol]))
            .order_by_asc(org::Column::Id)
            .offset(q.position)
            .limit(q.size)
            .all(&self.db)
            .await?;
        rows.into_iter().map(org_from).collect()
    }

    #[instrument(skip(self, ctx, org), fields(principal = %ctx.principal))]
    async fn create_org(&self, ctx: &RequestContext, aid: &str, org: Org) -> Result<Org, ServiceError> {
        self.require_addressbook(aid).await?;
        let prepared = prepare_create(org, ctx)?;
        let id = prepared.id().unwrap_or_default().to_string();
        if self.find_org(aid, &id).await?.is_some() {
            return Err(ServiceError::duplicate(Org::KIND, &id));
        }
        let row = org_row(aid, prepared).insert(&self.db).await?;
        org_from(row)
    }

    async fn read_org(&self, aid: &str, oid: &str) -> Result<Org, ServiceError> {
        let row = self
            .find_org(aid, oid)
            .await?
            .ok_or_else(|| ServiceError::not_found(Org::KIND, oid))?;
        org_from(row)
    }

    #[instrument(skip(self, ctx, org), fields(principal = %ctx.principal))]
    async fn update_org(&self, ctx: &RequestContext, aid: &str, oid: &str, org: Org) -> Result<Org, ServiceError> {
        let existing = self.read_org(aid, oid).await?;
        let updated = prepare_update(&existing, org, oid, ctx)?;
        let row = org_row(aid, updated)
            .update(&self.db)
            .await
            .map_err(|e| update_failed(e, Org::KIND, oid))?;
        org_from(row)
    }

    #[instrument(skip(self))]
    async fn delete_org(&self, aid: &str, oid: &str) -> Result<(), ServiceError> {
        let addresses = self.delete_owner(aid, address::OWNER_ORG, oid).await?;
        info!(addresses, "org deleted");
        Ok(())
    }

    async fn list_addresses(&self, aid: &str, cid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError> {
        self.list_owned(aid, address::OWNER_CONTACT, cid, q).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn create_address(&self, ctx: &RequestContext, aid: &str, cid: &str, address: Address) -> Result<Address, ServiceError> {
        self.create_owned(ctx, aid, address::OWNER_CONTACT, cid, address).await
    }

    async fn read_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<Address, ServiceError> {
        self.read_owned(aid, address::OWNER_CONTACT, cid, adrid).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn update_address(&self, ctx: &RequestContext, aid: &str, cid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        self.update_owned(ctx, aid, address::OWNER_CONTACT, cid, adrid, address).await
    }

    #[instrument(skip(self))]
    async fn delete_address(&self, aid: &str, cid: &str, adrid: &str) -> Result<(), ServiceError> {
        self.delete_owned(aid, address::OWNER_CONTACT, cid, adrid).await
    }

    async fn list_org_addresses(&self, aid: &str, oid: &str, q: &ListQuery) -> Result<Vec<Address>, ServiceError> {
        self.list_owned(aid, address::OWNER_ORG, oid, q).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn create_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, address: Address) -> Result<Address, ServiceError> {
        self.create_owned(ctx, aid, address::OWNER_ORG, oid, address).await
    }

    async fn read_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<Address, ServiceError> {
        self.read_owned(aid, address::OWNER_ORG, oid, adrid).await
    }

    #[instrument(skip(self, ctx, address), fields(principal = %ctx.principal))]
    async fn update_org_address(&self, ctx: &RequestContext, aid: &str, oid: &str, adrid: &str, address: Address) -> Result<Address, ServiceError> {
        self.update_owned(ctx, aid, address::OWNER_ORG, oid, adrid, address).await
    }

    #[instrument(skip(self))]
    async fn delete_org_address(&self, aid: &str, oid: &str, adrid: &str) -> Result<(), ServiceError> {
        self.delete_owned(aid, address::OWNER_ORG, oid, adrid).await
    }
}
