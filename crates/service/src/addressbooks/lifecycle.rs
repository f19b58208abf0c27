//! Create/update preparation shared by every backend: validation, identity
//! assignment and audit stamping happen here so backends only store.

use uuid::Uuid;

use super::domain::{audit_now, AuditFields, Resource};
use super::provider::RequestContext;
use crate::errors::ServiceError;

/// Longest id the relational backend stores; both backends enforce it.
pub const MAX_ID_LEN: usize = 64;

/// Validate `entity`, assign a UUID v4 id when none was supplied and stamp it as created.
pub fn prepare_create<T: Resource>(mut entity: T, ctx: &RequestContext) -> Result<T, ServiceError> {
    entity.normalize_and_validate()?;
    if let Some(id) = entity.id().filter(|id| id.chars().count() > MAX_ID_LEN) {
        return Err(ServiceError::validation(format!(
            "{} id <{id}> is longer than {MAX_ID_LEN} characters",
            T::KIND
        )));
    }
    if entity.id().map_or(true, |id| id.trim().is_empty()) {
        entity.set_id(Uuid::new_v4().to_string());
    }
    *entity.audit_mut() = AuditFields::created(audit_now(), &ctx.principal);
    Ok(entity)
}

/// Build the replacement for `existing`: all mutable fields come from `incoming`,
/// the id comes from the path and the creation stamps are preserved.
pub fn prepare_update<T: Resource>(
    existing: &T,
    mut incoming: T,
    id: &str,
    ctx: &RequestContext,
) -> Result<T, ServiceError> {
    if let Some(body_id) = incoming.id().filter(|b| !b.trim().is_empty()) {
        if body_id != id {
            return Err(ServiceError::validation(format!(
                "{} id <{body_id}> in body does not match <{id}> in path",
                T::KIND
            )));
        }
    }
    incoming.normalize_and_validate()?;
    incoming.set_id(id.to_string());
    *incoming.audit_mut() = AuditFields::modified(existing.audit(), audit_now(), &ctx.principal);
    Ok(incoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressbooks::domain::Addressbook;

    fn book(name: &str) -> Addressbook {
        Addressbook { name: name.into(), ..Default::default() }
    }

    #[test]
    fn create_assigns_id_and_stamps() -> Result<(), ServiceError> {
        let created = prepare_create(book("Acme"), &RequestContext::new("alice"))?;
        assert!(created.id.as_deref().is_some_and(|id| !id.is_empty()));
        assert_eq!(created.audit.created_by.as_deref(), Some("alice"));
        assert_eq!(created.audit.created_at, created.audit.modified_at);
        Ok(())
    }

    #[test]
    fn create_keeps_supplied_id() -> Result<(), ServiceError> {
        let created = prepare_create(Addressbook { id: Some("ab1".into()), ..book("Acme") }, &RequestContext::anonymous())?;
        assert_eq!(created.id.as_deref(), Some("ab1"));
        assert_eq!(created.audit.created_by.as_deref(), Some(RequestContext::ANONYMOUS));
        Ok(())
    }

    #[test]
    fn create_rejects_overlong_id() {
        let long = "x".repeat(MAX_ID_LEN + 1);
        let res = prepare_create(Addressbook { id: Some(long), ..book("Acme") }, &RequestContext::anonymous());
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let edge = "x".repeat(MAX_ID_LEN);
        assert!(prepare_create(Addressbook { id: Some(edge), ..book("Acme") }, &RequestContext::anonymous()).is_ok());
    }

    #[test]
    fn update_preserves_creation_and_rejects_id_mismatch() -> Result<(), ServiceError> {
        let existing = prepare_create(Addressbook { id: Some("ab1".into()), ..book("Acme") }, &RequestContext::new("alice"))?;
        let updated = prepare_update(&existing, book("Acme AG"), "ab1", &RequestContext::new("bob"))?;
        assert_eq!(updated.id.as_deref(), Some("ab1"));
        assert_eq!(updated.name, "Acme AG");
        assert_eq!(updated.audit.created_by.as_deref(), Some("alice"));
        assert_eq!(updated.audit.created_at, existing.audit.created_at);
        assert_eq!(updated.audit.modified_by.as_deref(), Some("bob"));

        let mismatch = Addressbook { id: Some("other".into()), ..book("Acme") };
        assert!(matches!(
            prepare_update(&existing, mismatch, "ab1", &RequestContext::anonymous()),
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn update_validates_body() -> Result<(), ServiceError> {
        let existing = prepare_create(book("Acme"), &RequestContext::anonymous())?;
        let id = existing.id.clone().unwrap_or_default();
        assert!(prepare_update(&existing, book(" "), &id, &RequestContext::anonymous()).is_err());
        Ok(())
    }
}
