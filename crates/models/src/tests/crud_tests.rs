use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{db_tests_disabled, now, setup_test_db};
use crate::{address, addressbook, contact};

fn addressbook_row(id: &str) -> addressbook::ActiveModel {
    addressbook::ActiveModel {
        id: Set(id.to_string()),
        name: Set(format!("book {id}")),
        description: Set(None),
        created_at: Set(now()),
        created_by: Set("tester".into()),
        modified_at: Set(now()),
        modified_by: Set("tester".into()),
    }
}

fn contact_row(aid: &str, id: &str) -> contact::ActiveModel {
    contact::ActiveModel {
        addressbook_id: Set(aid.to_string()),
        id: Set(id.to_string()),
        formatted_name: Set(Some("Jo Doe".into())),
        first_name: Set(Some("Jo".into())),
        last_name: Set(Some("Doe".into())),
        middle_name: Set(None),
        prefix: Set(None),
        suffix: Set(None),
        nick_name: Set(None),
        job_title: Set(None),
        department: Set(None),
        company: Set(None),
        org_id: Set(None),
        birthday: Set(None),
        photo_url: Set(None),
        note: Set(None),
        is_favorite: Set(false),
        is_private: Set(false),
        created_at: Set(now()),
        created_by: Set("tester".into()),
        modified_at: Set(now()),
        modified_by: Set("tester".into()),
    }
}

/// Test addressbook CRUD operations
#[tokio::test]
async fn test_addressbook_crud() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let id = format!("crud_ab_{}", Uuid::new_v4());
    let created = addressbook_row(&id).insert(&db).await?;
    assert_eq!(created.name, format!("book {id}"));

    let found = addressbook::Entity::find_by_id(id.clone()).one(&db).await?;
    assert!(found.is_some());

    let mut am: addressbook::ActiveModel = created.into();
    am.name = Set("renamed".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.name, "renamed");

    let res = addressbook::Entity::delete_by_id(id.clone()).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(addressbook::Entity::find_by_id(id).one(&db).await?.is_none());
    Ok(())
}

/// Contacts are keyed by (addressbook_id, id); the same id may live in two books.
#[tokio::test]
async fn test_contact_scope_key() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let a1 = format!("scope_a_{}", Uuid::new_v4());
    let a2 = format!("scope_b_{}", Uuid::new_v4());
    addressbook_row(&a1).insert(&db).await?;
    addressbook_row(&a2).insert(&db).await?;

    contact_row(&a1, "c1").insert(&db).await?;
    contact_row(&a2, "c1").insert(&db).await?;
    assert!(contact_row(&a1, "c1").insert(&db).await.is_err());

    let in_a1 = contact::Entity::find()
        .filter(contact::Column::AddressbookId.eq(a1.clone()))
        .order_by_asc(contact::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(in_a1.len(), 1);

    let adr = address::ActiveModel {
        addressbook_id: Set(a1.clone()),
        owner_kind: Set(address::OWNER_CONTACT.into()),
        owner_id: Set("c1".into()),
        id: Set("adr1".into()),
        address_type: Set("EMAIL".into()),
        attribute_type: Set("WORK".into()),
        msg_type: Set(None),
        value: Set(Some("jo@acme.com".into())),
        street: Set(None),
        postal_code: Set(None),
        city: Set(None),
        country_code: Set(0),
        created_at: Set(now()),
        created_by: Set("tester".into()),
        modified_at: Set(now()),
        modified_by: Set("tester".into()),
    };
    adr.insert(&db).await?;
    let found = address::Entity::find_by_id((a1.clone(), address::OWNER_CONTACT.to_string(), "c1".to_string(), "adr1".to_string()))
        .one(&db)
        .await?;
    assert_eq!(found.and_then(|a| a.value).as_deref(), Some("jo@acme.com"));

    // cleanup
    for aid in [a1, a2] {
        address::Entity::delete_many().filter(address::Column::AddressbookId.eq(aid.clone())).exec(&db).await?;
        contact::Entity::delete_many().filter(contact::Column::AddressbookId.eq(aid.clone())).exec(&db).await?;
        addressbook::Entity::delete_by_id(aid).exec(&db).await?;
    }
    Ok(())
}

#[test]
fn owner_kind_validation() {
    assert!(address::validate_owner_kind("contact").is_ok());
    assert!(address::validate_owner_kind("org").is_ok());
    assert!(address::validate_owner_kind("person").is_err());
}
