use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::{db_tests_disabled, now, setup_test_db};
use crate::addressbook;

/// Test transaction rollback leaves no row behind
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let id = format!("tx_rollback_{}", Uuid::new_v4());
    let txn = db.begin().await?;
    let am = addressbook::ActiveModel {
        id: Set(id.clone()),
        name: Set("rollback".into()),
        description: Set(None),
        created_at: Set(now()),
        created_by: Set("tester".into()),
        modified_at: Set(now()),
        modified_by: Set("tester".into()),
    };
    am.insert(&txn).await?;
    txn.rollback().await?;

    assert!(addressbook::Entity::find_by_id(id).one(&db).await?.is_none());
    Ok(())
}
