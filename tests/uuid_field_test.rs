//! Integration tests for UUID columns

mod common;

use pgext::prelude::*;

const UID: &str = "2b077a49-0dbe-4dd1-88a1-9aebe3cb7653";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UuidTestModel {
    pub id: i32,
    pub uid: Uuid,
}

impl TableMetadata for UuidTestModel {
    fn table_name() -> &'static str {
        "pgext_uuid_test"
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::serial_primary_key("id"),
            UuidField::new("uid").into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NullableUuidTestModel {
    pub id: i32,
    pub uid: Option<Uuid>,
}

impl TableMetadata for NullableUuidTestModel {
    fn table_name() -> &'static str {
        "pgext_nullable_uuid_test"
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::serial_primary_key("id"),
            UuidField::new("uid").nullable().into(),
        ]
    }
}

fn uid() -> Uuid {
    Uuid::parse_str(UID).unwrap()
}

#[tokio::test]
async fn test_create_model_with_uuid_specified() {
    let Some(test) = common::setup::<UuidTestModel>().await else {
        return;
    };
    let store = test.db.store::<UuidTestModel>();

    let created = store
        .create(UuidTestModel { id: 0, uid: uid() })
        .await
        .unwrap();
    assert_eq!(created.uid.to_string(), UID);

    let found = store.find_one(QueryBuilder::new()).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_get_model_by_uuid() {
    let Some(test) = common::setup::<UuidTestModel>().await else {
        return;
    };
    let store = test.db.store::<UuidTestModel>();

    let created = store
        .create(UuidTestModel { id: 0, uid: uid() })
        .await
        .unwrap();
    store
        .create(UuidTestModel {
            id: 0,
            uid: Uuid::new_v4(),
        })
        .await
        .unwrap();

    // Text is parsed before binding
    let query = QueryBuilder::new().lookup::<UuidTestModel>("uid", UID).unwrap();
    assert_eq!(store.find(query).await.unwrap(), vec![created.clone()]);

    let query = QueryBuilder::new()
        .filter(UuidField::new("uid").in_values(vec![UID.into()]).unwrap());
    assert_eq!(store.find(query).await.unwrap(), vec![created]);

    let excluded = store
        .count_where(QueryBuilder::new().lookup::<UuidTestModel>("uid__ne", UID).unwrap())
        .await
        .unwrap();
    assert_eq!(excluded, 1);
}

#[tokio::test]
async fn test_get_model_with_nullable_uuid() {
    let Some(test) = common::setup::<NullableUuidTestModel>().await else {
        return;
    };
    let store = test.db.store::<NullableUuidTestModel>();

    let created = store
        .create(NullableUuidTestModel { id: 0, uid: None })
        .await
        .unwrap();
    assert_eq!(created.uid, None);

    let found = store.find_one(QueryBuilder::new()).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_create_table_validates_names() {
    #[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
    struct BadTable {
        id: i32,
    }

    impl TableMetadata for BadTable {
        fn table_name() -> &'static str {
            "select"
        }

        fn fields() -> Vec<FieldDef> {
            vec![FieldDef::serial_primary_key("id")]
        }
    }

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return;
    };
    let db = PgExt::from_pool(PgPool::connect_lazy(&database_url).unwrap());
    assert!(matches!(
        db.create_table::<BadTable>(false).await,
        Err(PgExtError::Validation(_))
    ));
}
