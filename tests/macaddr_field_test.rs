//! Integration tests for MACADDR columns

mod common;

use pgext::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MacAddrTestModel {
    pub id: i32,
    pub addr: MacAddress,
}

impl TableMetadata for MacAddrTestModel {
    fn table_name() -> &'static str {
        "pgext_macaddr_test"
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::serial_primary_key("id"),
            MacAddrField::new("addr").into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NullableMacAddrTestModel {
    pub id: i32,
    pub addr: Option<MacAddress>,
}

impl TableMetadata for NullableMacAddrTestModel {
    fn table_name() -> &'static str {
        "pgext_nullable_macaddr_test"
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::serial_primary_key("id"),
            MacAddrField::new("addr").nullable().into(),
        ]
    }
}

fn mac() -> MacAddress {
    MacAddress::new([0x08, 0x00, 0x2b, 0x01, 0x02, 0x03])
}

#[tokio::test]
async fn test_create_model_with_macaddr_specified() {
    let Some(test) = common::setup::<MacAddrTestModel>().await else {
        return;
    };
    let store = test.db.store::<MacAddrTestModel>();

    let created = store
        .create(MacAddrTestModel { id: 0, addr: mac() })
        .await
        .unwrap();
    assert_eq!(created.addr, mac());

    let found = store.find_one(QueryBuilder::new()).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_get_model_by_macaddr() {
    let Some(test) = common::setup::<MacAddrTestModel>().await else {
        return;
    };
    let store = test.db.store::<MacAddrTestModel>();

    let created = store
        .create(MacAddrTestModel { id: 0, addr: mac() })
        .await
        .unwrap();

    // Both separator styles name the same address
    for text in ["08:00:2b:01:02:03", "08-00-2b-01-02-03"] {
        let query = QueryBuilder::new().lookup::<MacAddrTestModel>("addr", text).unwrap();
        assert_eq!(store.find(query).await.unwrap(), vec![created.clone()]);
    }
}

#[tokio::test]
async fn test_get_model_with_nullable_macaddr() {
    let Some(test) = common::setup::<NullableMacAddrTestModel>().await else {
        return;
    };
    let store = test.db.store::<NullableMacAddrTestModel>();

    let created = store
        .create(NullableMacAddrTestModel { id: 0, addr: None })
        .await
        .unwrap();
    assert_eq!(created.addr, None);

    let found = store.find_one(QueryBuilder::new()).await.unwrap();
    assert_eq!(found, Some(created));
}
