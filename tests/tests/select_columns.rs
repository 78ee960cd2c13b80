use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tests::{
    sample::{self, SampleEntity},
    tests, DbTest,
};
use widecol::stmt::{CompareOp, Filter, Value};

fn group(entries: [(&str, &str); 2]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
    )
}

async fn select_projects_columns(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let records = db
        .select::<SampleEntity>(&["name", "age", "varcf"])
        .await
        .unwrap();

    assert_eq!(records.len(), 5);

    let first = &records[0];
    assert_eq!(
        first.columns().collect::<Vec<_>>(),
        ["row_key", "age", "name", "varcf"]
    );
    assert_eq!(first.row_key(), Some("1"));
    assert_eq!(first.get("name"), Some(&Value::from("Kishore Kumar")));
    assert_eq!(first.get("age"), Some(&Value::from("18")));
    assert_eq!(
        first.get("varcf"),
        Some(&group([("14", "Dilli"), ("23", "Calcutta")]))
    );
    assert!(!first.contains("entity_score"));

    // Row "5" lost its age column
    let last = &records[4];
    assert_eq!(
        last.columns().collect::<Vec<_>>(),
        ["row_key", "name", "varcf"]
    );
}

async fn select_by_qualifier_prefix(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let records = db.select::<SampleEntity>(&["name"]).await.unwrap();
    assert_eq!(records.len(), 5);

    for record in &records {
        assert_eq!(record.columns().collect::<Vec<_>>(), ["row_key", "name"]);
    }

    let names: Vec<_> = records
        .iter()
        .map(|record| record.get("name").and_then(Value::as_str).unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Kishore Kumar",
            "Arijit Singh",
            "Sonu Nigam",
            "Mohammed Rafi",
            "Mohammed Shami",
        ]
    );
}

async fn select_by_id(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let record = db
        .select_by_id::<SampleEntity>("1", &["name", "age", "entity_score"])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        record.columns().collect::<Vec<_>>(),
        ["row_key", "age", "name", "entity_score"]
    );
    assert_eq!(record.get("entity_score"), Some(&Value::from("21.33")));

    assert!(db
        .select_by_id::<SampleEntity>("42", &["name"])
        .await
        .unwrap()
        .is_none());
}

async fn select_unknown_column_is_empty(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let records = db.select::<SampleEntity>(&["nickname"]).await.unwrap();
    assert!(records.is_empty());
}

async fn select_filtered_by_value(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let filter = Filter::column_value("basic", "name", CompareOp::Eq, "Kishore Kumar")
        .filter_if_missing(true);

    let records = db
        .select_filtered::<SampleEntity>(filter.into(), &["age", "varcf"])
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].row_key(), Some("1"));
    assert_eq!(
        records[0].columns().collect::<Vec<_>>(),
        ["row_key", "age", "varcf"]
    );
}

async fn records_serialize_as_json(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let record = db
        .select_by_id::<SampleEntity>("2", &["name", "varcf"])
        .await
        .unwrap()
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"row_key":"2","name":"Arijit Singh","varcf":{"14":"Delhi","23":"Kolkata"}}"#
    );
}

tests!(
    select_projects_columns,
    select_by_qualifier_prefix,
    select_by_id,
    select_unknown_column_is_empty,
    select_filtered_by_value,
    records_serialize_as_json,
);
