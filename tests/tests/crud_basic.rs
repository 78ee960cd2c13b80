use pretty_assertions::assert_eq;
use tests::{
    sample::{self, SampleEntity},
    tests, DbTest,
};

async fn add_update_then_get(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.add_update(&sample::kishore()).await.unwrap();

    let fetched = db.get::<SampleEntity>("1").await.unwrap().unwrap();
    assert_eq!(fetched, sample::kishore());
    assert_eq!(fetched.basic_age, Some(18));
    assert_eq!(fetched.varcf["23"], "Calcutta");
    assert_eq!(fetched.varcf["14"], "Dilli");
}

async fn get_missing_row(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    assert!(db.get::<SampleEntity>("42").await.unwrap().is_none());
}

async fn get_from_empty_store(test: &mut DbTest) {
    let db = test.setup_db().await;

    assert!(db.get::<SampleEntity>("1").await.unwrap().is_none());
    assert!(db.all::<SampleEntity>().await.unwrap().is_empty());
}

async fn all_reads_every_entity(test: &mut DbTest) {
    let db = test.setup_db().await;
    let expected = sample::seed(&db).await;

    let all = db.all::<SampleEntity>().await.unwrap();
    assert_eq!(all, expected);
}

async fn update_is_sparse(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.add_update(&sample::kishore()).await.unwrap();

    // Only the name is set, every other column keeps its value.
    let update = SampleEntity {
        row_key: Some("1".to_string()),
        basic_name: Some("Kishore".to_string()),
        ..Default::default()
    };
    db.add_update(&update).await.unwrap();

    let fetched = db.get::<SampleEntity>("1").await.unwrap().unwrap();
    assert_eq!(fetched.basic_name.as_deref(), Some("Kishore"));
    assert_eq!(fetched.basic_age, Some(18));
    assert_eq!(fetched.varcf.len(), 2);
}

async fn group_entries_accumulate(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.add_update(&sample::kishore()).await.unwrap();

    let mut update = SampleEntity {
        row_key: Some("1".to_string()),
        ..Default::default()
    };
    update.varcf.insert("99".to_string(), "Bombay".to_string());
    db.add_update(&update).await.unwrap();

    let fetched = db.get::<SampleEntity>("1").await.unwrap().unwrap();
    assert_eq!(fetched.varcf.len(), 3);
    assert_eq!(fetched.varcf["99"], "Bombay");
    assert_eq!(fetched.varcf["23"], "Calcutta");
}

async fn missing_row_key_is_rejected(test: &mut DbTest) {
    let db = test.setup_db().await;

    let mut entity = sample::kishore();
    entity.row_key = None;

    let err = db.add_update(&entity).await.unwrap_err();
    assert!(err.is_missing_row_key());
    assert!(!test.log().has_write());
}

async fn delete_row(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    db.delete::<SampleEntity>("2").await.unwrap();

    assert!(db.get::<SampleEntity>("2").await.unwrap().is_none());

    let keys: Vec<_> = db
        .all::<SampleEntity>()
        .await
        .unwrap()
        .into_iter()
        .map(|entity| entity.row_key.unwrap())
        .collect();
    assert_eq!(keys, ["1", "3", "4", "5"]);
}

async fn delete_columns(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let shami = db.get::<SampleEntity>("5").await.unwrap().unwrap();
    assert_eq!(shami.basic_age, None);
    assert_eq!(shami.basic_name.as_deref(), Some("Mohammed Shami"));

    db.delete_columns::<SampleEntity>("5", "varcf", &["73"])
        .await
        .unwrap();

    let shami = db.get::<SampleEntity>("5").await.unwrap().unwrap();
    assert_eq!(shami.varcf.len(), 1);
    assert_eq!(shami.varcf["94"], "Kenchi");
}

async fn delete_no_columns_is_noop(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;
    test.log().clear();

    db.delete_columns::<SampleEntity>("1", "basic", &[])
        .await
        .unwrap();

    assert!(test.log().is_empty());
    assert_eq!(
        db.get::<SampleEntity>("1").await.unwrap().unwrap(),
        sample::kishore()
    );
}

tests!(
    add_update_then_get,
    get_missing_row,
    get_from_empty_store,
    all_reads_every_entity,
    update_is_sparse,
    group_entries_accumulate,
    missing_row_key_is_rejected,
    delete_row,
    delete_columns,
    delete_no_columns_is_noop,
);
