use pretty_assertions::assert_eq;
use tests::{
    sample::{self, SampleEntity},
    tests, DbTest,
};
use widecol::{
    driver::{Operation, Rows},
    stmt::{Filter, Put},
};

async fn add_update_is_one_write(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.add_update(&sample::kishore()).await.unwrap();

    let (op, resp) = test.log().pop().expect("Expected write operation");
    let Operation::Write(write) = op else {
        panic!("expected a write; op={op:?}");
    };

    assert_eq!(write.table, "tbl_entity");
    assert_eq!(write.mutations.len(), 1);
    assert_eq!(write.mutations[0].row_key, "1");
    assert_eq!(
        write.mutations[0].puts,
        [
            Put::new("basic", "name", "Kishore Kumar"),
            Put::new("basic", "age", "18"),
            Put::new("other", "entity_score", "21.33"),
            Put::new("varcf", "23", "Calcutta"),
            Put::new("varcf", "14", "Dilli"),
        ]
    );
    assert!(matches!(resp.rows, Rows::Count(1)));

    assert!(test.log().is_empty());
}

async fn get_is_one_get(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.add_update(&sample::kishore()).await.unwrap();
    test.log().clear();

    db.get::<SampleEntity>("1").await.unwrap();

    let (op, resp) = test.log().pop().expect("Expected get operation");
    let Operation::Get(get) = op else {
        panic!("expected a get; op={op:?}");
    };

    assert_eq!(get.table, "tbl_entity");
    assert_eq!(get.row_key, "1");
    assert!(get.filter.is_none());
    assert_eq!(resp.into_rows().await.unwrap().len(), 1);
}

async fn select_by_id_sends_projection(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.add_update(&sample::kishore()).await.unwrap();
    test.log().clear();

    db.select_by_id::<SampleEntity>("1", &["name", "varcf"])
        .await
        .unwrap();

    let (op, _) = test.log().pop().unwrap();
    let Operation::Get(get) = op else {
        panic!("expected a get; op={op:?}");
    };

    assert_eq!(
        get.filter,
        Some(Filter::any([
            Filter::qualifier_prefix("name"),
            Filter::family("varcf"),
        ]))
    );
}

async fn table_name_prefix(test: &mut DbTest) {
    let mut builder = widecol::Db::builder();
    builder.table_name_prefix("/apps/tables/");
    let db = test.setup_db_with(builder).await;

    assert_eq!(
        db.table_name::<SampleEntity>().unwrap(),
        "/apps/tables/tbl_entity"
    );

    db.add_update(&sample::kishore()).await.unwrap();
    db.get::<SampleEntity>("1").await.unwrap().unwrap();
    db.delete::<SampleEntity>("1").await.unwrap();

    assert_eq!(test.log().len(), 3);
    assert_eq!(
        test.log()
            .count(|op| op.table() == "/apps/tables/tbl_entity"),
        3
    );
}

async fn delete_columns_names_columns(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.add_update(&sample::kishore()).await.unwrap();
    test.log().clear();

    db.delete_columns::<SampleEntity>("1", "varcf", &["23", "14"])
        .await
        .unwrap();

    let (op, _) = test.log().pop().unwrap();
    let Operation::Delete(delete) = op else {
        panic!("expected a delete; op={op:?}");
    };

    assert_eq!(delete.row_key, "1");
    assert_eq!(
        delete.columns,
        [
            widecol::stmt::Column::new("varcf", "23"),
            widecol::stmt::Column::new("varcf", "14"),
        ]
    );
}

tests!(
    add_update_is_one_write,
    get_is_one_get,
    select_by_id_sends_projection,
    table_name_prefix,
    delete_columns_names_columns,
);
