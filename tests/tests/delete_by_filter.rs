use pretty_assertions::assert_eq;
use tests::{
    sample::{self, SampleEntity},
    tests, DbTest,
};
use widecol::{
    driver::Operation,
    stmt::{CompareOp, Filter},
};

async fn deletes_matching_rows(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;
    test.log().clear();

    let filter = Filter::column_value("basic", "age", CompareOp::Eq, "55").filter_if_missing(true);
    db.delete_by_filter::<SampleEntity>(filter.into())
        .await
        .unwrap();

    // One scan, then one delete per matching row
    assert_eq!(test.log().count(Operation::is_scan), 1);
    assert_eq!(test.log().count(Operation::is_delete), 1);

    let remaining: Vec<_> = db
        .all::<SampleEntity>()
        .await
        .unwrap()
        .into_iter()
        .map(|entity| entity.row_key.unwrap())
        .collect();
    assert_eq!(remaining, ["1", "2", "3", "5"]);
}

async fn no_match_deletes_nothing(test: &mut DbTest) {
    let db = test.setup_db().await;
    let expected = sample::seed(&db).await;
    test.log().clear();

    let filter =
        Filter::column_value("basic", "name", CompareOp::Eq, "Nobody").filter_if_missing(true);
    db.delete_by_filter::<SampleEntity>(filter.into())
        .await
        .unwrap();

    assert!(!test.log().any(Operation::is_delete));
    assert_eq!(db.all::<SampleEntity>().await.unwrap(), expected);
}

tests!(deletes_matching_rows, no_match_deletes_nothing);
