use pretty_assertions::assert_eq;
use tests::{
    sample::{self, SampleEntity},
    tests, DbTest,
};
use widecol::{db::Scan, driver::Operation, stmt::Filter};

async fn scan_keys(db: &widecol::Db, scan: Scan) -> Vec<String> {
    db.scan::<SampleEntity>(scan)
        .await
        .unwrap()
        .into_iter()
        .map(|entity| entity.row_key.unwrap())
        .collect()
}

async fn start_is_inclusive_stop_is_exclusive(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    assert_eq!(scan_keys(&db, Scan::new().start("2").stop("4")).await, ["2", "3"]);
    assert_eq!(scan_keys(&db, Scan::new().start("4")).await, ["4", "5"]);
    assert_eq!(scan_keys(&db, Scan::new().stop("2")).await, ["1"]);
}

async fn empty_range(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    assert!(scan_keys(&db, Scan::new().start("4").stop("4")).await.is_empty());
    assert!(scan_keys(&db, Scan::new().start("5").stop("1")).await.is_empty());
}

async fn range_and_filter(test: &mut DbTest) {
    let db = test.setup_db().await;
    sample::seed(&db).await;

    let entities = db
        .scan::<SampleEntity>(Scan::new().start("3").filter(Filter::family("varcf")))
        .await
        .unwrap();

    assert_eq!(entities.len(), 3);
    assert!(entities.iter().all(|entity| entity.basic_name.is_none()));
    assert_eq!(entities[2].varcf["73"], "Bhatinda");
}

async fn scan_carries_caching(test: &mut DbTest) {
    let mut builder = widecol::Db::builder();
    builder.scan_caching(100);
    let db = test.setup_db_with(builder).await;

    db.all::<SampleEntity>().await.unwrap();

    let (op, _) = test.log().pop().unwrap();
    let Operation::Scan(scan) = op else {
        panic!("expected a scan; op={op:?}");
    };

    assert_eq!(scan.caching, 100);
    assert_eq!(scan.start, None);
    assert_eq!(scan.stop, None);
    assert!(scan.filter.is_none());
}

tests!(
    start_is_inclusive_stop_is_exclusive,
    empty_range,
    range_and_filter,
    scan_carries_caching,
);
