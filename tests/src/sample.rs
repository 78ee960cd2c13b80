//! The entity and rows shared by the integration tests.

use indexmap::IndexMap;
use widecol::Db;

pub const TABLE: &str = "tbl_entity";

#[derive(Debug, Default, Clone, PartialEq, widecol::Entity)]
#[table = "tbl_entity"]
pub struct SampleEntity {
    #[key]
    pub row_key: Option<String>,
    pub basic_name: Option<String>,
    pub basic_age: Option<i32>,
    pub other_entity_score: Option<f32>,
    #[dynamic]
    pub varcf: IndexMap<String, String>,
}

impl SampleEntity {
    pub fn new(row_key: &str, name: &str, age: i32, score: f32, varcf: [(&str, &str); 2]) -> Self {
        Self {
            row_key: Some(row_key.to_string()),
            basic_name: Some(name.to_string()),
            basic_age: Some(age),
            other_entity_score: Some(score),
            varcf: varcf
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

pub fn kishore() -> SampleEntity {
    SampleEntity::new(
        "1",
        "Kishore Kumar",
        18,
        21.33,
        [("23", "Calcutta"), ("14", "Dilli")],
    )
}

pub fn arijit() -> SampleEntity {
    SampleEntity::new(
        "2",
        "Arijit Singh",
        25,
        51.728,
        [("23", "Kolkata"), ("14", "Delhi")],
    )
}

pub fn sonu() -> SampleEntity {
    SampleEntity::new(
        "3",
        "Sonu Nigam",
        28,
        31.7,
        [("43", "Calcutta"), ("54", "Dilli")],
    )
}

pub fn rafi() -> SampleEntity {
    SampleEntity::new(
        "4",
        "Mohammed Rafi",
        55,
        617.48,
        [("73", "Shimla"), ("94", "Manali")],
    )
}

pub fn shami() -> SampleEntity {
    SampleEntity::new(
        "5",
        "Mohammed Shami",
        55,
        1007.9,
        [("73", "Bhatinda"), ("94", "Kenchi")],
    )
}

/// Writes the five sample entities, the last three as one batch, then
/// deletes `basic:age` of row "5".
///
/// Returns the entities as they now read back, in row key order.
pub async fn seed(db: &Db) -> Vec<SampleEntity> {
    db.add_update(&kishore()).await.unwrap();
    db.add_update(&arijit()).await.unwrap();
    db.add_update_all(&[sonu(), rafi(), shami()]).await.unwrap();

    db.delete_columns::<SampleEntity>("5", "basic", &["age"])
        .await
        .unwrap();

    let mut shami = shami();
    shami.basic_age = None;

    vec![kishore(), arijit(), sonu(), rafi(), shami]
}
