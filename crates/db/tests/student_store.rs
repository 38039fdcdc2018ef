//! Postgres-backed store tests. Each test gets a fresh database migrated
//! from `./migrations`.

use assert_matches::assert_matches;
use roster_core::types::StudentId;
use roster_db::models::student::{
    Address, StudentDocument, StudentFilter, UpdateStudent, LIST_LIMIT,
};
use roster_db::{StudentRepo, StudentStore};
use sqlx::PgPool;

fn doc(name: &str, age: i64, city: &str, country: &str) -> StudentDocument {
    StudentDocument {
        name: name.into(),
        age,
        address: Address {
            city: city.into(),
            country: country.into(),
        },
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_and_find_one(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    let id = repo.insert(&doc("Alice", 22, "Austin", "USA")).await.unwrap();

    let student = repo.find_one(id).await.unwrap().unwrap();
    assert_eq!(student.id, id);
    assert_eq!(student.name, "Alice");
    assert_eq!(student.age, 22);
    assert_eq!(student.address.city, "Austin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_one_unknown_id_returns_none(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    assert_matches!(repo.find_one(StudentId::generate()).await, Ok(None));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_many_filters(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    repo.insert(&doc("Alice", 22, "Austin", "USA")).await.unwrap();
    repo.insert(&doc("Bob", 19, "Boston", "USA")).await.unwrap();
    repo.insert(&doc("Chloe", 25, "Paris", "France")).await.unwrap();

    let usa = repo
        .find_many(&StudentFilter {
            country: Some("USA".into()),
            min_age: None,
        })
        .await
        .unwrap();
    assert_eq!(usa.len(), 2);

    let adults = repo
        .find_many(&StudentFilter {
            country: None,
            min_age: Some(20),
        })
        .await
        .unwrap();
    assert_eq!(adults.len(), 2);
    assert!(adults.iter().all(|s| s.age >= 20));

    let both = repo
        .find_many(&StudentFilter {
            country: Some("USA".into()),
            min_age: Some(20),
        })
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].name, "Alice");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_fields_merges_only_present_keys(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    let id = repo.insert(&doc("Alice", 22, "Austin", "USA")).await.unwrap();

    let matched = repo
        .update_fields(
            id,
            &UpdateStudent {
                age: Some(23),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(matched);

    let student = repo.find_one(id).await.unwrap().unwrap();
    assert_eq!(student.age, 23);
    assert_eq!(student.name, "Alice");
    assert_eq!(student.address.country, "USA");

    let missing = repo
        .update_fields(
            StudentId::generate(),
            &UpdateStudent {
                age: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!missing);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_one(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    let id = repo.insert(&doc("Alice", 22, "Austin", "USA")).await.unwrap();

    assert!(repo.delete_one(id).await.unwrap());
    assert!(repo.find_one(id).await.unwrap().is_none());
    assert!(!repo.delete_one(id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_many_caps_at_100(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    for i in 0..105 {
        repo.insert(&doc(&format!("s{i}"), 20, "Austin", "USA"))
            .await
            .unwrap();
    }

    let all = repo.find_many(&StudentFilter::default()).await.unwrap();
    assert_eq!(all.len(), LIST_LIMIT);

    let filtered = repo
        .find_many(&StudentFilter {
            country: Some("USA".into()),
            min_age: Some(20),
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), LIST_LIMIT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_whole_address(pool: PgPool) {
    let repo = StudentRepo::new(pool);
    let id = repo.insert(&doc("Alice", 20, "Austin", "USA")).await.unwrap();

    let matched = repo
        .update_fields(
            id,
            &UpdateStudent {
                address: Some(Address {
                    city: "Lyon".into(),
                    country: "France".into(),
                }),
                ..Default::default()
            },
        )
        .await;
    assert_matches!(matched, Ok(true));

    let student = repo.find_one(id).await.unwrap().unwrap();
    assert_eq!(
        student.address,
        Address {
            city: "Lyon".into(),
            country: "France".into(),
        }
    );
    assert_eq!(student.age, 20);
    assert_eq!(student.name, "Alice");
}
