//! Integration tests for the Postgres schedule store.
//!
//! These need a running Postgres reachable through `DATABASE_URL`, so they
//! are ignored by default: `cargo test -p courtside-db -- --ignored`.

use chrono::{NaiveDate, NaiveTime};
use courtside_core::query::{EventFilter, ListQuery};
use courtside_core::schedule::{DayOfWeek, EventType, ScheduleFields};
use courtside_db::{PgScheduleStore, ScheduleStore, StoreError};
use sqlx::PgPool;

fn dated(title: &str, date: &str, start: Option<&str>) -> ScheduleFields {
    ScheduleFields {
        date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        start_time: start.map(|s| NaiveTime::parse_from_str(s, "%H:%M").unwrap()),
        event_type: Some(EventType::Tournament),
        ..ScheduleFields::titled(title)
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn insert_then_list_returns_generated_identity(pool: PgPool) {
    let store = PgScheduleStore::new(pool);
    let fields = ScheduleFields {
        event_type: Some(EventType::OpenGym),
        day_of_week: Some(DayOfWeek::Tuesday),
        is_recurring: true,
        ..ScheduleFields::titled("Summer Open Gym")
    };

    let created = store.insert(&fields).await.unwrap();
    let listed = store.list(&ListQuery::admin()).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].day_of_week, Some(DayOfWeek::Tuesday));
    assert_eq!(listed[0].date, None);
    assert_eq!(listed[0].start_time, None);
    assert_eq!(listed[0].end_time, None);
    assert_eq!(listed[0].description, None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn public_order_matches_display_rules(pool: PgPool) {
    let store = PgScheduleStore::new(pool);
    store.insert(&ScheduleFields::titled("undated")).await.unwrap();
    store.insert(&dated("ten", "2024-06-01", Some("10:00"))).await.unwrap();
    store.insert(&dated("nine", "2024-06-01", Some("09:00"))).await.unwrap();
    store.insert(&dated("untimed", "2024-06-01", None)).await.unwrap();

    let titles: Vec<String> = store
        .list(&ListQuery::public())
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();

    assert_eq!(titles, ["untimed", "nine", "ten", "undated"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn list_filter_is_applied_in_sql(pool: PgPool) {
    let store = PgScheduleStore::new(pool);
    store.insert(&dated("cup", "2024-06-01", None)).await.unwrap();
    store.insert(&ScheduleFields::titled("untyped")).await.unwrap();

    let query = ListQuery::public().with_filter(EventFilter::Only(EventType::Tournament));
    let listed = store.list(&query).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "cup");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_of_missing_id_is_not_found(pool: PgPool) {
    let store = PgScheduleStore::new(pool);
    let missing = uuid::Uuid::now_v7();

    let result = store
        .update_by_id(missing, &ScheduleFields::titled("ghost"))
        .await;

    assert_eq!(result, Err(StoreError::NotFound(missing)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn delete_removes_the_row(pool: PgPool) {
    let store = PgScheduleStore::new(pool);
    let created = store.insert(&ScheduleFields::titled("gone")).await.unwrap();

    store.delete_by_id(created.id).await.unwrap();

    assert!(store.list(&ListQuery::admin()).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn blank_title_is_rejected_by_the_table(pool: PgPool) {
    let store = PgScheduleStore::new(pool);

    let result = store.insert(&ScheduleFields::titled("  ")).await;

    assert!(matches!(result, Err(StoreError::Rejected(_))));
}
