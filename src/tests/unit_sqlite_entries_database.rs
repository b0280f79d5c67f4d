use crate::database::EntryRepository;
use crate::database::sqlite::SqliteRepository;
use crate::domain::{DEFAULT_STATUS, NewEntry};
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;

// create a sqlite database in memory to test against
async fn setup_test_db() -> SqliteRepository {
    // Connect to a fresh in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // run migrations to create the entries schema
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    SqliteRepository::new(pool)
}

fn mock_entry(name: &str, phone: Option<&str>) -> NewEntry {
    NewEntry::parse(Some(name.to_string()), phone.map(|p| p.to_string()))
        .expect("test input should be a valid entry")
}

// test the database's ability to save and retrieve entries
#[tokio::test]
async fn test_sqlite_insert_and_list() {
    let repo = setup_test_db().await;

    let inserted = repo
        .insert_entry(&mock_entry("Ana", Some("111-1111")))
        .await
        .expect("Should insert entry");
    assert_eq!(inserted.status, DEFAULT_STATUS);

    let entries = repo.list_entries().await.expect("Should query");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, inserted.id);
    assert_eq!(entries[0].name, "Ana");
    assert_eq!(entries[0].phone.as_deref(), Some("111-1111"));
    assert_eq!(entries[0].status, "waiting");
}

// ids come from the primary key, so they are unique and listing follows
// insertion order
#[tokio::test]
async fn test_sqlite_ids_are_unique_and_ordered() {
    let repo = setup_test_db().await;

    let first = repo.insert_entry(&mock_entry("Ana", None)).await.unwrap();
    let second = repo.insert_entry(&mock_entry("Bia", None)).await.unwrap();
    assert!(second.id > first.id);

    let entries = repo.list_entries().await.unwrap();
    assert_eq!(entries[0].name, "Ana");
    assert_eq!(entries[1].name, "Bia");
}

#[tokio::test]
async fn test_sqlite_missing_phone_stays_null() {
    let repo = setup_test_db().await;
    repo.insert_entry(&mock_entry("Ana", None)).await.unwrap();

    let entries = repo.list_entries().await.unwrap();
    assert!(entries[0].phone.is_none());
}

// test that the database deletes entries and reports a second delete as gone
#[tokio::test]
async fn test_sqlite_delete() {
    let repo = setup_test_db().await;
    let entry = repo.insert_entry(&mock_entry("Ana", None)).await.unwrap();

    // attempt to delete the entry
    let removed = repo.delete_entry(entry.id).await.unwrap();
    assert!(removed);

    // deleting it again reports that nothing was there
    let removed_again = repo.delete_entry(entry.id).await.unwrap();
    assert!(!removed_again);

    assert!(repo.list_entries().await.unwrap().is_empty());
}

// the server creates the database file on first boot; make sure that path
// works against a real directory
#[tokio::test]
async fn test_sqlite_database_file_bootstrap() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let db_path = dir.path().join("waitlist.db");
    let database_url = format!("sqlite://{}", db_path.display());

    assert!(!Sqlite::database_exists(&database_url).await.unwrap_or(false));

    Sqlite::create_database(&database_url)
        .await
        .expect("Should create database file");

    assert!(db_path.exists());
}
