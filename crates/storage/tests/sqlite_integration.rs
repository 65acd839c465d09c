use sqlx::Row;
use storage::repository::{CursorRecord, CursorRepository, Storage};
use storage::sqlite::SqliteRepository;
use vocab_core::model::EntryIndex;
use vocab_core::time::fixed_now;

#[tokio::test]
async fn sqlite_roundtrips_cursor_slot() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_cursor?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let now = fixed_now();
    repo.save_cursor(&CursorRecord::from_position(EntryIndex::new(5), now))
        .await
        .unwrap();

    let loaded = repo.load_cursor().await.unwrap().expect("saved slot");
    assert_eq!(loaded.position, "5");
    assert_eq!(loaded.updated_at, now);
}

#[tokio::test]
async fn sqlite_absent_slot_reads_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_absent?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load_cursor().await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_slot_holds_a_single_row() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_single?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let now = fixed_now();
    repo.save_cursor(&CursorRecord::from_position(EntryIndex::new(3), now))
        .await
        .unwrap();
    repo.save_cursor(&CursorRecord::from_position(EntryIndex::new(9), now))
        .await
        .unwrap();

    let loaded = repo.load_cursor().await.unwrap().expect("saved slot");
    assert_eq!(loaded.position, "9");

    let row = sqlx::query("SELECT COUNT(*) AS n FROM cursor_state")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    let count: i64 = row.try_get("n").unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn sqlite_migrations_run_twice() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.save_cursor(&CursorRecord::new("2", fixed_now()))
        .await
        .unwrap();
    let loaded = repo.load_cursor().await.unwrap().expect("saved slot");
    assert_eq!(loaded.position, "2");
}

#[tokio::test]
async fn storage_aggregate_uses_sqlite_backend() {
    let storage = Storage::sqlite("sqlite:file:memdb_agg?mode=memory&cache=shared")
        .await
        .expect("storage");

    let now = fixed_now();
    storage
        .cursor
        .save_cursor(&CursorRecord::from_position(EntryIndex::new(1), now))
        .await
        .unwrap();

    let loaded = storage.cursor.load_cursor().await.unwrap().expect("saved slot");
    assert_eq!(loaded.position, "1");
    assert_eq!(loaded.updated_at, now);
}
