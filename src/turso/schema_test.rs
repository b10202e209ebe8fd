use super::*;
use tempfile::TempDir;

async fn open_client(temp_dir: &TempDir) -> TursoClient {
    TursoClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client")
}

async fn table_exists(client: &TursoClient, name: &str) -> bool {
    let mut rows = client
        .query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            libsql::params![name.to_string()],
        )
        .await
        .unwrap();
    rows.next().await.unwrap().is_some()
}

#[tokio::test]
async fn test_fresh_database_gets_current_version() {
    let temp_dir = TempDir::new().unwrap();
    let client = open_client(&temp_dir).await;

    assert_eq!(get_schema_version(&client).await.unwrap(), 0);
    initialize_schema(&client).await.unwrap();

    assert_eq!(get_schema_version(&client).await.unwrap(), SCHEMA_VERSION);
    assert!(table_exists(&client, "subject").await);
    assert!(table_exists(&client, "dictionary").await);
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let client = open_client(&temp_dir).await;

    initialize_schema(&client).await.unwrap();
    initialize_schema(&client).await.unwrap();

    assert_eq!(get_schema_version(&client).await.unwrap(), SCHEMA_VERSION);
}

#[tokio::test]
async fn test_newer_schema_version_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let client = open_client(&temp_dir).await;

    client
        .execute(
            "CREATE TABLE schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await
        .unwrap();
    client
        .execute("INSERT INTO schema_version (version) VALUES (99)", ())
        .await
        .unwrap();

    initialize_schema(&client).await.unwrap();

    assert_eq!(get_schema_version(&client).await.unwrap(), 99);
    assert!(!table_exists(&client, "dictionary").await);
}
