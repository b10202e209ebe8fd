use super::*;
use crate::commands::{self, WordForm};
use crate::session::SessionStore;
use crate::turso::{get_schema_version, SCHEMA_VERSION};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        data_dir: dir.path().to_path_buf(),
        database_file: "test.db".to_string(),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_build_creates_database_with_schema() {
    let temp_dir = TempDir::new().unwrap();
    let app = build(test_config(&temp_dir)).await.unwrap();

    assert_eq!(app.client.db_path(), temp_dir.path().join("test.db"));
    assert!(app.client.db_path().exists());
    assert_eq!(get_schema_version(&app.client).await.unwrap(), SCHEMA_VERSION);
}

#[tokio::test]
async fn test_build_uses_configured_session_ttl() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig {
        session_ttl_secs: 60,
        ..test_config(&temp_dir)
    };
    let app = build(config).await.unwrap();

    assert_eq!(app.config.session_ttl_secs, 60);
    assert!(app.sessions.is_empty());
}

#[tokio::test]
async fn test_build_twice_reuses_database() {
    let temp_dir = TempDir::new().unwrap();

    let first = build(test_config(&temp_dir)).await.unwrap();
    let subject = first.client.add_subject("owner", "English").await.unwrap();
    drop(first);

    let second = build(test_config(&temp_dir)).await.unwrap();
    let subjects = second.client.list_subjects("owner").await.unwrap();
    assert_eq!(subjects, vec![subject]);
}

#[tokio::test]
async fn test_staged_words_reach_database() {
    let temp_dir = TempDir::new().unwrap();
    let app = build(test_config(&temp_dir)).await.unwrap();

    let subject = app.client.add_subject("owner", "English").await.unwrap();
    let dictionary = app
        .client
        .add_dictionary(&subject.id, "Animals", None)
        .await
        .unwrap();
    let session = app.sessions.create_session();

    commands::add_word(&app.state, &session, &dictionary.id, WordForm::new("cat", "kot"))
        .await
        .unwrap();
    commands::confirm_words(&app.state, &session, &dictionary.id)
        .await
        .unwrap();

    let saved = app.client.get_dictionary(&dictionary.id).await.unwrap();
    assert_eq!(saved.words.get("kot"), Some(&"cat".to_string()));
    assert!(app
        .sessions
        .get(&session, &dictionary.staging_key())
        .unwrap()
        .is_none());
}
