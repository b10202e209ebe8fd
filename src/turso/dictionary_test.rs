use crate::dictionary::{Dictionary, DictionaryError, Subject, Words};
use crate::storage::DictionaryStoreBackend;
use crate::turso::{initialize_schema, TursoClient};
use tempfile::TempDir;

async fn setup_client() -> (TursoClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = TursoClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client");
    initialize_schema(&client)
        .await
        .expect("Failed to initialize schema");
    (client, temp_dir)
}

async fn setup_subject(client: &TursoClient) -> Subject {
    client
        .add_subject("user-1", "Język angielski")
        .await
        .expect("Failed to add subject")
}

fn words(pairs: &[(&str, &str)]) -> Words {
    pairs
        .iter()
        .map(|(d, w)| (d.to_string(), w.to_string()))
        .collect()
}

#[tokio::test]
async fn test_add_dictionary() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;

    let dictionary = client
        .add_dictionary(&subject.id, "Podręcznik", Some("Klasa I".to_string()))
        .await
        .expect("Failed to add dictionary");

    assert!(!dictionary.id.is_empty(), "ID should be generated");
    assert_eq!(dictionary.subject_id, subject.id);
    assert_eq!(dictionary.slug, "podrecznik");
    assert_eq!(dictionary.description, Some("Klasa I".to_string()));
    assert!(dictionary.words.is_empty());

    let loaded = client.get_dictionary(&dictionary.id).await.unwrap();
    assert_eq!(loaded, dictionary);
}

#[tokio::test]
async fn test_blank_description_is_stored_as_none() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;

    let dictionary = client
        .add_dictionary(&subject.id, "Książka", Some("   ".to_string()))
        .await
        .unwrap();

    assert_eq!(client.get_dictionary(&dictionary.id).await.unwrap().description, None);
}

#[tokio::test]
async fn test_duplicate_slug_in_subject_fails() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;

    client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();
    let result = client.add_dictionary(&subject.id, "unit-1", None).await;

    assert_eq!(result, Err(DictionaryError::DuplicateSlug("unit-1".to_string())));
}

#[tokio::test]
async fn test_same_slug_in_other_subject_is_allowed() {
    let (client, _temp) = setup_client().await;
    let english = setup_subject(&client).await;
    let german = client.add_subject("user-1", "Niemiecki").await.unwrap();

    client.add_dictionary(&english.id, "Unit 1", None).await.unwrap();
    client
        .add_dictionary(&german.id, "Unit 1", None)
        .await
        .expect("Other subject may reuse the slug");
}

#[tokio::test]
async fn test_add_dictionary_to_missing_subject_fails() {
    let (client, _temp) = setup_client().await;

    let result = client.add_dictionary("missing", "Unit 1", None).await;

    match result {
        Err(DictionaryError::PersistenceError(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected PersistenceError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_and_get_by_slug() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;

    let zwierzeta = client.add_dictionary(&subject.id, "Zwierzęta", None).await.unwrap();
    client.add_dictionary(&subject.id, "Anatomia", None).await.unwrap();

    let slugs: Vec<String> = client
        .list_dictionaries(&subject.id)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.slug)
        .collect();
    assert_eq!(slugs, vec!["anatomia", "zwierzeta"]);

    assert_eq!(
        client
            .get_dictionary_by_slug(&subject.id, "zwierzeta")
            .await
            .unwrap(),
        zwierzeta
    );
    assert!(matches!(
        client.get_dictionary_by_slug(&subject.id, "nope").await,
        Err(DictionaryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_dictionary_keeps_words() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;
    let dictionary = client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();
    client
        .update_dictionary_words(&dictionary.id, &words(&[("kot", "cat")]))
        .await
        .unwrap();

    let updated = client
        .update_dictionary(&dictionary.id, "Unit 2", Some("Powtórka".to_string()))
        .await
        .unwrap();

    assert_eq!(updated.slug, "unit-2");
    assert_eq!(updated.description, Some("Powtórka".to_string()));
    assert_eq!(updated.words, words(&[("kot", "cat")]));
    assert_eq!(client.get_dictionary(&dictionary.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_words_round_trip_preserves_order() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;
    let dictionary = client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();

    let stored = words(&[("wojna", "war"), ("anioł", "angel"), ("miłość", "love")]);
    client
        .update_dictionary_words(&dictionary.id, &stored)
        .await
        .unwrap();

    let loaded = client.get_dictionary(&dictionary.id).await.unwrap();
    assert_eq!(
        loaded.words.keys().collect::<Vec<_>>(),
        vec!["wojna", "anioł", "miłość"]
    );
    assert_eq!(loaded.words, stored);
}

#[tokio::test]
async fn test_update_words_of_missing_dictionary() {
    let (client, _temp) = setup_client().await;

    let result = client.update_dictionary_words("missing", &Words::new()).await;
    assert_eq!(result, Err(DictionaryError::NotFound("missing".to_string())));
}

#[tokio::test]
async fn test_delete_dictionary() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;
    let dictionary = client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();

    client.delete_dictionary(&dictionary.id).await.unwrap();

    assert!(matches!(
        client.get_dictionary(&dictionary.id).await,
        Err(DictionaryError::NotFound(_))
    ));
    assert!(matches!(
        client.delete_dictionary(&dictionary.id).await,
        Err(DictionaryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_deleting_subject_cascades() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;
    let dictionary = client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();

    client.delete_subject(&subject.id).await.unwrap();

    assert!(matches!(
        client.get_dictionary(&dictionary.id).await,
        Err(DictionaryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_store_backend_saves_only_words() {
    let (client, _temp) = setup_client().await;
    let subject = setup_subject(&client).await;
    let created = client.add_dictionary(&subject.id, "Unit 1", None).await.unwrap();

    let mut dictionary: Dictionary = client.load_dictionary(&created.id).await.unwrap();
    dictionary.words = words(&[("pies", "dog")]);
    dictionary.title = "Ignored".to_string();
    client.save_dictionary(&dictionary).await.unwrap();

    let reloaded = client.load_dictionary(&created.id).await.unwrap();
    assert_eq!(reloaded.words, words(&[("pies", "dog")]));
    assert_eq!(reloaded.title, "Unit 1");
}
