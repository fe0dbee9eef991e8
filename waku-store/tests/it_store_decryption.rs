use std::sync::Arc;

use waku_core::content_topic::ContentTopic;
use waku_core::message::WakuMessage;
use waku_payload::version_1::{generate_private_key, generate_symmetric_key, public_key};
use waku_payload::{
    encode, DecodedMessage, DecryptionKeyEntry, DecryptionMethod, EncodeOptions, KeyScope,
};
use waku_store::{PageControl, QueryOptions, WakuStore};

use crate::testlib::{MemoryStore, MockTransport};

mod testlib;

const TEST_CONTENT_TOPIC: &str = "/test/1/waku-store/utf8";
const OTHER_CONTENT_TOPIC: &str = "/test/1/waku-store-other/utf8";

const T0: i64 = 1_680_000_000_000_000_000;

fn message(text: &str, topic: &str, timestamp: i64, options: &EncodeOptions) -> WakuMessage {
    encode(text.as_bytes().to_vec(), topic, timestamp, options).expect("message to be encoded")
}

fn payloads(messages: &[DecodedMessage]) -> Vec<&str> {
    messages
        .iter()
        .map(|msg| msg.payload_as_utf8().unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn it_retrieves_history_with_symmetric_and_asymmetric_encrypted_messages() {
    testlib::init_logger();

    // Given
    let symmetric_key = generate_symmetric_key();
    let private_key = generate_private_key();
    let other_private_key = generate_private_key();

    let archive = MemoryStore::new();
    archive.push(message(
        "Clear text message",
        TEST_CONTENT_TOPIC,
        T0,
        &EncodeOptions::default(),
    ));
    archive.push(message(
        "This message is encrypted using symmetric encryption",
        TEST_CONTENT_TOPIC,
        T0 + 1,
        &EncodeOptions::symmetric(symmetric_key.clone()),
    ));
    archive.push(message(
        "This message is encrypted for me using asymmetric",
        TEST_CONTENT_TOPIC,
        T0 + 2,
        &EncodeOptions::asymmetric(public_key(&private_key).unwrap()),
    ));
    archive.push(message(
        "This message is not for me",
        TEST_CONTENT_TOPIC,
        T0 + 3,
        &EncodeOptions::asymmetric(public_key(&other_private_key).unwrap()),
    ));

    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));
    store.add_decryption_key(symmetric_key, DecryptionMethod::Symmetric, KeyScope::All);
    store.add_decryption_key(private_key, DecryptionMethod::Asymmetric, KeyScope::All);

    // When
    let messages = store
        .query_history(&[], QueryOptions::default())
        .await
        .expect("query to succeed");

    // Then
    assert_eq!(
        payloads(&messages),
        vec![
            "Clear text message",
            "This message is encrypted using symmetric encryption",
            "This message is encrypted for me using asymmetric",
        ]
    );
}

#[tokio::test]
async fn it_only_tries_keys_scoped_to_the_message_content_topic() {
    testlib::init_logger();

    // Given
    let topic_key = generate_symmetric_key();
    let other_topic_key = generate_symmetric_key();

    let archive = MemoryStore::new();
    archive.push(message(
        "Encrypted for the test topic",
        TEST_CONTENT_TOPIC,
        T0,
        &EncodeOptions::symmetric(topic_key.clone()),
    ));
    archive.push(message(
        "Encrypted for the other topic",
        OTHER_CONTENT_TOPIC,
        T0 + 1,
        &EncodeOptions::symmetric(other_topic_key.clone()),
    ));
    // Encrypted with the test topic key, on the other topic
    archive.push(message(
        "Wrong topic for this key",
        OTHER_CONTENT_TOPIC,
        T0 + 2,
        &EncodeOptions::symmetric(topic_key.clone()),
    ));

    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));
    store.add_decryption_key(
        topic_key,
        DecryptionMethod::Symmetric,
        KeyScope::content_topics([TEST_CONTENT_TOPIC]),
    );
    store.add_decryption_key(
        other_topic_key,
        DecryptionMethod::Symmetric,
        KeyScope::content_topics([OTHER_CONTENT_TOPIC]),
    );

    // When
    let content_topics: Vec<ContentTopic> =
        vec![TEST_CONTENT_TOPIC.into(), OTHER_CONTENT_TOPIC.into()];
    let messages = store
        .query_history(&content_topics, QueryOptions::default())
        .await
        .expect("query to succeed");

    // Then
    assert_eq!(
        payloads(&messages),
        vec!["Encrypted for the test topic", "Encrypted for the other topic"]
    );
}

#[tokio::test]
async fn it_decrypts_with_keys_given_to_the_query() {
    testlib::init_logger();

    // Given
    let private_key = generate_private_key();

    let archive = MemoryStore::new();
    archive.push(message(
        "Only this query can read me",
        TEST_CONTENT_TOPIC,
        T0,
        &EncodeOptions::asymmetric(public_key(&private_key).unwrap()),
    ));
    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));

    // When
    let without_key = store
        .query_history(&[], QueryOptions::default())
        .await
        .expect("query to succeed");
    let with_key = store
        .query_history(
            &[],
            QueryOptions::default()
                .with_decryption_key(DecryptionKeyEntry::asymmetric(private_key)),
        )
        .await
        .expect("query to succeed");

    // Then
    assert!(without_key.is_empty());
    assert_eq!(payloads(&with_key), vec!["Only this query can read me"]);
    assert!(store.decryption_keys().is_empty());
}

#[tokio::test]
async fn it_stops_decrypting_once_the_key_is_removed() {
    testlib::init_logger();

    // Given
    let symmetric_key = generate_symmetric_key();

    let archive = MemoryStore::new();
    archive.push(message(
        "Secret",
        TEST_CONTENT_TOPIC,
        T0,
        &EncodeOptions::symmetric(symmetric_key.clone()),
    ));
    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));
    store.add_decryption_key(
        symmetric_key.clone(),
        DecryptionMethod::Symmetric,
        KeyScope::All,
    );

    let before = store
        .query_history(&[], QueryOptions::default())
        .await
        .expect("query to succeed");

    // When
    let removed = store.remove_decryption_key(&symmetric_key);

    // Then
    let after = store
        .query_history(&[], QueryOptions::default())
        .await
        .expect("query to succeed");
    assert_eq!(removed, 1);
    assert_eq!(payloads(&before), vec!["Secret"]);
    assert!(after.is_empty());
}

#[tokio::test]
async fn it_hands_pages_with_nothing_to_read_to_the_callback() {
    testlib::init_logger();

    // Given
    let symmetric_key = generate_symmetric_key();

    let archive = MemoryStore::new();
    archive.push(message(
        "Unreadable",
        TEST_CONTENT_TOPIC,
        T0,
        &EncodeOptions::symmetric(generate_symmetric_key()),
    ));
    archive.push(message(
        "Readable",
        TEST_CONTENT_TOPIC,
        T0 + 1,
        &EncodeOptions::symmetric(symmetric_key.clone()),
    ));
    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));
    store.add_decryption_key(symmetric_key, DecryptionMethod::Symmetric, KeyScope::All);

    // When
    let mut pages = Vec::new();
    store
        .query_history_with(&[], QueryOptions::default().with_page_size(1), |page| {
            pages.push(page);
            PageControl::Continue
        })
        .await
        .expect("query to succeed");

    // Then
    assert_eq!(pages.len(), 2);
    assert!(pages[0].is_empty());
    assert_eq!(payloads(&pages[1]), vec!["Readable"]);
    assert_eq!(store.transport().round_trips(), 3);
}

#[tokio::test]
async fn it_stops_on_a_page_with_nothing_to_read() {
    testlib::init_logger();

    // Given
    let archive = MemoryStore::new();
    for i in 0..2 {
        archive.push(message(
            &format!("Not for me {i}"),
            TEST_CONTENT_TOPIC,
            T0 + i,
            &EncodeOptions::symmetric(generate_symmetric_key()),
        ));
    }
    let store = WakuStore::new(MockTransport::serving(Arc::new(archive)));
    store.add_decryption_key(
        generate_symmetric_key(),
        DecryptionMethod::Symmetric,
        KeyScope::All,
    );

    // When
    let mut calls = 0;
    store
        .query_history_with(&[], QueryOptions::default().with_page_size(1), |page| {
            assert!(page.is_empty());
            calls += 1;
            PageControl::Stop
        })
        .await
        .expect("query to succeed");

    // Then
    assert_eq!(calls, 1);
    assert_eq!(store.transport().round_trips(), 1);
}
