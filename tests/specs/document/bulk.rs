//! Bulk indexing specs
//!
//! Many documents over one pipelined connection, with failures isolated
//! to the position that caused them.

use crate::prelude::*;
use crate::prelude::assert_eq;

fn doc(id: &str, title: &str) -> Document {
    Document::new(id, 1.0).set("title", title)
}

async fn server_with_index() -> (MockServer, Client<TcpPool>) {
    let server = MockServer::start().await;
    let client = server.client("idx");
    client.create_index(&Schema::default().add_field(Field::text("title"))).await.unwrap();
    (server, client)
}

#[tokio::test]
async fn batch_uses_one_connection() {
    let (server, client) = server_with_index().await;
    let before = server.connections();

    let docs: Vec<Document> = (0..20).map(|i| doc(&format!("doc{i}"), "hello")).collect();
    client.index(&docs).await.unwrap();

    assert_eq!(server.connections(), before + 1);
    assert_eq!(client.info().await.unwrap().doc_count, 20);
}

#[tokio::test]
async fn duplicate_fails_only_its_own_slot() {
    let (_server, client) = server_with_index().await;
    client.index(&[doc("doc2", "first")]).await.unwrap();

    let batch = [doc("doc0", "a"), doc("doc1", "b"), doc("doc2", "again"), doc("doc3", "d")];
    let err = client.index(&batch).await.unwrap_err();
    let errors = err.batch().unwrap();

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.failures().map(|(i, _)| i).collect::<Vec<_>>(), vec![2]);
    assert!(matches!(errors.get(2), Some(Error::Server(msg)) if msg == "Document already exists"));
    assert_eq!(err.to_string(), "[2] server error: Document already exists");

    // The neighbours were indexed; the original doc2 is untouched
    assert_eq!(client.get("doc1").await.unwrap(), Some(doc("doc1", "b")));
    assert_eq!(client.get("doc2").await.unwrap(), Some(doc("doc2", "first")));
    assert_eq!(client.get("doc3").await.unwrap(), Some(doc("doc3", "d")));
}

#[tokio::test]
async fn replace_overwrites_and_partial_merges() {
    let (_server, client) = server_with_index().await;
    let original = Document::new("doc1", 1.0).set("title", "old").set("body", "kept?");
    client.index(&[original]).await.unwrap();

    let partial = Document::new("doc1", 1.0).set("title", "new");
    client.index_options(&IndexingOptions::new().partial(true), &[partial]).await.unwrap();
    let merged = client.get("doc1").await.unwrap().unwrap();
    assert_eq!(merged.get("title").and_then(FieldValue::as_str), Some("new"));
    assert_eq!(merged.get("body").and_then(FieldValue::as_str), Some("kept?"));

    let full = Document::new("doc1", 1.0).set("title", "newer");
    client.index_options(&IndexingOptions::new().replace(true), &[full.clone()]).await.unwrap();
    assert_eq!(client.get("doc1").await.unwrap(), Some(full));
}

#[tokio::test]
async fn empty_batch_never_connects() {
    let (server, client) = server_with_index().await;
    let before = server.connections();
    client.index(&[]).await.unwrap();
    assert_eq!(server.connections(), before);
}
