//! Search specs
//!
//! Paging, reply-shaping flags, and query explanation.

use crate::prelude::*;
use crate::prelude::assert_eq;

async fn catalog() -> (MockServer, Client<TcpPool>) {
    let server = MockServer::start().await;
    let client = server.client("idx");
    client.create_index(&Schema::default().add_field(Field::text("title"))).await.unwrap();
    let mut docs: Vec<Document> =
        (0..15).map(|i| Document::new(format!("hello{i}"), 1.0).set("title", format!("hello world {i}"))).collect();
    docs.push(Document::new("bye", 0.5).set("title", "goodbye").set_payload(b"p".to_vec()));
    client.index(&docs).await.unwrap();
    (server, client)
}

#[tokio::test]
async fn total_counts_every_match_not_just_the_page() {
    let (_server, client) = catalog().await;

    let first = client.search(&Query::new("hello")).await.unwrap();
    assert_eq!(first.total, 15);
    assert_eq!(first.docs.len(), 10);

    let rest = client.search(&Query::new("hello").limit(10, 10)).await.unwrap();
    assert_eq!(rest.total, 15);
    assert_eq!(rest.docs.len(), 5);
    assert_eq!(rest.docs[0].id, "hello10");
}

#[tokio::test]
async fn count_only_query() {
    let (_server, client) = catalog().await;
    let result = client.search(&Query::new("*").limit(0, 0)).await.unwrap();
    assert_eq!(result.total, 16);
    assert!(result.docs.is_empty());
}

#[tokio::test]
async fn no_content_returns_ids_only() {
    let (_server, client) = catalog().await;

    let flags = QueryFlags::default().no_content(true);
    let result = client.search(&Query::new("goodbye").flags(flags)).await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.docs, vec![Document::new("bye", 1.0)]);
}

#[tokio::test]
async fn scores_and_payloads() {
    let (_server, client) = catalog().await;

    let flags = QueryFlags::default().with_scores(true).with_payloads(true);
    let result = client.search(&Query::new("goodbye").flags(flags)).await.unwrap();

    let expected = Document::new("bye", 0.5).set("title", "goodbye").set_payload(b"p".to_vec());
    assert_eq!(result.docs, vec![expected]);
}

#[tokio::test]
async fn no_match() {
    let (_server, client) = catalog().await;
    let result = client.search(&Query::new("zebra")).await.unwrap();
    assert_eq!(result.total, 0);
    assert!(result.docs.is_empty());
}

#[tokio::test]
async fn explain_returns_the_plan() {
    let (server, client) = catalog().await;

    let plan = client.explain(&Query::new("hello")).await.unwrap();

    assert_eq!(plan, "UNION {\n  hello\n}\n");
    let last = server.commands().pop().unwrap();
    assert_eq!(last, vec!["FT.EXPLAIN", "idx", "hello"]);
}
