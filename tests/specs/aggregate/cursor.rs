//! Aggregate cursor specs
//!
//! A cursor-backed aggregation streams its rows in batches and stops
//! contacting the server once the cursor id drops to zero.

use crate::prelude::*;
use crate::prelude::assert_eq;

async fn five_docs() -> (MockServer, Client<TcpPool>) {
    let server = MockServer::start().await;
    let client = server.client("idx");
    client.create_index(&Schema::default().add_field(Field::text("title"))).await.unwrap();
    let docs: Vec<Document> = (1..=5).map(|i| Document::new(format!("doc{i}"), 1.0).set("title", format!("t{i}"))).collect();
    client.index(&docs).await.unwrap();
    (server, client)
}

fn with_cursor(count: u64) -> AggregateQuery {
    AggregateQuery::new(Query::new("*")).with_cursor(CursorOptions::new().count(count))
}

#[tokio::test]
async fn batches_until_exhausted() {
    let (server, client) = five_docs().await;

    let mut agg = client.aggregate(&with_cursor(2)).await.unwrap();
    assert_eq!(agg.total, 5);
    assert_eq!(agg.rows.len(), 2);
    assert!(agg.cursor.has_more());

    let mut sizes = vec![agg.rows.len()];
    while agg.cursor.has_more() {
        sizes.push(agg.cursor.read(&client).await.unwrap().len());
    }
    assert_eq!(sizes, vec![2, 2, 1]);

    // An exhausted cursor is not read again
    let sent = server.commands().len();
    assert!(agg.cursor.read(&client).await.unwrap().is_empty());
    assert_eq!(server.commands().len(), sent);
    assert_eq!(server.open_cursors(), 0);
}

#[tokio::test]
async fn rows_arrive_in_order() {
    let (_server, client) = five_docs().await;

    let mut agg = client.aggregate(&with_cursor(2)).await.unwrap();
    let mut titles: Vec<String> = agg.rows.iter().filter_map(|r| r.get_str("title")).map(str::to_string).collect();
    while agg.cursor.has_more() {
        let rows = agg.cursor.read(&client).await.unwrap();
        titles.extend(rows.iter().filter_map(|r| r.get_str("title")).map(str::to_string));
    }
    assert_eq!(titles, vec!["t1", "t2", "t3", "t4", "t5"]);
}

#[tokio::test]
async fn close_releases_the_server_cursor() {
    let (server, client) = five_docs().await;

    let mut agg = client.aggregate(&with_cursor(2)).await.unwrap();
    assert_eq!(server.open_cursors(), 1);

    agg.cursor.close(&client).await.unwrap();
    assert!(!agg.cursor.has_more());
    assert_eq!(server.open_cursors(), 0);

    // Closing twice is a no-op
    let sent = server.commands().len();
    agg.cursor.close(&client).await.unwrap();
    assert_eq!(server.commands().len(), sent);
}

#[tokio::test]
async fn without_cursor_everything_comes_at_once() {
    let (_server, client) = five_docs().await;

    let agg = client.aggregate(&AggregateQuery::new(Query::new("*"))).await.unwrap();
    assert_eq!(agg.total, 5);
    assert_eq!(agg.rows.len(), 5);
    assert!(!agg.cursor.has_more());
}

#[tokio::test]
async fn lost_cursor_exhausts_the_session() {
    let (_server, client) = five_docs().await;

    let mut stale = CursorSession::new("idx", 999, None);
    let err = stale.read(&client).await.unwrap_err();
    assert!(matches!(err, Error::Server(ref msg) if msg == "Cursor not found"));
    assert!(!stale.has_more());
}
