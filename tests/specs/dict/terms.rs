//! Dictionary specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn add_counts_only_new_terms() {
    let server = MockServer::start().await;
    let client = server.client("idx");

    assert_eq!(client.dict_add("slang", &["lol", "brb"]).await.unwrap(), 2);
    assert_eq!(client.dict_add("slang", &["lol", "brb"]).await.unwrap(), 0);
    assert_eq!(client.dict_dump("slang").await.unwrap(), vec!["brb", "lol"]);
}

#[tokio::test]
async fn delete_counts_removed_terms() {
    let server = MockServer::start().await;
    let client = server.client("idx");
    client.dict_add("slang", &["lol", "brb", "imo"]).await.unwrap();

    assert_eq!(client.dict_del("slang", &["lol", "nope"]).await.unwrap(), 1);
    assert_eq!(client.dict_dump("slang").await.unwrap(), vec!["brb", "imo"]);
}

#[tokio::test]
async fn missing_dictionary_dumps_empty() {
    let server = MockServer::start().await;
    assert!(server.client("idx").dict_dump("none").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_term_list_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = server.client("idx");

    let err = client.dict_add("slang", &[] as &[&str]).await.unwrap_err();
    assert!(matches!(err, Error::Build(_)));
    assert_eq!(server.connections(), 0);
}
