use gencove_client::application::pagination::{Paginator, extract_offset};
use gencove_client::config::{Config, Credentials};
use gencove_client::error::AppError;
use gencove_client::prelude::GencoveHttpClientImpl;
use mockito::Matcher;
use serde_json::Value;
use std::sync::Arc;

fn test_client(base_url: &str) -> GencoveHttpClientImpl {
    let config = Config::with_credentials(
        Credentials::ApiKey("test-key".to_string()),
        base_url,
    );
    GencoveHttpClientImpl::new(Arc::new(config))
}

fn match_page(offset: &str, limit: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("offset".to_string(), offset.to_string()),
        Matcher::UrlEncoded("limit".to_string(), limit.to_string()),
    ])
}

#[test]
fn extract_offset_reads_query_parameter() {
    assert_eq!(
        extract_offset("https://api.gencove.com/api/v2/projects/?offset=200&limit=200").unwrap(),
        200
    );
    assert_eq!(
        extract_offset("https://api.gencove.com/api/v2/projects/?limit=50&offset=7").unwrap(),
        7
    );
}

#[test]
fn extract_offset_rejects_link_without_offset() {
    let err = extract_offset("https://api.gencove.com/api/v2/projects/?limit=50")
        .err()
        .expect("should be Err");
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("offset")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn paginator_walks_pages_until_next_is_null() {
    let mut server = mockito::Server::new_async().await;

    let next = format!("{}/api/v2/projects/?offset=2&limit=2", server.url());
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(match_page("0", "2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"meta":{{"count":3,"next":"{next}","previous":null}},"results":[{{"id":"p1"}},{{"id":"p2"}}]}}"#
        ))
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(match_page("2", "2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meta":{"count":3,"next":null,"previous":null},"results":[{"id":"p3"}]}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let mut pager: Paginator<'_, _, Value> = Paginator::new(&client, "api/v2/projects/", 2);

    let page1 = pager.next_page().await.unwrap().expect("first page");
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0]["id"], "p1");

    let page2 = pager.next_page().await.unwrap().expect("second page");
    assert_eq!(page2.len(), 1);
    assert_eq!(page2[0]["id"], "p3");

    assert!(pager.next_page().await.unwrap().is_none());
    // Exhausted paginators stay exhausted
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn single_page_listing_yields_exactly_one_page() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meta":{"count":1,"next":null,"previous":null},"results":[{"id":"p1"}]}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let mut pager: Paginator<'_, _, Value> = Paginator::new(&client, "api/v2/projects/", 200);

    let page = pager.next_page().await.unwrap().expect("only page");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], "p1");
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn empty_first_page_means_no_items_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meta":{"count":0,"next":null,"previous":null},"results":[]}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let mut pager: Paginator<'_, _, Value> = Paginator::new(&client, "api/v2/projects/", 200);

    let page = pager.next_page().await.unwrap().expect("one empty page");
    assert!(page.is_empty());
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn collected_pages_equal_single_call_with_full_limit() {
    let mut server = mockito::Server::new_async().await;

    // Paged: two pages of two
    let next = format!("{}/api/v2/projects/?offset=2&limit=2", server.url());
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(match_page("0", "2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"meta":{{"count":4,"next":"{next}","previous":null}},"results":[{{"id":"p1"}},{{"id":"p2"}}]}}"#
        ))
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(match_page("2", "2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meta":{"count":4,"next":null,"previous":null},"results":[{"id":"p3"},{"id":"p4"}]}"#,
        )
        .create_async()
        .await;

    // One shot: limit equals the total count
    server
        .mock("GET", "/api/v2/projects/")
        .match_query(match_page("0", "4"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meta":{"count":4,"next":null,"previous":null},"results":[{"id":"p1"},{"id":"p2"},{"id":"p3"},{"id":"p4"}]}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server.url());

    let paged: Vec<Value> = Paginator::new(&client, "api/v2/projects/", 2)
        .collect_all()
        .await
        .unwrap();
    let one_shot: Vec<Value> = Paginator::new(&client, "api/v2/projects/", 4)
        .collect_all()
        .await
        .unwrap();

    let paged_ids: Vec<&str> = paged.iter().map(|v| v["id"].as_str().unwrap()).collect();
    let one_shot_ids: Vec<&str> = one_shot.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(paged_ids, one_shot_ids);
}

#[tokio::test]
async fn extra_query_parameters_are_sent_with_every_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/sample-sheet/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".to_string(), "0".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "200".to_string()),
            Matcher::UrlEncoded("status".to_string(), "unassigned".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meta":{"count":0,"next":null,"previous":null},"results":[]}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let pager: Paginator<'_, _, Value> = Paginator::new(&client, "api/v2/sample-sheet/", 200)
        .with_query("status", "unassigned");

    let all = pager.collect_all().await.unwrap();
    assert!(all.is_empty());
    mock.assert_async().await;
}
