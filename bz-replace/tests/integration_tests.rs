// ABOUTME: End-to-end tests for a full run against a mocked Bugzilla server
// ABOUTME: Covers dry runs, empty searches, ordered updates and failure handling

use bugzilla_sdk::BugzillaClient;
use bz_replace::output::ReportFormatter;
use bz_replace::runner::{Outcome, Runner};
use bz_replace::types::ReplacementPair;
use mockito::{Matcher, Server, ServerGuard};
use secrecy::SecretString;
use serde_json::json;

const API_KEY: &str = "integration-key";

fn client_for(server: &ServerGuard) -> BugzillaClient {
    BugzillaClient::builder()
        .api_key(SecretString::new(API_KEY.to_string().into_boxed_str()))
        .base_url(server.url())
        .build()
        .expect("Should build client")
}

fn foo_bar() -> Vec<ReplacementPair> {
    vec![ReplacementPair::new("foo", "bar")]
}

fn two_bugs() -> serde_json::Value {
    json!({
        "bugs": [
            { "id": 1, "summary": "foo crashes" },
            { "id": 2, "summary": "unrelated" }
        ]
    })
}

fn updated(id: u64) -> String {
    json!({ "bugs": [ { "id": id, "changes": {} } ] }).to_string()
}

async fn mock_search(server: &mut ServerGuard, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("GET", "/bug")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("Bugzilla_api_key".into(), API_KEY.into()),
            Matcher::UrlEncoded("resolution".into(), "---".into()),
            Matcher::UrlEncoded("j_top".into(), "OR".into()),
            Matcher::UrlEncoded("v1".into(), "foo".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await
}

async fn run(
    server: &ServerGuard,
    pairs: &[ReplacementPair],
    update: bool,
) -> (Outcome, String, String) {
    let client = client_for(server);
    let runner = Runner::new(ReportFormatter::new(false));
    let mut out = Vec::new();
    let mut err = Vec::new();

    let outcome = runner
        .run(&client, pairs, update, &mut out, &mut err)
        .await
        .expect("Run should not abort");

    (
        outcome,
        String::from_utf8(out).expect("stdout should be UTF-8"),
        String::from_utf8(err).expect("stderr should be UTF-8"),
    )
}

#[tokio::test]
async fn test_dry_run_prints_report_and_never_updates() {
    let mut server = Server::new_async().await;
    let search = mock_search(&mut server, two_bugs()).await;
    let put = server
        .mock("PUT", Matcher::Regex(r"^/bug/\d+$".to_string()))
        .expect(0)
        .create_async()
        .await;

    let (outcome, out, err) = run(&server, &foo_bar(), false).await;

    search.assert_async().await;
    put.assert_async().await;
    assert_eq!(outcome, Outcome::DryRun { planned: 2 });
    assert!(outcome.is_success());
    assert!(out.contains("        1 - foo crashes\n         + bar crashes\n"));
    assert!(out.contains("        2 - unrelated\n         + unrelated\n"));
    assert!(out.contains("2 planned updates, 1 with a changed summary."));
    assert!(out.contains("--update"));
    assert!(err.is_empty());
}

#[tokio::test]
async fn test_no_matches_skips_updates_even_in_update_mode() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, json!({ "bugs": [] })).await;
    let put = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (outcome, out, _) = run(&server, &foo_bar(), true).await;

    put.assert_async().await;
    assert_eq!(outcome, Outcome::NoMatches);
    assert!(outcome.is_success());
    assert_eq!(out, "No matching bugs found.\n");
}

#[tokio::test]
async fn test_update_sends_every_planned_update_in_order() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, two_bugs()).await;
    let put_1 = server
        .mock("PUT", "/bug/1")
        .match_body(Matcher::Json(json!({
            "Bugzilla_api_key": API_KEY,
            "ids": [1],
            "summary": "bar crashes"
        })))
        .with_status(200)
        .with_body(updated(1))
        .expect(1)
        .create_async()
        .await;
    // Unchanged summaries are still submitted
    let put_2 = server
        .mock("PUT", "/bug/2")
        .match_body(Matcher::Json(json!({
            "Bugzilla_api_key": API_KEY,
            "ids": [2],
            "summary": "unrelated"
        })))
        .with_status(200)
        .with_body(updated(2))
        .expect(1)
        .create_async()
        .await;

    let (outcome, out, err) = run(&server, &foo_bar(), true).await;

    put_1.assert_async().await;
    put_2.assert_async().await;
    assert_eq!(outcome, Outcome::Applied { updated: 2 });
    assert!(!out.contains("--update"));
    assert_eq!(err, "1 ... ok\n2 ... ok\n");
}

#[tokio::test]
async fn test_first_update_failure_stops_the_run() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, two_bugs()).await;
    let _mock = server
        .mock("PUT", "/bug/1")
        .with_status(403)
        .with_body(json!({ "error": true, "message": "You are not allowed" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let put_2 = server
        .mock("PUT", "/bug/2")
        .expect(0)
        .create_async()
        .await;

    let (outcome, _, err) = run(&server, &foo_bar(), true).await;

    put_2.assert_async().await;
    assert_eq!(outcome, Outcome::UpdateFailed { id: 1 });
    assert!(!outcome.is_success());
    assert_eq!(err, "1 ... failed: 403; error: You are not allowed\n");
}

#[tokio::test]
async fn test_later_failure_keeps_earlier_updates() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, two_bugs()).await;
    let put_1 = server
        .mock("PUT", "/bug/1")
        .with_status(200)
        .with_body(updated(1))
        .expect(1)
        .create_async()
        .await;
    let _mock = server
        .mock("PUT", "/bug/2")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let (outcome, _, err) = run(&server, &foo_bar(), true).await;

    put_1.assert_async().await;
    assert_eq!(outcome, Outcome::UpdateFailed { id: 2 });
    assert_eq!(
        err,
        "1 ... ok\n2 ... failed: 500; error: Internal Server Error\n"
    );
}

#[tokio::test]
async fn test_search_failure_reports_status_and_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/bug")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(
            json!({ "error": true, "code": 306, "message": "The API key you specified is invalid." })
                .to_string(),
        )
        .create_async()
        .await;

    let (outcome, out, err) = run(&server, &foo_bar(), true).await;

    assert_eq!(outcome, Outcome::SearchFailed);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "search failed: 401; error: The API key you specified is invalid.\n"
    );
}

#[tokio::test]
async fn test_id_mismatch_aborts_the_run() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, two_bugs()).await;
    let _mock = server
        .mock("PUT", "/bug/1")
        .with_status(200)
        .with_body(updated(99))
        .create_async()
        .await;
    let put_2 = server
        .mock("PUT", "/bug/2")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let runner = Runner::new(ReportFormatter::new(false));
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = runner
        .run(&client, &foo_bar(), true, &mut out, &mut err)
        .await;

    put_2.assert_async().await;
    let error = result.expect_err("Mismatched id should abort");
    assert!(format!("{:#}", error).contains("returned bug 99"));
}

#[tokio::test]
async fn test_multiple_pairs_search_every_needle() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/bug")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("f1".into(), "short_desc".into()),
            Matcher::UrlEncoded("v1".into(), "Crash".into()),
            Matcher::UrlEncoded("f2".into(), "short_desc".into()),
            Matcher::UrlEncoded("v2".into(), "[meta]".into()),
        ]))
        .with_status(200)
        .with_body(json!({ "bugs": [ { "id": 42, "summary": "[meta] Crash in parser" } ] }).to_string())
        .expect(1)
        .create_async()
        .await;

    let pairs = vec![
        ReplacementPair::new("Crash", "Panic"),
        ReplacementPair::new("[meta]", "[tracking]"),
    ];
    let (outcome, out, _) = run(&server, &pairs, false).await;

    search.assert_async().await;
    assert_eq!(outcome, Outcome::DryRun { planned: 1 });
    assert!(out.contains("       42 - [meta] Crash in parser\n"));
    assert!(out.contains("         + [tracking] Panic in parser\n"));
}
