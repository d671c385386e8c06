use std::io;

use leaflets_scraper::ScraperError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const DIRECTORY_HTML: &str = r#"<html><body>
  <div id="left-category-shops">
    <ul>
      <li><a href="lidl/">Lidl</a></li>
      <li><a href="aldi/">Aldi</a></li>
    </ul>
  </div>
</body></html>"#;

fn shop_page(title: &str, dates: &str) -> String {
    format!(
        r#"<html><body>
  <div class="brochure-thumb">
    <a href="/prospekt/"><img src="" data-src="https://img.example/{title}.jpg"></a>
    <div class="grid-item-content">
      <strong>{title}</strong>
      <small class="hidden-sm">{dates}</small>
    </div>
  </div>
</body></html>"#
    )
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn test_client(server: &MockServer) -> LeafletClient {
    LeafletClient::new(&server.uri(), 5, "leaflets-test/0.1").expect("test client")
}

#[tokio::test]
async fn run_saves_one_record_per_shop_in_directory_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/hypermarkte/", 200, DIRECTORY_HTML.to_string()).await;
    mount_page(
        &server,
        "/lidl/",
        200,
        shop_page("Lidl-Angebote", "01.03.2024 - 15.03.2024"),
    )
    .await;
    mount_page(
        &server,
        "/aldi/",
        200,
        shop_page("Aldi-Angebote", "gültig bis 16.03.2024"),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("leaflets.json");
    let mut console = Vec::new();
    let saved = run(&test_client(&server), &output, &mut console)
        .await
        .unwrap();

    assert_eq!(saved, 2);
    let printed = String::from_utf8(console).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(
        lines,
        [
            "Fetching leaflets for Lidl...",
            "Fetching leaflets for Aldi...",
            "Successfully saved 2 leaflets to JSON file.",
        ]
    );

    let raw = std::fs::read_to_string(&output).unwrap();
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["shop_name"], "Lidl");
    assert_eq!(values[0]["valid_from"], "2024-03-01");
    assert_eq!(values[0]["valid_to"], "2024-03-15");
    assert_eq!(values[1]["shop_name"], "Aldi");
    assert_eq!(values[1]["valid_from"], "");
    assert_eq!(values[1]["valid_to"], "2024-03-16");
    assert_eq!(values[1]["thumbnail"], "https://img.example/Aldi-Angebote.jpg");
}

#[tokio::test]
async fn failed_shop_fetch_aborts_without_writing() {
    let server = MockServer::start().await;
    mount_page(&server, "/hypermarkte/", 200, DIRECTORY_HTML.to_string()).await;
    mount_page(
        &server,
        "/lidl/",
        200,
        shop_page("Lidl-Angebote", "01.03.2024 - 15.03.2024"),
    )
    .await;
    mount_page(&server, "/aldi/", 500, String::new()).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("leaflets.json");
    let mut console = Vec::new();
    let err = run(&test_client(&server), &output, &mut console)
        .await
        .unwrap_err();

    let scraper_err = err.downcast_ref::<ScraperError>().expect("scraper error");
    assert!(
        matches!(scraper_err, ScraperError::UnexpectedStatus { status: 500, .. }),
        "got: {scraper_err:?}"
    );
    assert!(!output.exists(), "no output should be written on failure");
    let printed = String::from_utf8(console).unwrap();
    assert!(printed.contains("Fetching leaflets for Aldi..."));
    assert!(!printed.contains("Successfully saved"), "got: {printed}");
}

#[tokio::test]
async fn failed_shop_fetch_keeps_previous_output() {
    let server = MockServer::start().await;
    mount_page(&server, "/hypermarkte/", 404, String::new()).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("leaflets.json");
    std::fs::write(&output, "[]").unwrap();

    assert!(run(&test_client(&server), &output, &mut io::sink())
        .await
        .is_err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
}

#[tokio::test]
async fn collect_leaflets_keeps_partial_results_in_accumulator() {
    let server = MockServer::start().await;
    mount_page(&server, "/hypermarkte/", 200, DIRECTORY_HTML.to_string()).await;
    mount_page(
        &server,
        "/lidl/",
        200,
        shop_page("Lidl-Angebote", "01.03.2024 - 15.03.2024"),
    )
    .await;
    mount_page(&server, "/aldi/", 502, String::new()).await;

    let mut leaflets = Vec::new();
    let result = collect_leaflets(&test_client(&server), &mut leaflets, &mut io::sink()).await;

    assert!(result.is_err());
    assert_eq!(leaflets.len(), 1);
    assert_eq!(leaflets[0].shop_name, "Lidl");
}

#[tokio::test]
async fn empty_directory_saves_empty_array() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/hypermarkte/",
        200,
        "<html><body><div id=\"left-category-shops\"></div></body></html>".to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("leaflets.json");
    let mut console = Vec::new();
    let saved = run(&test_client(&server), &output, &mut console)
        .await
        .unwrap();

    assert_eq!(saved, 0);
    assert_eq!(
        String::from_utf8(console).unwrap(),
        "Successfully saved 0 leaflets to JSON file.\n"
    );
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
}

#[tokio::test]
async fn shop_with_only_broken_items_contributes_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "/hypermarkte/", 200, DIRECTORY_HTML.to_string()).await;
    mount_page(&server, "/lidl/", 200, shop_page("Lidl-Angebote", "bald")).await;
    mount_page(
        &server,
        "/aldi/",
        200,
        shop_page("Aldi-Angebote", "01.03.2024 - 15.03.2024"),
    )
    .await;

    let mut leaflets = Vec::new();
    let shops = collect_leaflets(&test_client(&server), &mut leaflets, &mut io::sink())
        .await
        .unwrap();

    assert_eq!(shops, 2);
    assert_eq!(leaflets.len(), 1);
    assert_eq!(leaflets[0].shop_name, "Aldi");
}
