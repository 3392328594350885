use tempfile::TempDir;
use transcript_harvest::config::{JobConfig, LinkJobConfig, SpanJobConfig};
use transcript_harvest::extractors::spans::SpanRules;
use transcript_harvest::fetch::Fetcher;
use transcript_harvest::sink::read_urls_csv;
use transcript_harvest::{Error, LinkCollector, SpanExtractor, run_job, run_link_job, run_span_job};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_PAGE: &str = r#"<html><body>
<ul>
  <li><a href="https://bigbangtrans.wordpress.com/series-1-episode-1-pilot-episode/">Pilot</a></li>
  <li>Series 1</li>
  <li><a href="/series-1-episode-2-the-big-bran-hypothesis/">Episode 2</a></li>
  <li><a>Missing href</a></li>
</ul>
</body></html>"#;

const TRANSCRIPT_PAGE: &str = r#"<html><body>
<h2 class="title">Series 01 Episode 01 – Pilot Episode</h2>
<div class="entrytext">
  <p><span style="font-size:small;">Scene: A corridor at a sperm bank.</span></p>
  <p><span style="font-size:small;">Sheldon: <span style="font-family:Calibri;">If a photon is directed through a plane with two slits in it...</span></span></p>
  <p><span style="font-family:Calibri;">Leonard: Agreed, what’s your point?</span></p>
  <p><span style="color:#333">Not part of the transcript</span></p>
</div>
</body></html>"#;

async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_collects_links_in_document_order() {
    let server = serve("/", 200, INDEX_PAGE).await;

    let mut out = Vec::new();
    let links = LinkCollector::new(server.uri())
        .collect(&mut out)
        .await
        .unwrap();
    assert!(out.is_empty());
    assert_eq!(
        links,
        vec![
            "https://bigbangtrans.wordpress.com/series-1-episode-1-pilot-episode/",
            "/series-1-episode-2-the-big-bran-hypothesis/",
        ]
    );
}

#[tokio::test]
async fn test_failed_fetch_yields_no_links() {
    let server = serve("/", 404, INDEX_PAGE).await;

    let mut out = Vec::new();
    let links = LinkCollector::new(server.uri())
        .collect(&mut out)
        .await
        .unwrap();
    assert!(links.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Failed to retrieve the webpage. Status code: 404\n"
    );
}

#[tokio::test]
async fn test_non_200_success_status_is_a_failure() {
    let server = serve("/", 204, "").await;

    let links = LinkCollector::new(server.uri())
        .collect(&mut std::io::sink())
        .await
        .unwrap();
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_link_job_writes_csv() {
    let server = serve("/", 200, INDEX_PAGE).await;
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("collected_urls.csv");
    let config = LinkJobConfig {
        url: server.uri(),
        output: output.clone(),
    };

    let mut out = Vec::new();
    let urls = run_link_job(&config, &mut out).await.unwrap();

    assert_eq!(read_urls_csv(&output).unwrap(), urls);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("All retrieved URLs:\n"));
    assert!(printed.contains("/series-1-episode-2-the-big-bran-hypothesis/\n"));
    assert!(printed.contains("Saved 2 URLs to"));
}

#[tokio::test]
async fn test_failed_link_job_leaves_empty_csv() {
    let server = serve("/", 503, "").await;
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("collected_urls.csv");
    let config = LinkJobConfig {
        url: server.uri(),
        output: output.clone(),
    };

    let mut out = Vec::new();
    let urls = run_link_job(&config, &mut out).await.unwrap();

    assert!(urls.is_empty());
    assert!(output.exists());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "Failed to retrieve the webpage. Status code: 503\nAll retrieved URLs:\n\nSaved 0 URLs to {}.\n",
            output.display()
        )
    );
}

#[tokio::test]
async fn test_scrapes_title_and_innermost_spans() {
    let server = serve("/episode", 200, TRANSCRIPT_PAGE).await;

    let fetcher = Fetcher::with_client(reqwest::Client::new());
    let lines = SpanExtractor::new(format!("{}/episode", server.uri()))
        .with_fetcher(fetcher)
        .scrape(&mut std::io::sink())
        .await
        .unwrap();
    assert_eq!(
        lines,
        vec![
            "Series 01 Episode 01 – Pilot Episode",
            "Scene: A corridor at a sperm bank.",
            "If a photon is directed through a plane with two slits in it...",
            "Leonard: Agreed, what’s your point?",
        ]
    );
}

#[tokio::test]
async fn test_failed_scrape_has_no_title() {
    let server = serve("/episode", 403, TRANSCRIPT_PAGE).await;

    let url = format!("{}/episode", server.uri());
    let config = SpanJobConfig {
        url: url.clone(),
        ..SpanJobConfig::default()
    };

    let mut out = Vec::new();
    let lines = run_span_job(&config, &mut out).await.unwrap();
    assert!(lines.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Failed to retrieve {}. Status code: 403\n", url)
    );
}

#[tokio::test]
async fn test_span_job_with_custom_rules_as_json() {
    let server = serve("/episode", 200, TRANSCRIPT_PAGE).await;
    let config = SpanJobConfig {
        url: format!("{}/episode", server.uri()),
        json: true,
        rules: SpanRules {
            style_markers: vec!["font-family:Calibri".to_string()],
            ..SpanRules::default()
        },
    };

    let mut out = Vec::new();
    let lines = run_span_job(&config, &mut out).await.unwrap();
    assert_eq!(lines.len(), 3);

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["title"], "Series 01 Episode 01 – Pilot Episode");
    assert_eq!(printed["lines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_run_job_from_config() {
    let server = serve("/episode", 200, "<p>No transcript yet</p>").await;
    let config = JobConfig::from_json(&format!(
        r#"{{ "type": "Spans", "url": "{}/episode" }}"#,
        server.uri()
    ))
    .unwrap();

    let mut out = Vec::new();
    run_job(&config, &mut out).await.unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No Title Found\n");
}

#[tokio::test]
async fn test_invalid_url_is_a_hard_error() {
    let err = SpanExtractor::new("bigbangtrans")
        .scrape(&mut std::io::sink())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_link_collector_with_injected_client() {
    let server = serve("/", 200, INDEX_PAGE).await;
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    let links = LinkCollector::new(server.uri())
        .with_fetcher(Fetcher::with_client(client))
        .collect(&mut std::io::sink())
        .await
        .unwrap();
    assert_eq!(links.len(), 2);
}
