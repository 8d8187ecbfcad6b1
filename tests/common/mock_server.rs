//! Mock Color API server for testing the HTTP provider.

use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

use super::fixtures::{scheme_json, SCHEME_PATH};

/// Responds like The Color API: `count` colors starting at the seed hue
struct SchemeResponder;

impl Respond for SchemeResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut count = 5usize;
        let mut hsl = None;
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "count" => count = value.parse().unwrap_or(5),
                "hsl" => hsl = parse_hsl(&value),
                _ => {}
            }
        }

        match hsl {
            Some((h, s, l)) => ResponseTemplate::new(200)
                .set_body_json(scheme_json(h, s, l, count))
                .insert_header("content-type", "application/json"),
            None => ResponseTemplate::new(400).set_body_string("bad hsl"),
        }
    }
}

/// Parse `hsl(120, 50%, 40%)` into its components
pub fn parse_hsl(value: &str) -> Option<(u16, u32, u32)> {
    let inner = value.strip_prefix("hsl(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().trim_end_matches('%'));
    let h = parts.next()?.parse().ok()?;
    let s = parts.next()?.parse().ok()?;
    let l = parts.next()?.parse().ok()?;
    Some((h, s, l))
}

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockColorApi {
    pub server: MockServer,
}

impl MockColorApi {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Serve generated analogic schemes for any seed color
    pub async fn mock_schemes(&self) {
        Mock::given(method("GET"))
            .and(path(SCHEME_PATH))
            .and(query_param("mode", "analogic"))
            .respond_with(SchemeResponder)
            .mount(&self.server)
            .await;
    }

    /// Serve a fixed JSON body for every scheme request
    pub async fn mock_body(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(SCHEME_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve a raw string body with status 200
    pub async fn mock_raw(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path(SCHEME_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail every scheme request with the given status
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(SCHEME_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// `hsl` query values of all received requests, in order
    pub async fn requested_hsl(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| {
                request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "hsl")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    }

    /// Remove all mounted mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
