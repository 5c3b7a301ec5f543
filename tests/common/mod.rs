#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use neo_scenario::body::descriptor::BodyDescriptor;
use neo_scenario::config::NeoFeedConfig;
use neo_scenario::neo_errors::NeoError;
use neo_scenario::transport::NeoTransport;

pub const FEED_URL: &str = "http://neo.test/neo/rest/v1/feed";
pub const APOPHIS_URL: &str = "http://neo.test/neo/rest/v1/neo/2099942";
pub const WY_URL: &str = "http://neo.test/neo/rest/v1/neo/54088823";
pub const PK9_URL: &str = "http://neo.test/neo/rest/v1/neo/3542519";

pub const FEED_JSON: &str = include_str!("../data/feed.json");
pub const APOPHIS_JSON: &str = include_str!("../data/apophis.json");
pub const WY_JSON: &str = include_str!("../data/2020_wy.json");
pub const PK9_JSON: &str = include_str!("../data/2010_pk9.json");

/// In-memory transport answering from fixtures and recording every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, String>,
    failing: Vec<String>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport serving the feed fixture and the three qualifying detail records
    pub fn with_feed_fixtures() -> Self {
        Self::new()
            .respond(FEED_URL, FEED_JSON)
            .respond(APOPHIS_URL, APOPHIS_JSON)
            .respond(WY_URL, WY_JSON)
            .respond(PK9_URL, PK9_JSON)
    }

    pub fn respond(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    /// Make every request to `url` fail with a transport error
    pub fn fail(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(requested, _)| requested == url)
            .count()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn query_of(&self, url: &str) -> Option<Vec<(String, String)>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|(requested, _)| requested == url)
            .map(|(_, query)| query.clone())
    }
}

#[async_trait]
impl NeoTransport for ScriptedTransport {
    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, NeoError> {
        self.requests.lock().unwrap().push((
            url.to_string(),
            query
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ));

        // let sibling requests start before this one settles
        tokio::task::yield_now().await;

        if self.failing.iter().any(|failing| failing == url) {
            return Err(NeoError::MissingFeedData(format!("scripted failure for {url}")));
        }
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| NeoError::MissingFeedData(format!("no fixture for {url}")))
    }
}

pub fn test_config() -> NeoFeedConfig {
    NeoFeedConfig {
        feed_url: FEED_URL.to_string(),
        api_key: "TEST_KEY".to_string(),
        start_date: Some("2024-03-07".to_string()),
        ..NeoFeedConfig::default()
    }
}

pub fn reference_bodies() -> Vec<BodyDescriptor> {
    vec![
        BodyDescriptor::reference("sun", "Sun", 1.9891e30, 696_342.0, "#ffff00", None),
        BodyDescriptor::reference("mercury", "Mercury", 3.3022e23, 2_439.0, "#588a7b", None),
        BodyDescriptor::reference("venus", "Venus", 4.8676e24, 6_051.0, "#fda700", None),
        BodyDescriptor::reference("earth", "Earth", 5.9736e24, 6_371.0, "#1F7CDA", None),
        BodyDescriptor::reference("moon", "Moon", 7.3477e22, 1_738.1, "#aaaaaa", None),
        BodyDescriptor::reference("mars", "Mars", 6.4185e23, 3_376.0, "#ff3300", None),
    ]
}
