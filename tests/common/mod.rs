// tests/common/mod.rs
// Canned directory site for integration tests: serves fixture pages by URL
// and counts every request it answers.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::Value;

use nps_scrape::config::options::AppOptions;
use nps_scrape::core::net::Fetch;
use nps_scrape::Error;

pub const HOME: &str = "https://www.nps.gov";
pub const MICHIGAN: &str = "https://www.nps.gov/state/mi/index.htm";
pub const WYOMING: &str = "https://www.nps.gov/state/wy/index.htm";
pub const ISLE_ROYALE: &str = "https://www.nps.gov/isro/index.htm";
pub const KEWEENAW: &str = "https://www.nps.gov/kewe/index.htm";

macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/", $name))
    };
}

pub const HOME_HTML: &str = fixture!("home.html");
pub const MICHIGAN_HTML: &str = fixture!("state_mi.html");
pub const WYOMING_HTML: &str = fixture!("state_wy.html");
pub const ISLE_ROYALE_HTML: &str = fixture!("site_isro.html");
pub const KEWEENAW_HTML: &str = fixture!("site_kewe.html");
pub const NEARBY_JSON: &str = fixture!("nearby_49931.json");

#[derive(Default)]
pub struct FakeWeb {
    pages: HashMap<String, String>,
    api: Option<Value>,
    pub page_calls: RefCell<Vec<String>>,
    pub api_calls: Cell<usize>,
}

impl FakeWeb {
    /// Home page, Michigan with both parks, and a Wyoming page that
    /// lost its park list. Alaska is linked but never served.
    pub fn directory() -> Self {
        let mut web = Self::default();
        web.serve(HOME, HOME_HTML)
            .serve(MICHIGAN, MICHIGAN_HTML)
            .serve(WYOMING, WYOMING_HTML)
            .serve(ISLE_ROYALE, ISLE_ROYALE_HTML)
            .serve(KEWEENAW, KEWEENAW_HTML);
        web.api = serde_json::from_str(NEARBY_JSON).ok();
        web
    }

    /// Answers nothing; every request is a 503.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn serve(&mut self, url: &str, body: &str) -> &mut Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn page_count(&self) -> usize {
        self.page_calls.borrow().len()
    }
}

impl Fetch for FakeWeb {
    fn get_text(&self, url: &str) -> nps_scrape::Result<String> {
        self.page_calls.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None if self.pages.is_empty() => Err(Error::Status { url: url.to_string(), status: 503 }),
            None => Err(Error::Status { url: url.to_string(), status: 404 }),
        }
    }

    fn get_json(&self, url: &str, _query: &[(&str, String)]) -> nps_scrape::Result<Value> {
        self.api_calls.set(self.api_calls.get() + 1);
        self.api.clone().ok_or(Error::Status { url: url.to_string(), status: 503 })
    }
}

/// Default options with an API key, so nearby searches can go out.
pub fn keyed_options() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.nearby.api_key = Some("test-key".to_string());
    opts
}
