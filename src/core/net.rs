// src/core/net.rs
// Blocking HTTP GET. One request at a time; a failed request is returned
// to the caller as-is, never retried.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::options::FetchOptions;
use crate::error::{Error, Result};

/// Where live content comes from. The scraper only talks to this trait,
/// so tests can hand it canned pages.
pub trait Fetch {
    /// Body of a page as text.
    fn get_text(&self, url: &str) -> Result<String>;

    /// Decoded JSON body of `url` with `query` appended.
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        (**self).get_json(url, query)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Send and check the status. `url` is the bare endpoint, used for
    /// messages so query strings (API keys) never end up in logs.
    fn send(&self, req: RequestBuilder, url: &str) -> Result<Response> {
        let resp = req.send().map_err(|source| transport(url, source))?;
        let status = resp.status();
        if !status.is_success() {
            loge!("GET {url} -> {status}");
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        logd!("GET {url} -> {status}");
        Ok(resp)
    }
}

// reqwest's message carries the full request URL including the API key;
// keep only the bare endpoint.
fn transport(url: &str, source: reqwest::Error) -> Error {
    Error::Http { url: s!(url), source: source.without_url() }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.send(self.client.get(url), url)?;
        resp.text().map_err(|source| transport(url, source))
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let resp = self.send(self.client.get(url).query(query), url)?;
        resp.json::<Value>().map_err(|source| transport(url, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "SUPERSECRETKEY";

    fn messages(err: &Error) -> Vec<String> {
        let mut out = vec![err.to_string()];
        let mut source = std::error::Error::source(err);
        while let Some(e) = source {
            out.push(e.to_string());
            source = std::error::Error::source(e);
        }
        out
    }

    #[test]
    fn transport_failure_does_not_leak_query() {
        let fetcher = HttpFetcher::new(&FetchOptions::default()).unwrap();
        let err = fetcher
            .get_json("ftp://localhost/search/v2/radius", &[("key", s!(KEY)), ("origin", s!("49931"))])
            .unwrap_err();

        assert!(matches!(err, Error::Http { ref url, .. } if url == "ftp://localhost/search/v2/radius"));
        for msg in messages(&err) {
            assert!(!msg.contains(KEY), "key leaked: {msg}");
        }
        assert!(!format!("{err:?}").contains(KEY));
    }
}
