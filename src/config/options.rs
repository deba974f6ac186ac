// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub cache: CacheOptions,
    pub nearby: NearbyOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            cache: CacheOptions::default(),
            nearby: NearbyOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Directory site root; state listing links are resolved against it.
    pub base_url: String,
    pub user_agent: String,
    /// `None` waits on a hung server forever.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout: Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
        }
    }
}

impl FetchOptions {
    /// CLI helper: `0` means no timeout.
    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout = match secs {
            0 => None,
            n => Some(Duration::from_secs(n)),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub path: PathBuf,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(STORE_DIR).join(CACHE_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NearbyOptions {
    pub endpoint: String,
    pub radius: u32,
    pub units: String,
    pub max_matches: u32,
    pub ambiguities: String,
    pub out_format: String,
    pub api_key: Option<String>,
}

impl Default for NearbyOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(NEARBY_ENDPOINT),
            radius: NEARBY_RADIUS,
            units: s!(NEARBY_UNITS),
            max_matches: NEARBY_MAX_MATCHES,
            ambiguities: s!(NEARBY_AMBIGUITIES),
            out_format: s!(NEARBY_OUT_FORMAT),
            api_key: None,
        }
    }
}

impl NearbyOptions {
    /// Query string for one radius search around `origin`.
    pub fn query(&self, key: &str, origin: &str) -> Vec<(&'static str, String)> {
        vec![
            ("radius", self.radius.to_string()),
            ("units", self.units.clone()),
            ("maxMatches", self.max_matches.to_string()),
            ("ambiguities", self.ambiguities.clone()),
            ("outFormat", self.out_format.clone()),
            ("key", s!(key)),
            ("origin", s!(origin)),
        ]
    }
}
