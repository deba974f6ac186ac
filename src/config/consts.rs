// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.nps.gov";
pub const USER_AGENT: &str = concat!("nps_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "nps_cache.json";
pub const LOG_FILE: &str = "debug.log";

// Nearby search (MapQuest radius search)
pub const NEARBY_ENDPOINT: &str = "https://www.mapquestapi.com/search/v2/radius";
pub const NEARBY_RADIUS: u32 = 10;
pub const NEARBY_UNITS: &str = "m";
pub const NEARBY_MAX_MATCHES: u32 = 10;
pub const NEARBY_AMBIGUITIES: &str = "ignore";
pub const NEARBY_OUT_FORMAT: &str = "json";
pub const API_KEY_ENV: &str = "MAPQUEST_API_KEY";
