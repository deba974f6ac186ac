// src/nearby.rs
// Places around a site, from the MapQuest radius search. Responses are
// cached under the site's postal code.
//
// Response shape (only what we read):
//   { "searchResults": [ { "name": "...",
//                          "fields": { "group_sic_code_name": "...",
//                                      "address": "...", "city": "..." } } ] }

use std::fmt;

use serde_json::Value;

use crate::cache::Cache;
use crate::config::options::NearbyOptions;
use crate::core::html::Lookup;
use crate::core::net::Fetch;
use crate::error::{Error, Result};
use crate::site::{Site, NO_CATEGORY, NO_CITY, NO_NAME};

pub const NO_ADDRESS: &str = "No Address";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NearbyPlace {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

impl NearbyPlace {
    /// Read one `searchResults` entry. Each field falls back on its own;
    /// an entry that isn't even an object is all placeholders.
    pub fn from_entry(entry: &Value) -> Self {
        Self {
            name: text_at(entry, "/name").or_placeholder(NO_NAME),
            category: text_at(entry, "/fields/group_sic_code_name").or_placeholder(NO_CATEGORY),
            address: text_at(entry, "/fields/address").or_placeholder(NO_ADDRESS),
            city: text_at(entry, "/fields/city").or_placeholder(NO_CITY),
        }
    }
}

impl fmt::Display for NearbyPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}, {}", self.name, self.category, self.address, self.city)
    }
}

fn text_at(entry: &Value, pointer: &str) -> Lookup {
    Lookup::from(entry.pointer(pointer).and_then(Value::as_str))
}

/// Radius search around `site`, through the cache.
///
/// The API key is only needed on a miss, so cached searches keep working
/// without one.
pub fn nearby(
    cache: &mut Cache,
    fetcher: &dyn Fetch,
    opts: &NearbyOptions,
    site: &Site,
) -> Result<Value> {
    if !site.has_zipcode() {
        return Err(Error::NoPostalCode { site: s!(site.name()) });
    }
    let origin = site.zipcode();

    cache.resolve_json(origin, || {
        let key = opts.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        fetcher.get_json(&opts.endpoint, &opts.query(key, origin))
    })
}

/// Every entry of `searchResults`; none when the key is absent.
pub fn places(response: &Value) -> Vec<NearbyPlace> {
    response
        .get("searchResults")
        .and_then(Value::as_array)
        .map(|results| results.iter().map(NearbyPlace::from_entry).collect())
        .unwrap_or_default()
}

/// `- name (category): address, city`, one line per place.
pub fn format_nearby(response: &Value) -> Vec<String> {
    places(response).iter().map(|place| format!("- {place}")).collect()
}
