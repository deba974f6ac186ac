// src/specs/mod.rs
//! # Page specs
//!
//! One module per kind of page on the directory site. Each module knows
//! *where the facts live in the markup* and how to read them without
//! falling over when the markup is uneven.
//!
//! ## What lives here
//! - Pure parsing of already-fetched documents (`scraper::Html`).
//! - Fixed descent paths per field (`core::html::Step`) and their placeholders.
//! - Link resolution from relative `href`s to absolute URLs.
//!
//! ## What does **not** live here
//! - Fetching and caching: `scrape::Scraper` resolves pages through
//!   `cache::Cache` and hands the parsed document in.
//! - Presentation: `cli` decides how sites and errors are shown.
//!
//! ## Failure policy
//! - A missing *field* is never an error; it becomes a placeholder, field by field.
//! - A missing *listing container* is `Error::MissingContainer`: the page is
//!   not the kind of page we asked for.
//!
//! ## Current specs
//! - `states` – state name → state page, from the site's home page.
//! - `parks` – detail-page URLs listed on one state page.
//! - `site` – one site's facts from its detail page.

use url::Url;

pub mod parks;
pub mod site;
pub mod states;

/// Resolve `href` against `base`; unparsable links are dropped.
pub(crate) fn absolute(base: &Url, href: &str) -> Option<Url> {
    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            logd!("Skipping unusable link {href:?}: {e}");
            None
        }
    }
}
