// src/specs/states.rs
// Home page state picker:
//   <div class="SearchBar-keywordSearch input-group input-group-lg">
//     ... <ul class="dropdown-menu"><li><a href="/state/mi/index.htm">Michigan</a></li> ...

use std::collections::BTreeMap;

use scraper::Html;
use url::Url;

use super::absolute;
use crate::core::html::{find_first, href, require, text_of, Step};
use crate::core::sanitize::state_key;
use crate::error::Result;

/// Lower-cased state name → absolute state page URL.
pub type StateDirectory = BTreeMap<String, String>;

pub const CONTAINER: Step = Step::class("div", "SearchBar-keywordSearch");
const ITEM: Step = Step::tag("li");
const ANCHOR: Step = Step::tag("a");

pub fn list_regions(doc: &Html, base: &Url) -> Result<StateDirectory> {
    let container = require(doc, &CONTAINER, "home")?;
    let Some(item_sel) = ITEM.selector() else {
        return Ok(StateDirectory::new());
    };

    let mut states = StateDirectory::new();
    for li in container.select(&item_sel) {
        let Some(anchor) = find_first(li, &ANCHOR) else { continue };
        let (Some(name), Some(link)) = (text_of(anchor).found(), href(anchor)) else {
            logd!("State item without name or link: {:?}", li.html());
            continue;
        };
        if let Some(url) = absolute(base, link) {
            states.insert(state_key(&name), url.into());
        }
    }

    logd!("Found {} states", states.len());
    Ok(states)
}
