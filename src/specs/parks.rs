// src/specs/parks.rs
// State page park list, e.g. https://www.nps.gov/state/mi/index.htm
//   <ul id="list_parks">
//     <li class="clearfix"><h2>National Park</h2><h3><a href="/isro/">Isle Royale</a></h3>
//       ... <ul><li><a href="/isro/planyourvisit/...">Directions</a></li></ul>
//     </li>
//
// Only the direct <li> children are parks; the nested lists are quick links.

use scraper::Html;
use url::Url;

use super::absolute;
use crate::core::html::{child_elements, descend_to, find_first, href, require, Step};
use crate::error::Result;

pub const CONTAINER: Step = Step::id("ul", "list_parks");
const HEADING_ANCHOR: [Step; 2] = [Step::tag("h3"), Step::tag("a")];
const ANY_ANCHOR: Step = Step::has_attr("a", "href");
const DETAIL_PAGE: &str = "index.htm";

/// Detail-page URLs in document order.
pub fn list_site_urls(doc: &Html, base: &Url) -> Result<Vec<String>> {
    let container = require(doc, &CONTAINER, "state")?;

    let mut urls = Vec::new();
    for li in child_elements(container, "li") {
        let anchor = descend_to(li, &HEADING_ANCHOR).or_else(|| find_first(li, &ANY_ANCHOR));
        let Some(link) = anchor.and_then(href) else {
            logd!("Park item without a link: {:?}", li.html());
            continue;
        };
        if let Some(url) = absolute(base, link).and_then(detail_page) {
            urls.push(url.into());
        }
    }

    logd!("Found {} parks", urls.len());
    Ok(urls)
}

// "/isro/" is the park root; its facts live on "/isro/index.htm".
fn detail_page(url: Url) -> Option<Url> {
    if url.path().ends_with('/') {
        url.join(DETAIL_PAGE).ok()
    } else {
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn base() -> Url {
        Url::parse("https://www.nps.gov").unwrap()
    }

    #[test]
    fn keeps_document_order_and_skips_quick_links() {
        let html = r#"
            <ul id="list_parks">
              <li class="clearfix"><h2>National Park</h2><h3><a href="/isro/">Isle Royale</a></h3>
                <ul><li><a href="/isro/planyourvisit/directions.htm">Directions</a></li></ul></li>
              <li class="clearfix"><h3><a href="/kewe/">Keweenaw</a></h3></li>
              <li class="clearfix"><h3><a href="/piro/index.htm">Pictured Rocks</a></h3></li>
              <li class="clearfix"><h3>No link</h3></li>
            </ul>"#;
        let urls = list_site_urls(&Html::parse_document(html), &base()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://www.nps.gov/isro/index.htm",
                "https://www.nps.gov/kewe/index.htm",
                "https://www.nps.gov/piro/index.htm",
            ]
        );
    }

    #[test]
    fn falls_back_to_first_link_without_heading() {
        let html = r#"<ul id="list_parks"><li><a href="/slbe/">Sleeping Bear</a></li></ul>"#;
        let urls = list_site_urls(&Html::parse_document(html), &base()).unwrap();
        assert_eq!(urls, vec!["https://www.nps.gov/slbe/index.htm"]);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let urls = list_site_urls(&Html::parse_document(r#"<ul id="list_parks"></ul>"#), &base()).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn missing_list_is_structural() {
        let err = list_site_urls(&Html::parse_document("<ul id='other'></ul>"), &base()).unwrap_err();
        assert!(matches!(err, Error::MissingContainer { page: "state", .. }));
    }
}
