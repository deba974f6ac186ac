// src/specs/site.rs
// Detail page of one national site, e.g. https://www.nps.gov/isro/index.htm
//
// Title block:   <div class="Hero-titleContainer clearfix">
//                  <a ...>Isle Royale</a>
//                  <div class="Hero-designationContainer">
//                    <span class="Hero-designation">National Park</span>
// Contact block: <div class="vcard"> ... <span itemprop="addressLocality">,
//                <span class="region">, <span class="postal-code">, <span class="tel">

use scraper::Html;

use crate::core::html::{extract, Field, Step};
use crate::site::{self, Site};

const TITLE: Step = Step::class("div", "Hero-titleContainer clearfix");
const CONTACT: Step = Step::class("div", "vcard");

pub const NAME: Field = Field {
    name: "name",
    path: &[TITLE, Step::tag("a")],
    placeholder: site::NO_NAME,
};

pub const CATEGORY: Field = Field {
    name: "category",
    path: &[
        TITLE,
        Step::class("div", "Hero-designationContainer"),
        Step::class("span", "Hero-designation"),
    ],
    placeholder: site::NO_CATEGORY,
};

pub const CITY: Field = Field {
    name: "city",
    path: &[CONTACT, Step::attr("span", "itemprop", "addressLocality")],
    placeholder: site::NO_CITY,
};

pub const REGION: Field = Field {
    name: "region",
    path: &[CONTACT, Step::class("span", "region")],
    placeholder: site::NO_REGION,
};

pub const ZIPCODE: Field = Field {
    name: "zipcode",
    path: &[CONTACT, Step::class("span", "postal-code")],
    placeholder: site::NO_ZIPCODE,
};

pub const PHONE: Field = Field {
    name: "phone",
    path: &[CONTACT, Step::class("span", "tel")],
    placeholder: site::NO_TELEPHONE,
};

/// Build a `Site` from a detail page. Never fails: every field falls back
/// to its own placeholder independently.
pub fn build_site(doc: &Html) -> Site {
    let city = extract(doc, &CITY);
    let region = extract(doc, &REGION);

    Site::new(
        extract(doc, &CATEGORY),
        extract(doc, &NAME),
        site::compose_address(&city, &region),
        extract(doc, &ZIPCODE),
        extract(doc, &PHONE),
    )
}

pub fn parse_site(html: &str) -> Site {
    build_site(&Html::parse_document(html))
}
