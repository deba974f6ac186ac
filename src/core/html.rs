// src/core/html.rs
// Defensive descent over a parsed document.
//
// A path is a list of steps; each step picks the first descendant of the
// current node that matches. Any failed step, or an empty terminal node,
// yields `Lookup::Missing`, which callers turn into a field placeholder.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    None,
    /// Whitespace-separated class list; every class must be present.
    Class(&'static str),
    Attr(&'static str, &'static str),
    HasAttr(&'static str),
    Id(&'static str),
}

/// One descend-step: a tag name plus an optional attribute filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: &'static str,
    pub filter: Filter,
}

impl Step {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, filter: Filter::None }
    }

    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Self { tag, filter: Filter::Class(class) }
    }

    pub const fn attr(tag: &'static str, name: &'static str, value: &'static str) -> Self {
        Self { tag, filter: Filter::Attr(name, value) }
    }

    pub const fn has_attr(tag: &'static str, name: &'static str) -> Self {
        Self { tag, filter: Filter::HasAttr(name) }
    }

    pub const fn id(tag: &'static str, id: &'static str) -> Self {
        Self { tag, filter: Filter::Id(id) }
    }

    /// CSS form of the step, e.g. `div.vcard` or `span[itemprop="addressLocality"]`.
    pub fn css(&self) -> String {
        match self.filter {
            Filter::None => s!(self.tag),
            Filter::Class(classes) => {
                let mut out = s!(self.tag);
                for class in classes.split_whitespace() {
                    out.push('.');
                    out.push_str(class);
                }
                out
            }
            Filter::Attr(name, value) => format!(r#"{}[{}="{}"]"#, self.tag, name, value),
            Filter::HasAttr(name) => join!(self.tag, "[", name, "]"),
            Filter::Id(id) => join!(self.tag, "#", id),
        }
    }

    pub fn selector(&self) -> Option<Selector> {
        let css = self.css();
        match Selector::parse(&css) {
            Ok(sel) => Some(sel),
            Err(e) => {
                loge!("Invalid selector `{css}`: {e:?}");
                None
            }
        }
    }
}

/// Outcome of a defensive lookup: either non-empty text or nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Missing,
}

impl Lookup {
    /// Whitespace-normalized text; blank counts as missing.
    pub fn from_text(raw: &str) -> Self {
        let text = normalize_ws(raw);
        if text.is_empty() { Lookup::Missing } else { Lookup::Found(text) }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<String> {
        match self {
            Lookup::Found(text) => Some(text),
            Lookup::Missing => None,
        }
    }

    pub fn or_placeholder(self, placeholder: &str) -> String {
        match self {
            Lookup::Found(text) => text,
            Lookup::Missing => s!(placeholder),
        }
    }
}

impl From<Option<&str>> for Lookup {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(Lookup::Missing, Lookup::from_text)
    }
}

/// A named field: where it lives and what to say when it doesn't.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub path: &'static [Step],
    pub placeholder: &'static str,
}

pub fn find_first<'a>(node: ElementRef<'a>, step: &Step) -> Option<ElementRef<'a>> {
    let sel = step.selector()?;
    node.select(&sel).next()
}

/// Walk `path` from `root`; `None` as soon as one step has no match.
pub fn descend_to<'a>(root: ElementRef<'a>, path: &[Step]) -> Option<ElementRef<'a>> {
    path.iter().try_fold(root, |node, step| find_first(node, step))
}

pub fn text_of(node: ElementRef<'_>) -> Lookup {
    Lookup::from_text(&node.text().collect::<String>())
}

pub fn descend(root: ElementRef<'_>, path: &[Step]) -> Lookup {
    descend_to(root, path).map_or(Lookup::Missing, text_of)
}

/// Extract one field from the whole document, substituting its placeholder.
pub fn extract(doc: &Html, field: &Field) -> String {
    let found = descend(doc.root_element(), field.path);
    if !found.is_found() {
        logd!("{}: not found, using {:?}", field.name, field.placeholder);
    }
    found.or_placeholder(field.placeholder)
}

/// Locate a container the page cannot do without.
pub fn require<'a>(doc: &'a Html, step: &Step, page: &'static str) -> Result<ElementRef<'a>> {
    find_first(doc.root_element(), step).ok_or_else(|| Error::MissingContainer {
        page,
        selector: step.css(),
    })
}

/// Direct element children of `node` with the given tag, in document order.
pub fn child_elements<'a>(
    node: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    node.children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
}

/// Non-blank `href` of an anchor.
pub fn href<'a>(anchor: ElementRef<'a>) -> Option<&'a str> {
    anchor.value().attr("href").map(str::trim).filter(|h| !h.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
        <html><body>
          <div class="vcard extra">
            <span itemprop="addressLocality">  Houghton </span>
            <span class="region"></span>
          </div>
          <ul id="list"><li><a href="/a/">A</a><ul><li>nested</li></ul></li><li>B</li></ul>
        </body></html>"#;

    const CITY: [Step; 2] = [
        Step::class("div", "vcard"),
        Step::attr("span", "itemprop", "addressLocality"),
    ];

    #[test]
    fn css_forms() {
        assert_eq!(Step::tag("a").css(), "a");
        assert_eq!(
            Step::class("div", "Hero-titleContainer clearfix").css(),
            "div.Hero-titleContainer.clearfix"
        );
        assert_eq!(
            Step::attr("span", "itemprop", "addressLocality").css(),
            r#"span[itemprop="addressLocality"]"#
        );
        assert_eq!(Step::has_attr("a", "href").css(), "a[href]");
        assert_eq!(Step::id("ul", "list_parks").css(), "ul#list_parks");
    }

    #[test]
    fn full_path_returns_trimmed_text() {
        let doc = Html::parse_document(CARD);
        assert_eq!(descend(doc.root_element(), &CITY), Lookup::Found(s!("Houghton")));
    }

    #[test]
    fn any_failed_step_is_missing() {
        let doc = Html::parse_document(CARD);
        let root = doc.root_element();
        assert_eq!(descend(root, &[Step::class("div", "nope"), Step::tag("span")]), Lookup::Missing);
        assert_eq!(descend(root, &[Step::class("div", "vcard"), Step::tag("em")]), Lookup::Missing);
    }

    #[test]
    fn empty_terminal_is_missing() {
        let doc = Html::parse_document(CARD);
        let region = [Step::class("div", "vcard"), Step::class("span", "region")];
        assert_eq!(descend(doc.root_element(), &region), Lookup::Missing);
    }

    #[test]
    fn extract_substitutes_placeholder() {
        static REGION: [Step; 2] = [Step::class("div", "vcard"), Step::class("span", "region")];
        let doc = Html::parse_document(CARD);
        let field = Field { name: "region", path: &REGION, placeholder: "No Region" };
        assert_eq!(extract(&doc, &field), "No Region");
    }

    #[test]
    fn lookup_from_optional_text() {
        assert_eq!(Lookup::from(Some("  Cafe ")), Lookup::Found(s!("Cafe")));
        assert_eq!(Lookup::from(Some("")), Lookup::Missing);
        assert_eq!(Lookup::from(None), Lookup::Missing);
        assert_eq!(Lookup::Missing.or_placeholder("No City"), "No City");
    }

    #[test]
    fn require_reports_selector() {
        let doc = Html::parse_document(CARD);
        let err = require(&doc, &Step::id("ul", "list_parks"), "state").unwrap_err();
        match err {
            Error::MissingContainer { page, selector } => {
                assert_eq!(page, "state");
                assert_eq!(selector, "ul#list_parks");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn child_elements_skip_nested_items() {
        let doc = Html::parse_document(CARD);
        let list = require(&doc, &Step::id("ul", "list"), "test").unwrap();
        let items: Vec<_> = child_elements(list, "li").collect();
        assert_eq!(items.len(), 2);
        let anchor = find_first(items[0], &Step::tag("a")).unwrap();
        assert_eq!(href(anchor), Some("/a/"));
    }
}
