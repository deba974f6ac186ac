// src/cli.rs
// Interactive prompt loop: pick a state, list its sites, pick a site to see
// what is nearby. Bad input re-prompts; failed lookups are reported and the
// session carries on.

use std::io::{BufRead, Write};

use crate::{
    core::{net::Fetch, sanitize::state_key},
    error::Result,
    nearby,
    progress::Progress,
    scrape::Scraper,
    site::Site,
    specs::states::StateDirectory,
};

const EXIT: &str = "exit";
const BACK: &str = "back";
const STATE_PROMPT: &str = r#"Enter a state name (e.g. Michigan, michigan) or "exit": "#;
const DETAIL_PROMPT: &str = r#"Choose the number for detail search or "exit" or "back": "#;
const RULE: &str = "----------------------------------";

enum Next {
    States,
    Sites(Vec<Site>),
    Exit,
}

/// Writes a one-line notice before a state's detail pages are read.
struct Notice<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Progress for Notice<'_, W> {
    fn begin(&mut self, total: usize) {
        if let Err(e) = writeln!(self.out, "Loading {total} sites...") {
            logw!("Could not write progress notice: {e}");
        }
    }
}

/// Run until `exit` or end of input.
pub fn run_session<F, R, W>(scraper: &mut Scraper<F>, input: R, out: &mut W) -> Result<()>
where
    F: Fetch,
    R: BufRead,
    W: Write,
{
    let states = scraper.build_state_url_dict()?;
    let mut lines = input.lines();
    let mut next = Next::States;

    loop {
        next = match next {
            Next::States => choose_state(scraper, &states, &mut lines, out)?,
            Next::Sites(sites) => choose_site(scraper, sites, &mut lines, out)?,
            Next::Exit => return Ok(()),
        };
    }
}

fn prompt<I, W>(lines: &mut I, out: &mut W, text: &str) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    write!(out, "{text}")?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(state_key(&line?))),
        None => Ok(None),
    }
}

fn choose_state<F, I, W>(
    scraper: &mut Scraper<F>,
    states: &StateDirectory,
    lines: &mut I,
    out: &mut W,
) -> Result<Next>
where
    F: Fetch,
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    loop {
        let Some(choice) = prompt(lines, out, STATE_PROMPT)? else { return Ok(Next::Exit) };
        if choice == EXIT {
            return Ok(Next::Exit);
        }
        let Some(state_url) = states.get(&choice) else {
            writeln!(out, "[Error] Enter proper state name")?;
            continue;
        };

        let fetched = {
            let mut notice = Notice { out: &mut *out };
            scraper.get_sites_for_state(state_url, Some(&mut notice))
        };
        match fetched {
            Ok(sites) => {
                print_sites(out, &choice, &sites)?;
                return Ok(Next::Sites(sites));
            }
            Err(e) => {
                loge!("Listing {choice} failed: {e}");
                writeln!(out, "[Error] {e}")?;
            }
        }
    }
}

fn choose_site<F, I, W>(
    scraper: &mut Scraper<F>,
    sites: Vec<Site>,
    lines: &mut I,
    out: &mut W,
) -> Result<Next>
where
    F: Fetch,
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    loop {
        let Some(choice) = prompt(lines, out, DETAIL_PROMPT)? else { return Ok(Next::Exit) };
        match choice.as_str() {
            EXIT => return Ok(Next::Exit),
            BACK => return Ok(Next::States),
            _ => {}
        }

        let Some(site) = pick(&choice, &sites) else {
            writeln!(out, "[Error] Invalid input")?;
            continue;
        };

        match scraper.get_nearby_places(site) {
            Ok(response) => print_nearby(out, site, &nearby::format_nearby(&response))?,
            Err(e) => {
                loge!("Nearby search for {} failed: {e}", site.name());
                writeln!(out, "[Error] {e}")?;
            }
        }
    }
}

/// 1-based index into the current listing.
fn pick<'a>(choice: &str, sites: &'a [Site]) -> Option<&'a Site> {
    let n: usize = choice.parse().ok()?;
    n.checked_sub(1).and_then(|i| sites.get(i))
}

fn print_sites<W: Write>(out: &mut W, state: &str, sites: &[Site]) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "List of national sites in {state}")?;
    writeln!(out, "{RULE}")?;
    for (i, site) in sites.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, site.info())?;
    }
    Ok(())
}

fn print_nearby<W: Write>(out: &mut W, site: &Site, lines: &[String]) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Places near {}", site.name())?;
    writeln!(out, "{RULE}")?;
    if lines.is_empty() {
        writeln!(out, "No nearby places found")?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{pick, Notice};
    use crate::progress::Progress;
    use crate::site::Site;
    use std::io::{self, Write};

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn notice_survives_a_closed_output() {
        let mut out = Closed;
        let mut notice = Notice { out: &mut out };
        notice.begin(3);
        notice.finish();
    }

    #[test]
    fn notice_announces_total() {
        let mut out = Vec::new();
        Notice { out: &mut out }.begin(2);
        assert_eq!(String::from_utf8(out).unwrap(), "Loading 2 sites...\n");
    }

    #[test]
    fn pick_is_one_based_and_bounds_checked() {
        let sites = vec![
            Site::new("A", "First", "", "1", ""),
            Site::new("B", "Second", "", "2", ""),
        ];
        assert_eq!(pick("1", &sites).map(Site::name), Some("First"));
        assert_eq!(pick("2", &sites).map(Site::name), Some("Second"));
        assert!(pick("0", &sites).is_none());
        assert!(pick("3", &sites).is_none());
        assert!(pick("-1", &sites).is_none());
        assert!(pick("two", &sites).is_none());
    }
}
