// src/scrape.rs
use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::{
    cache::Cache,
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    error::Result,
    nearby,
    progress::{NullProgress, Progress},
    site::Site,
    specs::{self, states::StateDirectory},
    store::CacheStore,
};

/// Ties the cache, the network and the page specs together.
///
/// Every page goes through the cache first; a state's sites are read one
/// after another, never in parallel.
pub struct Scraper<F: Fetch = HttpFetcher> {
    cache: Cache,
    fetcher: F,
    options: AppOptions,
    base: Url,
}

impl Scraper<HttpFetcher> {
    /// Live HTTP fetcher, cache file from `options.cache.path`.
    pub fn from_options(options: AppOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options.fetch)?;
        let cache = Cache::open(CacheStore::new(&options.cache.path));
        Self::new(cache, fetcher, options)
    }
}

impl<F: Fetch> Scraper<F> {
    pub fn new(cache: Cache, fetcher: F, options: AppOptions) -> Result<Self> {
        let base = Url::parse(&options.fetch.base_url)?;
        Ok(Self { cache, fetcher, options, base })
    }

    fn page(&mut self, url: &str) -> Result<Html> {
        let fetcher = &self.fetcher;
        let text = self.cache.resolve_text(url, || fetcher.get_text(url))?;
        Ok(Html::parse_document(&text))
    }

    /// State name (lower case) → state page URL, read from the home page.
    pub fn build_state_url_dict(&mut self) -> Result<StateDirectory> {
        let home = self.options.fetch.base_url.clone();
        let doc = self.page(&home)?;
        specs::states::list_regions(&doc, &self.base)
    }

    pub fn get_site_instance(&mut self, site_url: &str) -> Result<Site> {
        let doc = self.page(site_url)?;
        Ok(specs::site::build_site(&doc))
    }

    /// Every site listed on a state page, in listing order. Stops at the
    /// first page that cannot be fetched.
    pub fn get_sites_for_state(
        &mut self,
        state_url: &str,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<Site>> {
        let mut silent = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut silent,
        };

        progress.log(&format!("Reading {state_url}"));
        let result = self.collect_sites(state_url, progress);
        progress.finish();
        result
    }

    fn collect_sites(&mut self, state_url: &str, progress: &mut dyn Progress) -> Result<Vec<Site>> {
        let urls = {
            let doc = self.page(state_url)?;
            specs::parks::list_site_urls(&doc, &self.base)?
        };
        progress.begin(urls.len());

        let mut sites = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            let site = self.get_site_instance(url)?;
            progress.item_done(i, site.name());
            sites.push(site);
        }
        Ok(sites)
    }

    /// Raw radius-search response around `site`'s postal code.
    pub fn get_nearby_places(&mut self, site: &Site) -> Result<Value> {
        nearby::nearby(&mut self.cache, &self.fetcher, &self.options.nearby, site)
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }
}
