// src/site.rs
use std::fmt;

pub const NO_CATEGORY: &str = "No Category";
pub const NO_NAME: &str = "No Name";
pub const NO_CITY: &str = "No City";
pub const NO_REGION: &str = "No Region";
pub const NO_ZIPCODE: &str = "No Zipcode";
pub const NO_TELEPHONE: &str = "No Telephone";

/// A national site as read from its detail page.
///
/// Every field is a non-empty string; anything the page did not provide
/// holds its placeholder instead (`No Name`, `No Zipcode`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    category: String,
    name: String,
    address: String,
    zipcode: String,
    phone: String,
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.trim().is_empty() { s!(placeholder) } else { value }
}

impl Site {
    /// Blank values are replaced by their placeholders.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        zipcode: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            category: or_placeholder(category.into(), NO_CATEGORY),
            name: or_placeholder(name.into(), NO_NAME),
            address: or_placeholder(address.into(), &compose_address(NO_CITY, NO_REGION)),
            zipcode: or_placeholder(zipcode.into(), NO_ZIPCODE),
            phone: or_placeholder(phone.into(), NO_TELEPHONE),
        }
    }

    pub fn category(&self) -> &str { &self.category }
    pub fn name(&self) -> &str { &self.name }
    /// `"city, region"`
    pub fn address(&self) -> &str { &self.address }
    pub fn zipcode(&self) -> &str { &self.zipcode }
    pub fn phone(&self) -> &str { &self.phone }

    pub fn has_zipcode(&self) -> bool {
        self.zipcode != NO_ZIPCODE
    }

    /// One-line summary, e.g. `Isle Royale (National Park): Houghton, MI 49931`.
    pub fn info(&self) -> String {
        format!("{} ({}): {} {}", self.name, self.category, self.address, self.zipcode)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

pub fn compose_address(city: &str, region: &str) -> String {
    join!(city, ", ", region)
}
