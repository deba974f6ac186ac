// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod nearby;
pub mod progress;
pub mod scrape;
pub mod site;
pub mod specs;
pub mod store;

pub use error::{Error, Result};

#[doc(hidden)]
pub use ::log as __log;
