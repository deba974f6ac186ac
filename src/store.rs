// src/store.rs
// On-disk cache file: one flat JSON object, key -> raw page text or a decoded
// API response. Loading never fails; anything unreadable is a cold cache.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::consts::CACHE_FILE;
use crate::error::Result;

/// A cached response.
///
/// On disk the file stays `{ "<url>": "<html>", "<zip>": { ... } }`: markup is
/// a JSON string, a decoded object is stored as is. Any other decoded value
/// (string, number, array, null) is wrapped as `{ "$json": value }` so it
/// still loads back as `Json`.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheValue {
    Text(String),
    Json(Value),
}

const JSON_MARKER: &str = "$json";

fn is_marker(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key(JSON_MARKER)
}

impl Serialize for CacheValue {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CacheValue::Text(text) => ser.serialize_str(text),
            CacheValue::Json(Value::Object(map)) if !is_marker(map) => map.serialize(ser),
            CacheValue::Json(value) => {
                let mut wrapped = ser.serialize_map(Some(1))?;
                wrapped.serialize_entry(JSON_MARKER, value)?;
                wrapped.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CacheValue {
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::String(text) => CacheValue::Text(text),
            Value::Object(mut map) if is_marker(&map) => {
                CacheValue::Json(map.remove(JSON_MARKER).unwrap_or(Value::Null))
            }
            other => CacheValue::Json(other),
        })
    }
}

impl CacheValue {
    pub fn kind(&self) -> &'static str {
        match self {
            CacheValue::Text(_) => "raw text",
            CacheValue::Json(_) => "structured JSON",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CacheValue::Text(text) => Some(text),
            CacheValue::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            CacheValue::Json(value) => Some(value),
            CacheValue::Text(_) => None,
        }
    }
}

impl From<String> for CacheValue {
    fn from(text: String) -> Self {
        CacheValue::Text(text)
    }
}

impl From<Value> for CacheValue {
    fn from(value: Value) -> Self {
        CacheValue::Json(value)
    }
}

pub type Entries = BTreeMap<String, CacheValue>;

#[derive(Clone, Debug)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Entries {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logd!("No cache file at {}; starting cold", self.path.display());
                return Entries::new();
            }
            Err(e) => {
                logw!("Could not read cache {}: {e}; starting cold", self.path.display());
                return Entries::new();
            }
        };

        match serde_json::from_str::<Entries>(&text) {
            Ok(entries) => {
                logf!("Loaded {} cache entries from {}", entries.len(), self.path.display());
                entries
            }
            Err(e) => {
                logw!("Cache {} is corrupt ({e}); starting cold", self.path.display());
                Entries::new()
            }
        }
    }

    /// Rewrite the whole file: write a sibling temp file, then rename over.
    pub fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.tmp_path();
        {
            let mut out = BufWriter::new(fs::File::create(&tmp)?);
            serde_json::to_writer(&mut out, entries)?;
            out.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from(CACHE_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
