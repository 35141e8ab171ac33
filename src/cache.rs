use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// On-disk layout: the parameters a value was computed from, next to the value.
#[derive(Serialize, Deserialize)]
struct CacheEntry<K, T> {
    key: K,
    value: T,
}

fn cache_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

/// Loads `<dir>/<name>.json` when it exists and was stored under the same
/// `key`; otherwise runs `getter` and stores its value there, with `key`,
/// before returning it.
pub fn get_or_compute<K, T, F>(dir: &Path, name: &str, key: &K, getter: F) -> Result<T>
    where K: Serialize, T: Serialize + DeserializeOwned, F: FnOnce() -> Result<T> {
    let filename = cache_file(dir, name);
    let key = serde_json::to_value(key)?;
    if filename.exists() {
        let reader = BufReader::new(File::open(&filename)?);
        let cached: CacheEntry<Value, Value> = serde_json::from_reader(reader)?;
        if cached.key == key {
            info!("Reading {} from cached file {:?}", name, filename);
            return Ok(serde_json::from_value(cached.value)?);
        }
        info!("Cached {} in {:?} was computed from other parameters", name, filename);
    }

    info!("Getting {}", name);
    let value = getter()?;
    fs::create_dir_all(dir)?;
    let mut writer = BufWriter::new(File::create(&filename)?);
    serde_json::to_writer(&mut writer, &CacheEntry { key: &key, value: &value })?;
    writer.flush()?;
    Ok(value)
}
