//! Day-stamped local cache of API responses.
//!
//! Downloads and caches JSON responses from the IPO schedule API. Schedule
//! data is republished daily, so a cached response is considered fresh for
//! the calendar day it was fetched on and stale afterwards. Individual
//! endpoints are fetched lazily on first access.

use crate::config;
use crate::error::{IpoCalError, Result};
use chrono::Local;
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads and caches JSON responses from the IPO schedule API.
///
/// Tracks a `stamp.txt` holding the fetch date and re-downloads when the
/// calendar day rolls over. Individual responses are fetched lazily on
/// first access.
pub struct CacheManager {
    /// Directory where cached responses are stored.
    pub cache_dir: PathBuf,
    /// If true, never hit the network (use cached responses only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>, offline: bool, timeout: Duration) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// Read the locally cached fetch-date stamp from `stamp.txt`.
    fn local_stamp(&self) -> Option<String> {
        let stamp_file = self.cache_dir.join("stamp.txt");
        if stamp_file.exists() {
            fs::read_to_string(&stamp_file)
                .ok()
                .map(|s| s.trim().to_string())
        } else {
            None
        }
    }

    /// Save today's date to `stamp.txt` in the cache directory.
    fn save_stamp(&self) {
        let stamp_file = self.cache_dir.join("stamp.txt");
        let _ = fs::write(stamp_file, today());
    }

    /// Check if the local cache is out of date.
    ///
    /// Returns `true` if there is no stamp or the stamp is from a previous
    /// day. In offline mode the cache is always treated as fresh, since
    /// re-downloading is not an option anyway.
    pub fn is_stale(&self) -> bool {
        if self.offline {
            return false;
        }
        match self.local_stamp() {
            None => true,
            Some(stamp) => stamp != today(),
        }
    }

    /// Resolve an endpoint template into a full URL and a cache file name.
    ///
    /// `params` fills `{name}` placeholders in the template; every
    /// placeholder must be covered or `InvalidArgument` is returned.
    fn resolve(&self, name: &str, params: &[(&str, String)]) -> Result<(String, String)> {
        let endpoints = config::endpoints();
        let template = endpoints
            .get(name)
            .ok_or_else(|| IpoCalError::NotFound(format!("Unknown endpoint: {}", name)))?;

        let mut path = template.to_string();
        for (key, value) in params {
            path = path.replace(&format!("{{{}}}", key), value);
        }
        if path.contains('{') {
            return Err(IpoCalError::InvalidArgument(format!(
                "Endpoint '{}' is missing parameters: {}",
                name, path
            )));
        }

        let url = format!("{}/{}", config::API_BASE, path);
        let mut file_name = name.to_string();
        for (_, value) in params {
            file_name.push('_');
            file_name.extend(value.chars().map(sanitize_file_char));
        }
        file_name.push_str(".json");
        Ok((url, file_name))
    }

    /// Download a single response from the API.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download_file(&mut self, url: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension("json.tmp");

        let client = self.client().clone();
        let result = (|| -> Result<()> {
            let resp = client.get(url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up partial temp file on any error
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Ensure an endpoint response is cached locally, downloading if needed.
    ///
    /// # Arguments
    ///
    /// * `name` - Logical endpoint name (e.g. `"schedule"`, `"broker_ranking"`).
    /// * `params` - Values for the endpoint's path placeholders.
    ///
    /// # Returns
    ///
    /// Local filesystem path to the cached JSON response.
    pub fn ensure_json(&mut self, name: &str, params: &[(&str, String)]) -> Result<PathBuf> {
        let (url, file_name) = self.resolve(name, params)?;
        let local_path = self.cache_dir.join(&file_name);

        if !local_path.exists() || self.is_stale() {
            if self.offline {
                if local_path.exists() {
                    return Ok(local_path);
                }
                return Err(IpoCalError::NotFound(format!(
                    "Response {} not cached and offline mode is enabled",
                    file_name
                )));
            }
            self.download_file(&url, &local_path)?;
            self.save_stamp();
        }

        Ok(local_path)
    }

    /// Load and parse an endpoint response as JSON.
    ///
    /// If the cached file is corrupt (truncated download, disk error),
    /// it is deleted automatically so the next call re-downloads a fresh copy.
    pub fn load_json(&mut self, name: &str, params: &[(&str, String)]) -> Result<serde_json::Value> {
        let path = self.ensure_json(name, params)?;

        let contents = fs::read_to_string(&path)?;
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(value),
            Err(e) => {
                eprintln!("Corrupt cache file {}: {} -- removing", path.display(), e);
                let _ = fs::remove_file(&path);
                Err(IpoCalError::NotFound(format!(
                    "Cache file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                )))
            }
        }
    }

    /// Remove all cached responses and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// Today's date in the local timezone, formatted `YYYY-MM-DD`.
fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Restrict parameter values to characters safe in a cache file name.
///
/// Path separators and anything else outside `[A-Za-z0-9_-]` become `-`,
/// so a hostile parameter cannot name a file outside the cache directory.
fn sanitize_file_char(c: char) -> char {
    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
        c
    } else {
        '-'
    }
}
