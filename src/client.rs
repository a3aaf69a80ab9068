//! HTTP client layer over the response cache.
//!
//! The query interfaces borrow an [`ApiClient`], which resolves logical
//! endpoint names through the [`CacheManager`] and deserializes the JSON
//! payloads into typed models. API responses wrap their payload in a
//! `{"data": ...}` envelope; older deployments return the payload bare,
//! so unwrapping falls back to the root value.

use crate::cache::CacheManager;
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::cell::RefCell;

/// Wraps the response cache and exposes typed access to API endpoints.
pub struct ApiClient {
    /// The cache manager used to download/locate responses.
    pub cache: RefCell<CacheManager>,
}

impl ApiClient {
    /// Create a client backed by the given cache.
    pub fn new(cache: CacheManager) -> Self {
        Self {
            cache: RefCell::new(cache),
        }
    }

    /// Fetch an endpoint response as raw JSON (cached).
    ///
    /// # Arguments
    ///
    /// * `name` - Logical endpoint name (e.g. `"schedule"`).
    /// * `params` - Values for the endpoint's path placeholders.
    pub fn get_json(&self, name: &str, params: &[(&str, String)]) -> Result<serde_json::Value> {
        self.cache.borrow_mut().load_json(name, params)
    }

    /// Fetch an endpoint response and deserialize its payload into `T`.
    ///
    /// Unwraps the `data` envelope when present, otherwise deserializes
    /// the root value.
    pub fn get_into<T: DeserializeOwned>(
        &self,
        name: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut value = self.get_json(name, params)?;
        if let Some(data) = value.get_mut("data") {
            value = data.take();
        }
        let item: T = serde_json::from_value(value)?;
        Ok(item)
    }

    /// Clear the response cache and drop the HTTP client.
    pub fn reset(&self) -> Result<()> {
        let mut cache = self.cache.borrow_mut();
        cache.clear()?;
        cache.close();
        Ok(())
    }
}
