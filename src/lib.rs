//! IPO calendar SDK for Rust.
//!
//! Provides a high-level client for Korean IPO (공모주) schedule data.
//! Responses are fetched from the schedule API as JSON, cached locally
//! per calendar day, and laid out in-process by a pure work-week
//! calendar engine (5-column grid, multi-day event segmentation,
//! first-fit row packing, deterministic per-issuer colors).
//!
//! # Quick start
//!
//! ```no_run
//! use std::collections::HashSet;
//! use ipocal_sdk::{extract_events, generate_weeks, segment_week, IpoCalSdk};
//!
//! let sdk = IpoCalSdk::builder().build().unwrap();
//!
//! // Fetch a month's schedule and lay it out
//! let records = sdk.schedule().month(2025, 11).unwrap();
//! let events = extract_events(&records, &HashSet::new());
//! for week in generate_weeks(2025, 11) {
//!     let _segments = segment_week(&week, &events, 2025, 11);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod calendar;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncIpoCalSdk;
pub use cache::CacheManager;
pub use calendar::{
    color_for_id, days_in_month, extract_events, generate_weeks, segment_week, text_color_for,
    week_height, CalendarDay, CalendarEvent, EventKind, EventSegment, Week, WEEK_COLS,
};
pub use client::ApiClient;
pub use error::{IpoCalError, Result};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// IpoCalSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`IpoCalSdk`] instance.
///
/// Use [`IpoCalSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](IpoCalSdkBuilder::build) to create the SDK.
pub struct IpoCalSdkBuilder {
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for IpoCalSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl IpoCalSdkBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/ipocal-sdk` on Linux, `~/Library/Caches/ipocal-sdk`
    /// on macOS, `%LOCALAPPDATA%\ipocal-sdk` on Windows).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never hits the network and only serves
    /// previously cached responses. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for API calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, initializing the cache directory.
    ///
    /// No network call happens here -- responses are fetched lazily on
    /// first query.
    pub fn build(self) -> Result<IpoCalSdk> {
        let cache = CacheManager::new(self.cache_dir, self.offline, self.timeout)?;
        Ok(IpoCalSdk {
            client: ApiClient::new(cache),
        })
    }
}

// ---------------------------------------------------------------------------
// IpoCalSdk
// ---------------------------------------------------------------------------

/// The main entry point for the IPO calendar SDK.
///
/// Wraps an [`ApiClient`] (which owns the [`CacheManager`]) and exposes
/// domain-specific query interfaces as lightweight borrowing wrappers.
/// The calendar engine itself is pure and freestanding -- see
/// [`generate_weeks`], [`extract_events`], and [`segment_week`].
///
/// Created via [`IpoCalSdk::builder()`].
pub struct IpoCalSdk {
    client: ApiClient,
}

impl IpoCalSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> IpoCalSdkBuilder {
        IpoCalSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the IPO schedule query interface.
    pub fn schedule(&self) -> queries::schedule::ScheduleQuery<'_> {
        queries::schedule::ScheduleQuery::new(&self.client)
    }

    /// Access the broker ranking query interface.
    pub fn brokers(&self) -> queries::brokers::BrokerQuery<'_> {
        queries::brokers::BrokerQuery::new(&self.client)
    }

    // -- Metadata and utility methods --------------------------------------

    /// Load and return the API metadata (version, last publish date).
    pub fn meta(&self) -> Result<models::Meta> {
        self.client.get_into("meta", &[])
    }

    /// Drop any responses fetched on a previous day.
    ///
    /// Returns `true` if the cache was stale and has been cleared (meaning
    /// subsequent queries will re-download), or `false` if already fresh.
    pub fn refresh(&self) -> Result<bool> {
        let stale = self.client.cache.borrow().is_stale();
        if stale {
            self.client.reset()?;
        }
        Ok(stale)
    }

    /// Consume the SDK and release all resources.
    ///
    /// Closes the HTTP client. This happens automatically on drop, but
    /// can be invoked explicitly for deterministic cleanup.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for IpoCalSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.client.cache.borrow();
        write!(
            f,
            "IpoCalSdk(cache_dir={}, offline={})",
            cache.cache_dir.display(),
            cache.offline
        )
    }
}
