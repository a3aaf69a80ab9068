//! Async wrapper around [`IpoCalSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! The blocking work is a cached file read in the common case, so this
//! approach stays cheap.
//!
//! # Example
//!
//! ```no_run
//! # use ipocal_sdk::AsyncIpoCalSdk;
//! # async fn example() -> ipocal_sdk::Result<()> {
//! let sdk = AsyncIpoCalSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let records = sdk.run(|s| s.schedule().month(2025, 11)).await?;
//!
//! // Convenience method for the month schedule
//! let records = sdk.month(2025, 11).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{IpoCalError, Result};
use crate::models::{BrokerRank, IpoRecord, Meta};
use crate::IpoCalSdk;

// ---------------------------------------------------------------------------
// AsyncIpoCalSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncIpoCalSdk`] instance.
pub struct AsyncIpoCalSdkBuilder {
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncIpoCalSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AsyncIpoCalSdkBuilder {
    /// Set a custom cache directory.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for API calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK, initializing the cache directory.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncIpoCalSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = IpoCalSdk::builder();
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            builder = builder.offline(self.offline).timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncIpoCalSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| IpoCalError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncIpoCalSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`IpoCalSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`IpoCalSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncIpoCalSdk {
    inner: Arc<Mutex<IpoCalSdk>>,
}

impl AsyncIpoCalSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncIpoCalSdkBuilder {
        AsyncIpoCalSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&IpoCalSdk` reference and should return
    /// a `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ipocal_sdk::AsyncIpoCalSdk;
    /// # async fn example() -> ipocal_sdk::Result<()> {
    /// # let sdk = AsyncIpoCalSdk::builder().build().await?;
    /// let upcoming = sdk.run(|s| s.schedule().upcoming()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&IpoCalSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| IpoCalError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| IpoCalError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the month schedule asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`ScheduleQuery::month`](crate::queries::ScheduleQuery::month).
    pub async fn month(&self, year: i32, month: u32) -> Result<Vec<IpoRecord>> {
        self.run(move |s| s.schedule().month(year, month)).await
    }

    /// Fetch upcoming IPOs asynchronously.
    pub async fn upcoming(&self) -> Result<Vec<IpoRecord>> {
        self.run(|s| s.schedule().upcoming()).await
    }

    /// Fetch the broker ranking table asynchronously.
    pub async fn rankings(&self) -> Result<Vec<BrokerRank>> {
        self.run(|s| s.brokers().rankings()).await
    }

    /// Load and return the API metadata asynchronously.
    pub async fn meta(&self) -> Result<Meta> {
        self.run(|s| s.meta()).await
    }

    /// Drop any responses fetched on a previous day.
    pub async fn refresh(&self) -> Result<bool> {
        self.run(|s| s.refresh()).await
    }

    /// Close the SDK, releasing all resources.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| IpoCalError::InvalidArgument("SDK lock poisoned".into()))?;
            // Dropping the MutexGuard drops the SDK
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| IpoCalError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
