//! Quote store: the single snapshot of events-with-quotes.
//!
//! A full-replace cache with no TTL, partial merge, or de-duplication: each
//! successful refresh swaps the whole snapshot atomically. `refresh()` is
//! single-flight (concurrent callers share one in-flight fetch) and can be
//! cancelled; the clock is injectable so tests control staleness
//! deterministically.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::{AbortHandle, Abortable, BoxFuture, Shared};
use futures_util::FutureExt;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::domain::Event;
use crate::error::ProviderError;
use crate::provider::OddsProvider;

/// Time source for the in-the-future cutoff applied at refresh.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Immutable snapshot handle; cheap to clone and share.
pub type Snapshot = Arc<Vec<Event>>;

type RefreshFuture = Shared<BoxFuture<'static, Result<Snapshot, ProviderError>>>;

struct Inflight {
    future: RefreshFuture,
    abort: AbortHandle,
}

struct Inner {
    provider: Arc<dyn OddsProvider>,
    clock: Arc<dyn Clock>,
    snapshot: RwLock<Snapshot>,
    inflight: Mutex<Option<Inflight>>,
}

/// Holds the most recently fetched snapshot and coordinates refreshes.
#[derive(Clone)]
pub struct QuoteStore {
    inner: Arc<Inner>,
}

impl QuoteStore {
    pub fn new(provider: Arc<dyn OddsProvider>) -> Self {
        Self::with_clock(provider, Arc::new(SystemClock))
    }

    pub fn with_clock(provider: Arc<dyn OddsProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                clock,
                snapshot: RwLock::new(Arc::new(Vec::new())),
                inflight: Mutex::new(None),
            }),
        }
    }

    /// The last fetched snapshot, or empty if none yet.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.snapshot.read().clone()
    }

    /// Fetch from the provider, discard events whose kickoff is not strictly
    /// in the future, swap the snapshot, and return it.
    ///
    /// Concurrent callers join the same in-flight fetch and observe the same
    /// result, including a shared failure. A failed or cancelled refresh
    /// leaves the previous snapshot untouched; the caller must re-invoke
    /// explicitly, no retry happens here.
    pub async fn refresh(&self) -> Result<Snapshot, ProviderError> {
        let future = {
            let mut guard = self.inner.inflight.lock();
            match guard.as_ref() {
                Some(inflight) => {
                    debug!("joining in-flight refresh");
                    inflight.future.clone()
                }
                None => {
                    let inner = Arc::clone(&self.inner);
                    let (abort, registration) = AbortHandle::new_pair();
                    let fetch = async move {
                        let events = inner.provider.fetch_events().await?;
                        let now = inner.clock.now();
                        let fetched = events.len();
                        let upcoming: Vec<Event> = events
                            .into_iter()
                            .filter(|e| e.commence_time > now)
                            .collect();
                        let snapshot: Snapshot = Arc::new(upcoming);
                        *inner.snapshot.write() = Arc::clone(&snapshot);
                        info!(
                            events = snapshot.len(),
                            discarded = fetched - snapshot.len(),
                            "snapshot refreshed"
                        );
                        Ok(snapshot)
                    };
                    let future: RefreshFuture = Abortable::new(fetch, registration)
                        .map(|outcome| match outcome {
                            Ok(result) => result,
                            Err(futures_util::future::Aborted) => Err(ProviderError::Cancelled),
                        })
                        .boxed()
                        .shared();
                    *guard = Some(Inflight {
                        future: future.clone(),
                        abort,
                    });
                    future
                }
            }
        };

        let result = future.await;

        // Whichever waiter settles first clears the slot, unless a newer
        // refresh has already replaced it.
        let mut guard = self.inner.inflight.lock();
        if guard
            .as_ref()
            .map_or(false, |inflight| inflight.future.peek().is_some())
        {
            *guard = None;
        }

        result
    }

    /// Abort the in-flight refresh, if any. Waiters observe
    /// [`ProviderError::Cancelled`]; the snapshot is left as it was.
    pub fn cancel_refresh(&self) {
        let mut guard = self.inner.inflight.lock();
        if let Some(inflight) = guard.take() {
            debug!("cancelling in-flight refresh");
            inflight.abort.abort();
        }
    }
}
