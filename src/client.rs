//! poe.watch API client: coordinated refresh, cached reference data and
//! rate-limited item detail requests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::{mpsc, watch};

use crate::error::{Error, Result};
use crate::limiter::RequestLimiter;
use crate::models::{Category, Item, ItemData, League, PriceData};
use crate::query::{ItemQuery, LeagueQuery};

/// Default poe.watch API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.poe.watch";

/// Client configuration.
pub struct Options {
    /// Fetch categories, leagues and item data immediately on construction.
    /// Failures surface on the channel returned by
    /// [`PoeWatch::error_events`], never as a panic.
    pub auto_update: bool,
    /// Base URL of the poe.watch API.
    pub base_url: String,
    /// Limiter shared with other clients. `None` builds a private limiter
    /// with the default limits.
    pub limiter: Option<Arc<RequestLimiter>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_update: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            limiter: None,
        }
    }
}

/// The three reference snapshots plus the sticky readiness flag. Snapshot
/// replacement and the readiness check must happen under one lock so the
/// ready transition is observed exactly once.
#[derive(Default)]
struct CacheState {
    categories: Vec<Category>,
    leagues: Vec<League>,
    item_data: Vec<ItemData>,
    ready: bool,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    limiter: Arc<RequestLimiter>,
    updating: AtomicBool,
    state: Mutex<CacheState>,
    ready_tx: watch::Sender<bool>,
    error_tx: mpsc::UnboundedSender<Error>,
    error_rx: Mutex<Option<mpsc::UnboundedReceiver<Error>>>,
}

/// Wire shape of the item endpoint; the `data` member holds the per-league
/// price points. The surrounding catalog fields are ignored in favor of the
/// already-matched catalog entry.
#[derive(Debug, Deserialize)]
struct ItemDetailResponse {
    #[serde(default)]
    data: Vec<PriceData>,
}

/// Read-only client for the poe.watch API.
///
/// Cheap to clone; clones share the cache, the readiness state and the rate
/// limiter.
#[derive(Clone)]
pub struct PoeWatch {
    inner: Arc<Inner>,
}

impl PoeWatch {
    /// Creates a client with the given options.
    ///
    /// Must be called from within a tokio runtime when
    /// [`Options::auto_update`] is enabled, since the initial refresh runs on
    /// a spawned task.
    pub fn new(options: Options) -> Self {
        let (ready_tx, _) = watch::channel(false);
        let (error_tx, error_rx) = mpsc::unbounded_channel();
        let limiter = options
            .limiter
            .unwrap_or_else(|| Arc::new(RequestLimiter::default()));

        let client = Self {
            inner: Arc::new(Inner {
                http: reqwest::Client::new(),
                base_url: options.base_url.trim_end_matches('/').to_string(),
                limiter,
                updating: AtomicBool::new(false),
                state: Mutex::new(CacheState::default()),
                ready_tx,
                error_tx,
                error_rx: Mutex::new(Some(error_rx)),
            }),
        };

        if options.auto_update {
            let updater = client.clone();
            tokio::spawn(async move {
                if let Err(error) = updater.update().await {
                    warn!("Initial update failed: {error}");
                    let _ = updater.inner.error_tx.send(error);
                }
            });
        }

        client
    }

    /// Creates a client with the default options (auto-update enabled).
    pub fn with_defaults() -> Self {
        Self::new(Options::default())
    }

    /// Requests category, league and item data and replaces the cached
    /// snapshots.
    ///
    /// Only one coordinated update may run at a time; overlapping calls fail
    /// with [`Error::UpdateInProgress`] without issuing any network calls.
    /// The three fetches run concurrently and all of them settle before this
    /// method returns: successful snapshot replacements are kept even when a
    /// sibling fetch fails, and the first error in submission order is
    /// reported.
    pub async fn update(&self) -> Result<()> {
        if self
            .inner
            .updating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::UpdateInProgress);
        }

        info!("Updating categories, leagues and item data");
        let (categories, leagues, item_data) = tokio::join!(
            self.request_categories(),
            self.request_leagues(),
            self.request_itemdata(),
        );

        // Release the guard before the caller can observe the outcome so a
        // new update may start immediately afterwards.
        self.inner.updating.store(false, Ordering::Release);

        let result = match (categories, leagues, item_data) {
            (Ok(_), Ok(_), Ok(_)) => Ok(()),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        };

        match &result {
            Ok(()) => info!("Update complete"),
            Err(error) => warn!("Update failed: {error}"),
        }

        result
    }

    /// Requests category data and replaces the cached snapshot.
    pub async fn request_categories(&self) -> Result<Vec<Category>> {
        let categories: Vec<Category> = self.fetch("categories").await?;
        debug!("Fetched {} categories", categories.len());

        let mut state = self.inner.state.lock().unwrap();
        state.categories = categories.clone();
        self.check_ready(&mut state);

        Ok(categories)
    }

    /// Requests league data and replaces the cached snapshot.
    pub async fn request_leagues(&self) -> Result<Vec<League>> {
        let leagues: Vec<League> = self.fetch("leagues").await?;
        debug!("Fetched {} leagues", leagues.len());

        let mut state = self.inner.state.lock().unwrap();
        state.leagues = leagues.clone();
        self.check_ready(&mut state);

        Ok(leagues)
    }

    /// Requests the item catalog and replaces the cached snapshot.
    pub async fn request_itemdata(&self) -> Result<Vec<ItemData>> {
        let item_data: Vec<ItemData> = self.fetch("itemdata").await?;
        debug!("Fetched {} catalog entries", item_data.len());

        let mut state = self.inner.state.lock().unwrap();
        state.item_data = item_data.clone();
        self.check_ready(&mut state);

        Ok(item_data)
    }

    /// Requests current price data for the item matching `query`.
    ///
    /// Fails with [`Error::NotReady`] until all three reference datasets
    /// have been fetched, and with [`Error::InvalidItemQuery`] when no
    /// catalog entry matches; neither case issues a network call.
    pub async fn request_item(&self, query: &ItemQuery) -> Result<Item> {
        let item_data = self.get_item_data(query);

        if !self.is_ready() {
            return Err(Error::NotReady);
        }
        let item_data = item_data.ok_or(Error::InvalidItemQuery)?;

        let detail: ItemDetailResponse =
            self.fetch(&format!("item?id={}", item_data.id)).await?;
        debug!(
            "Fetched price data for item {} across {} leagues",
            item_data.id,
            detail.data.len()
        );

        Ok(Item::new(item_data, detail.data))
    }

    /// Returns the catalog entry matching `query`, if any.
    ///
    /// Matching compares every property present in the query for equality
    /// and returns the first matching entry in catalog order. The catalog
    /// must be populated first via [`PoeWatch::update`] or
    /// [`PoeWatch::request_itemdata`].
    pub fn get_item_data(&self, query: &ItemQuery) -> Option<ItemData> {
        let query = query.normalized();
        if query.is_empty() {
            return None;
        }

        let state = self.inner.state.lock().unwrap();
        state
            .item_data
            .iter()
            .find(|item| query.matches(item))
            .cloned()
    }

    /// Returns the league matching `query`, if any.
    ///
    /// League data must be populated first via [`PoeWatch::update`] or
    /// [`PoeWatch::request_leagues`].
    pub fn get_league(&self, query: &LeagueQuery) -> Option<League> {
        if query.is_empty() {
            return None;
        }

        let state = self.inner.state.lock().unwrap();
        state
            .leagues
            .iter()
            .find(|league| query.matches(league))
            .cloned()
    }

    /// True while a coordinated update is in flight.
    pub fn is_updating(&self) -> bool {
        self.inner.updating.load(Ordering::Acquire)
    }

    /// True once all three reference datasets have been fetched.
    pub fn is_ready(&self) -> bool {
        self.inner.state.lock().unwrap().ready
    }

    /// True if category data is available.
    pub fn has_categories(&self) -> bool {
        !self.inner.state.lock().unwrap().categories.is_empty()
    }

    /// True if league data is available.
    pub fn has_leagues(&self) -> bool {
        !self.inner.state.lock().unwrap().leagues.is_empty()
    }

    /// True if the item catalog is available.
    pub fn has_item_data(&self) -> bool {
        !self.inner.state.lock().unwrap().item_data.is_empty()
    }

    /// A copy of the cached category snapshot.
    pub fn categories(&self) -> Vec<Category> {
        self.inner.state.lock().unwrap().categories.clone()
    }

    /// A copy of the cached league snapshot.
    pub fn leagues(&self) -> Vec<League> {
        self.inner.state.lock().unwrap().leagues.clone()
    }

    /// A copy of the cached item catalog.
    pub fn item_data(&self) -> Vec<ItemData> {
        self.inner.state.lock().unwrap().item_data.clone()
    }

    /// Resolves once all three datasets have been fetched successfully.
    /// Resolves immediately when the client is already ready.
    pub async fn wait_ready(&self) {
        let mut ready_rx = self.inner.ready_tx.subscribe();
        while !*ready_rx.borrow_and_update() {
            if ready_rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Returns a receiver observing the readiness flag. The flag flips to
    /// `true` at most once per client lifetime.
    pub fn ready_signal(&self) -> watch::Receiver<bool> {
        self.inner.ready_tx.subscribe()
    }

    /// Hands out the receiver for errors raised by the construction-time
    /// update. Returns `None` on every call after the first.
    pub fn error_events(&self) -> Option<mpsc::UnboundedReceiver<Error>> {
        self.inner.error_rx.lock().unwrap().take()
    }

    /// Flips the client to ready the first time all three snapshots are
    /// populated. Announced at most once; later fetches keep replacing
    /// snapshots without re-announcing.
    fn check_ready(&self, state: &mut CacheState) {
        if state.ready {
            return;
        }

        if !state.categories.is_empty()
            && !state.leagues.is_empty()
            && !state.item_data.is_empty()
        {
            state.ready = true;
            info!("All reference data available, client is ready");
            self.inner.ready_tx.send_replace(true);
        }
    }

    /// Issues one rate-limited GET against the API and decodes the JSON
    /// response.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.inner.base_url, path);
        debug!("Requesting {url}");

        self.inner
            .limiter
            .schedule(async {
                let response = self.inner.http.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(Error::HttpStatus(response.status()));
                }

                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            })
            .await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
