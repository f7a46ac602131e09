use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::locator::{ResourceLocator, SearchError, SearchOutcome, ZIPCODE_NOT_FOUND_MESSAGE};
use crate::models::{Coordinate, Resource, SearchQuery};

/// Per-invocation cancellation flag.
///
/// A token is cancelled once its session has started a newer search or
/// been cancelled outright.
#[derive(Debug, Clone)]
pub struct SearchToken {
    generation: u64,
    current: Option<Arc<AtomicU64>>,
}

impl SearchToken {
    /// Token that is never cancelled, for one-shot searches outside a session
    pub fn detached() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.load(Ordering::SeqCst) != self.generation)
    }
}

/// What a view currently shows for its resource search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SearchState {
    Idle,
    Loading {
        zipcode: String,
        radius_miles: f64,
    },
    Loaded {
        zipcode: String,
        radius_miles: f64,
        origin: Coordinate,
        resources: Vec<Resource>,
    },
    ZipcodeNotFound {
        zipcode: String,
        message: String,
    },
    Failed {
        message: String,
    },
}

/// Search state holder with last-request-wins semantics
pub struct SearchSession {
    generation: Arc<AtomicU64>,
    state: Mutex<SearchState>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            state: Mutex::new(SearchState::Idle),
        }
    }

    /// Start a new invocation, superseding every earlier token
    pub fn begin(&self) -> SearchToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SearchToken {
            generation,
            current: Some(Arc::clone(&self.generation)),
        }
    }

    /// Supersede any in-flight search without starting a new one
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Publish `state` if `token` is still current. Returns whether it was applied.
    pub async fn commit(&self, token: &SearchToken, state: SearchState) -> bool {
        let mut guard = self.state.lock().await;
        if token.is_cancelled() {
            return false;
        }
        *guard = state;
        true
    }

    pub async fn state(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    /// Run a search and publish its result unless a newer search started meanwhile.
    ///
    /// Returns whether this invocation's result became the visible state.
    pub async fn search(&self, locator: &ResourceLocator, zipcode: &str, radius_miles: f64) -> bool {
        let token = self.begin();

        let Some(query) = SearchQuery::new(zipcode, radius_miles) else {
            let message = if zipcode.trim().is_empty() {
                "Please enter a zipcode."
            } else {
                "Please choose a search radius greater than zero."
            };
            return self
                .commit(&token, SearchState::Failed { message: message.to_string() })
                .await;
        };

        self.commit(
            &token,
            SearchState::Loading {
                zipcode: query.zipcode().to_string(),
                radius_miles: query.radius_miles(),
            },
        )
        .await;

        let next = match locator.locate(&query, &token).await {
            Ok(SearchOutcome::Found { origin, resources }) => SearchState::Loaded {
                zipcode: query.zipcode().to_string(),
                radius_miles: query.radius_miles(),
                origin,
                resources,
            },
            Ok(SearchOutcome::ZipcodeNotFound) => SearchState::ZipcodeNotFound {
                zipcode: query.zipcode().to_string(),
                message: ZIPCODE_NOT_FOUND_MESSAGE.to_string(),
            },
            Err(SearchError::Cancelled) => return false,
            Err(e) => {
                tracing::error!("Resource search for {} failed: {}", query.zipcode(), e);
                SearchState::Failed {
                    message: e.user_message(),
                }
            }
        };

        let applied = self.commit(&token, next).await;
        if !applied {
            tracing::debug!("Discarded stale results for {}", query.zipcode());
        }
        applied
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
