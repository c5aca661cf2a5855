//! Loading/error/data bookkeeping for page-level API calls.
//!
//! DESIGN
//! ======
//! Pages hold a `RwSignal<RemoteData<T>>` per list they show. `load_into`
//! flips it to loading, runs the call on the local executor, and records
//! the outcome. A newer load does not cancel an older one; whichever
//! finishes last wins.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// State of one remote resource as a page sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteData<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self { loading: false, error: None, data: None }
    }
}

impl<T> RemoteData<T> {
    /// Mark a request as in flight and clear the previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a finished request. Failures keep the last good data.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

impl<T: Clone> RemoteData<Vec<T>> {
    /// Loaded items, or nothing yet.
    pub fn items(&self) -> Vec<T> {
        self.data.clone().unwrap_or_default()
    }
}

/// Run `fetch` and store its outcome in `target`.
pub fn load_into<T, Fut>(target: RwSignal<RemoteData<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    target.update(RemoteData::begin);
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        target.update(|state| state.finish(result));
    });
}
