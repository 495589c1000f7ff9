//! Fetch Lifecycle
//!
//! The Loading -> {Error | Success} state machine that governs one
//! asynchronous data load. Each fetching component owns exactly one
//! [`FetchState`]; it settles at most once per request generation.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of one asynchronous data load
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Success(T),
}

impl<T> FetchState<T> {
    /// Terminal state for a settled request
    pub fn settled(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(message) => FetchState::Error(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Monotonic request-generation counter shared between a component and its
/// in-flight requests. A response is applied only while its token is still
/// the newest one, so a superseded request cannot overwrite newer state.
#[derive(Clone, Default)]
pub struct RequestSequence(Rc<Cell<u64>>);

impl RequestSequence {
    /// Start a new generation, invalidating all earlier tokens
    pub fn begin(&self) -> u64 {
        let token = self.0.get() + 1;
        self.0.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

/// Run the fetch lifecycle keyed by `key`.
///
/// On creation, and again whenever `key()` changes, the state resets to
/// `Loading` and `loader(key)` is spawned on the local executor. When the
/// request resolves the state settles into `Success` or `Error` - exactly
/// once per generation, and stale responses are discarded.
pub fn create_fetch<K, T, F, Fut>(
    key: impl Fn() -> K + 'static,
    loader: F,
) -> ReadSignal<FetchState<T>>
where
    K: 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let (state, set_state) = signal(FetchState::Loading);
    let sequence = RequestSequence::default();

    Effect::new(move |_| {
        let token = sequence.begin();
        set_state.set(FetchState::Loading);
        let request = loader(key());
        let sequence = sequence.clone();
        spawn_local(async move {
            let settled = FetchState::settled(request.await);
            if sequence.is_current(token) {
                set_state.set(settled);
            }
        });
    });

    state
}
