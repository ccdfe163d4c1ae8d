//! Session gate for the auth view and protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent checks share the session store:
//! - auth-view entry runs [`check_token`] once, consulting the remote
//!   validator, and decides whether to skip the form;
//! - every protected navigation runs [`protected_access`], which is local,
//!   synchronous, and never touches the network.
//!
//! Both fail closed: any doubt about the stored record clears it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::Future;

use futures::future::{AbortHandle, abortable};

use super::session::{SessionBackend, SessionStore, StoredSession};
use crate::net::validate::TokenValidator;

/// Auth-view entry phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    /// Entry check in flight; only a placeholder renders.
    #[default]
    Loading,
    /// No usable session; the auth form renders.
    Unauthenticated,
    /// Session confirmed; the view navigates to the protected area.
    Authenticated,
}

impl GuardPhase {
    pub fn shows_form(self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Outcome of a protected-view entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect,
}

/// Local gate run on every protected navigation.
///
/// Expired and malformed records are cleared before redirecting.
pub fn protected_access<B: SessionBackend>(store: &SessionStore<B>, now: i64) -> RouteDecision {
    match store.load() {
        StoredSession::Absent => RouteDecision::Redirect,
        StoredSession::Malformed => {
            log::info!("clearing malformed session record");
            store.clear();
            RouteDecision::Redirect
        }
        StoredSession::Present(record) if store.is_expired(&record, now) => {
            log::info!("clearing expired session record");
            store.clear();
            RouteDecision::Redirect
        }
        StoredSession::Present(_) => RouteDecision::Render,
    }
}

/// Auth-view entry check. Resolves the phase that follows `Loading`.
///
/// Locally expired or malformed records are cleared without a network call.
/// Otherwise the token goes to `validator`; a rejection or any validation
/// error clears the store.
pub async fn check_token<B, V>(store: &SessionStore<B>, validator: &V, now: i64) -> GuardPhase
where
    B: SessionBackend,
    V: TokenValidator + ?Sized,
{
    let record = match store.load() {
        StoredSession::Absent => return GuardPhase::Unauthenticated,
        StoredSession::Malformed => {
            log::info!("clearing malformed session record");
            store.clear();
            return GuardPhase::Unauthenticated;
        }
        StoredSession::Present(record) => record,
    };

    if store.is_expired(&record, now) {
        log::info!("clearing expired session record");
        store.clear();
        return GuardPhase::Unauthenticated;
    }

    match validator.validate(&record.token).await {
        Ok(true) => {
            log::info!("session token accepted");
            GuardPhase::Authenticated
        }
        Ok(false) => {
            log::info!("session token rejected; clearing session record");
            store.clear();
            GuardPhase::Unauthenticated
        }
        Err(e) => {
            log::warn!("token validation failed: {e}");
            store.clear();
            GuardPhase::Unauthenticated
        }
    }
}

/// [`check_token`] as a task the owning view can cancel.
///
/// Resolves to `None` once aborted. An aborted check is never polled again,
/// so it cannot clear the store or report a phase after teardown.
pub fn abortable_check_token<B, V>(
    store: SessionStore<B>,
    validator: V,
    now: i64,
) -> (impl Future<Output = Option<GuardPhase>>, AbortHandle)
where
    B: SessionBackend,
    V: TokenValidator,
{
    let (task, handle) = abortable(async move { check_token(&store, &validator, now).await });
    (async move { task.await.ok() }, handle)
}
