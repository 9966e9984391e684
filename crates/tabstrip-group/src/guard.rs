//! Transition guard
//!
//! A caller-supplied asynchronous veto consulted before a tab becomes active.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;

use crate::error::GuardError;
use crate::id::TabId;

pub type GuardFuture = BoxFuture<'static, Result<bool, GuardError>>;

/// Decides whether the active tab may change from `current` to `candidate`.
///
/// `Ok(true)` allows the change. `Ok(false)`, any `Err` and a panic are vetoes.
pub trait TransitionGuard: Send + Sync {
    fn check(&self, candidate: &TabId, current: Option<&TabId>) -> GuardFuture;
}

impl<F, Fut> TransitionGuard for F
where
    F: Fn(TabId, Option<TabId>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, GuardError>> + Send + 'static,
{
    fn check(&self, candidate: &TabId, current: Option<&TabId>) -> GuardFuture {
        self(candidate.clone(), current.cloned()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closure_guard() {
        let guard = |candidate: TabId, _current: Option<TabId>| async move {
            Ok::<_, GuardError>(candidate != TabId::from("locked"))
        };

        let current = TabId::from("a");
        assert!(guard.check(&TabId::from("free"), Some(&current)).await.unwrap());
        assert!(!guard.check(&TabId::from("locked"), Some(&current)).await.unwrap());
    }
}
