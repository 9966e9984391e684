//! Activation race guard
//!
//! Every attempt to activate a different tab takes a ticket from the group's
//! transition counter. When a guard is configured the commit waits for it, and
//! on resolution happens only if the ticket is still the newest one:
//!
//! ```text
//! attempt x  -> ticket 1 -> guard(x) ........... true  -> counter is 2, stale
//! attempt y  -> ticket 2 -> guard(y) .. true -> counter is 2, commit y
//! ```

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

use tabstrip_group::{GuardError, GuardFuture, TabGroup, TabId, TransitionGuard};

use crate::kind::TabKind;
use crate::unit::TabUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Disabled,
    /// The candidate already is the active tab
    AlreadyActive,
    /// Add and overflow controls never become active
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Committed,
    /// The guard said no, failed, or panicked
    Vetoed,
    /// A newer attempt was issued while the guard was pending
    Stale,
}

/// Result of an activation attempt, returned before any guard resolves.
#[must_use = "a pending activation only commits once it is awaited or spawned"]
pub enum Activation {
    Ignored(IgnoreReason),
    /// No guard was configured and the tab is now active
    Committed,
    Pending(PendingTransition),
}

impl Activation {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Activation::Ignored(_))
    }

    pub fn into_pending(self) -> Option<PendingTransition> {
        match self {
            Activation::Pending(pending) => Some(pending),
            Activation::Ignored(_) | Activation::Committed => None,
        }
    }

    /// Drive the attempt to its end. `None` when it was ignored.
    pub async fn settle(self) -> Option<TransitionOutcome> {
        match self {
            Activation::Ignored(_) => None,
            Activation::Committed => Some(TransitionOutcome::Committed),
            Activation::Pending(pending) => Some(pending.await),
        }
    }

    /// Hand a pending attempt to the tokio runtime so it resolves without
    /// the caller polling it.
    ///
    /// # Panics
    ///
    /// Panics when a guard is pending and no tokio runtime is running, like
    /// [`tokio::spawn`].
    pub fn schedule(self) -> ScheduledActivation {
        match self {
            Activation::Ignored(reason) => ScheduledActivation::Ignored(reason),
            Activation::Committed => ScheduledActivation::Committed,
            Activation::Pending(pending) => ScheduledActivation::Pending(pending.spawn()),
        }
    }
}

/// An attempt whose guard, if any, is already resolving on the runtime.
///
/// Dropping it does not cancel the attempt.
#[derive(Debug)]
pub enum ScheduledActivation {
    Ignored(IgnoreReason),
    Committed,
    /// Awaiting the handle only observes the outcome
    Pending(JoinHandle<TransitionOutcome>),
}

impl ScheduledActivation {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ScheduledActivation::Ignored(_))
    }
}

impl std::fmt::Debug for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activation::Ignored(reason) => f.debug_tuple("Ignored").field(reason).finish(),
            Activation::Committed => f.write_str("Committed"),
            Activation::Pending(pending) => f.debug_tuple("Pending").field(pending).finish(),
        }
    }
}

/// An attempt waiting on its transition guard.
///
/// Resolves to the attempt's outcome. Nothing is committed unless this is
/// polled, either by awaiting it or by [`PendingTransition::spawn`].
#[must_use = "a pending activation only commits once it is awaited or spawned"]
pub struct PendingTransition {
    candidate: TabId,
    ticket: u64,
    inner: BoxFuture<'static, TransitionOutcome>,
}

impl PendingTransition {
    pub fn candidate(&self) -> &TabId {
        &self.candidate
    }

    /// The counter value this attempt has to still match to commit
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Resolve on the current tokio runtime
    pub fn spawn(self) -> JoinHandle<TransitionOutcome> {
        tokio::spawn(self)
    }
}

impl Future for PendingTransition {
    type Output = TransitionOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl std::fmt::Debug for PendingTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransition")
            .field("candidate", &self.candidate)
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

impl TabUnit {
    /// Try to make this unit's tab the active one.
    ///
    /// Returns immediately. With a guard configured the active tab is left
    /// untouched until the returned [`PendingTransition`] resolves.
    pub fn attempt_activate(&self) -> Activation {
        if self.disabled {
            return Activation::Ignored(IgnoreReason::Disabled);
        }

        let candidate = match &self.kind {
            TabKind::Content(id) => id.clone(),
            TabKind::AddControl | TabKind::OverflowControl => {
                return Activation::Ignored(IgnoreReason::Virtual);
            }
        };

        let begun = self.group.with_transitions(|tx| {
            if tx.active() == Some(&candidate) {
                return None;
            }

            let ticket = tx.advance();
            match tx.guard() {
                None => {
                    tx.commit(candidate.clone());
                    Some(None)
                }
                Some(guard) => Some(Some((ticket, guard, tx.active().cloned()))),
            }
        });

        match begun {
            None => Activation::Ignored(IgnoreReason::AlreadyActive),
            Some(None) => Activation::Committed,
            Some(Some((ticket, guard, current))) => {
                let verdict = consult(guard, &candidate, current.as_ref());
                Activation::Pending(PendingTransition {
                    inner: resolve(self.group.clone(), candidate.clone(), ticket, verdict).boxed(),
                    candidate,
                    ticket,
                })
            }
        }
    }
}

/// Call the guard, turning a panic during the call into a failed verdict
fn consult(
    guard: Arc<dyn TransitionGuard>,
    candidate: &TabId,
    current: Option<&TabId>,
) -> GuardFuture {
    match std::panic::catch_unwind(AssertUnwindSafe(|| guard.check(candidate, current))) {
        Ok(verdict) => verdict,
        Err(_) => future::ready(Err(GuardError::Panicked)).boxed(),
    }
}

async fn resolve(
    group: TabGroup,
    candidate: TabId,
    ticket: u64,
    verdict: GuardFuture,
) -> TransitionOutcome {
    let allowed = match AssertUnwindSafe(verdict).catch_unwind().await {
        Ok(Ok(allowed)) => allowed,
        Ok(Err(err)) => {
            tracing::debug!(tab_id = %candidate, error = %err, "Transition guard failed");
            false
        }
        Err(_) => {
            tracing::debug!(tab_id = %candidate, "Transition guard panicked");
            false
        }
    };

    if !allowed {
        return TransitionOutcome::Vetoed;
    }

    group.with_transitions(|tx| {
        if tx.counter() != ticket {
            return TransitionOutcome::Stale;
        }
        tx.commit(candidate);
        TransitionOutcome::Committed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tabstrip_group::{GroupConfig, GroupEvent, GroupEvents};

    fn group_at(active: &str) -> (TabGroup, GroupEvents) {
        TabGroup::new(GroupConfig {
            value: Some(TabId::from(active)),
            ..GroupConfig::default()
        })
    }

    fn counting_guard(group: &TabGroup) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        group.set_guard(move |_candidate: TabId, _current: Option<TabId>| {
            seen.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, GuardError>(true) }
        });
        calls
    }

    fn delayed_guard(group: &TabGroup, delays: &'static [(&'static str, u64)]) {
        group.set_guard(move |candidate: TabId, _current: Option<TabId>| async move {
            let delay = delays
                .iter()
                .find(|(name, _)| TabId::from(*name) == candidate)
                .map(|(_, ms)| *ms)
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok::<_, GuardError>(true)
        });
    }

    #[test]
    fn test_unguarded_activation_commits() {
        let (group, mut events) = group_at("a");
        let b = TabUnit::content(group.clone(), "b");

        assert!(matches!(b.attempt_activate(), Activation::Committed));
        assert_eq!(group.active(), Some(TabId::from("b")));
        assert_eq!(group.transition_counter(), 1);
        assert_eq!(
            events.drain(),
            vec![GroupEvent::Activated {
                id: TabId::from("b"),
                previous: Some(TabId::from("a")),
            }]
        );

        // Same tab again: no ticket, no change
        assert!(matches!(
            b.attempt_activate(),
            Activation::Ignored(IgnoreReason::AlreadyActive)
        ));
        assert_eq!(group.transition_counter(), 1);
    }

    #[test]
    fn test_counter_grows_by_one_per_attempt() {
        let (group, _events) = group_at("a");
        let names = ["b", "c", "d", "e", "f"];

        for name in names {
            let _ = TabUnit::content(group.clone(), name).attempt_activate();
        }

        assert_eq!(group.transition_counter(), names.len() as u64);
        assert_eq!(group.active(), Some(TabId::from("f")));
    }

    #[test]
    fn test_disabled_unit_does_nothing() {
        let (group, _events) = group_at("a");
        let calls = counting_guard(&group);
        let b = TabUnit::content(group.clone(), "b").with_disabled(true);

        assert!(matches!(
            b.attempt_activate(),
            Activation::Ignored(IgnoreReason::Disabled)
        ));
        assert_eq!(group.transition_counter(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_virtual_units_never_take_a_ticket() {
        let (group, _events) = group_at("a");
        for unit in [
            TabUnit::add_control(group.clone()),
            TabUnit::overflow_control(group.clone()),
        ] {
            assert!(matches!(
                unit.attempt_activate(),
                Activation::Ignored(IgnoreReason::Virtual)
            ));
        }
        assert_eq!(group.transition_counter(), 0);
    }

    #[tokio::test]
    async fn test_reactivation_never_reaches_guard() {
        let (group, _events) = group_at("a");
        let calls = counting_guard(&group);
        let a = TabUnit::content(group.clone(), "a");

        assert!(a.attempt_activate().settle().await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(group.transition_counter(), 0);
    }

    #[tokio::test]
    async fn test_guard_sees_candidate_and_current() {
        let (group, _events) = group_at("a");
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let record = Arc::clone(&seen);
        group.set_guard(move |candidate: TabId, current: Option<TabId>| {
            record.lock().push((candidate, current));
            async { Ok::<_, GuardError>(true) }
        });

        let activation = TabUnit::content(group.clone(), "b").attempt_activate();

        // The guard runs at attempt time, the commit waits for resolution
        assert_eq!(
            seen.lock().as_slice(),
            &[(TabId::from("b"), Some(TabId::from("a")))]
        );
        assert_eq!(group.active(), Some(TabId::from("a")));

        assert_eq!(activation.settle().await, Some(TransitionOutcome::Committed));
        assert_eq!(group.active(), Some(TabId::from("b")));
    }

    #[tokio::test]
    async fn test_guard_veto_by_candidate() {
        let (group, _events) = group_at("a");
        group.set_guard(|candidate: TabId, _current: Option<TabId>| async move {
            Ok::<_, GuardError>(candidate != TabId::from("locked"))
        });

        let locked = TabUnit::content(group.clone(), "locked");
        let free = TabUnit::content(group.clone(), "free");

        assert_eq!(
            locked.attempt_activate().settle().await,
            Some(TransitionOutcome::Vetoed)
        );
        assert_eq!(group.active(), Some(TabId::from("a")));

        assert_eq!(
            free.attempt_activate().settle().await,
            Some(TransitionOutcome::Committed)
        );
        assert_eq!(group.active(), Some(TabId::from("free")));
    }

    #[tokio::test]
    async fn test_guard_error_is_a_veto() {
        let (group, _events) = group_at("a");
        group.set_guard(|_candidate: TabId, _current: Option<TabId>| async {
            Err::<bool, _>(GuardError::Rejected("unsaved changes".to_string()))
        });

        let outcome = TabUnit::content(group.clone(), "b")
            .attempt_activate()
            .settle()
            .await;

        assert_eq!(outcome, Some(TransitionOutcome::Vetoed));
        assert_eq!(group.active(), Some(TabId::from("a")));
    }

    #[tokio::test]
    async fn test_guard_panicking_on_call_is_a_veto() {
        let (group, _events) = group_at("a");
        group.set_guard(
            |_candidate: TabId,
             _current: Option<TabId>|
             -> std::future::Ready<Result<bool, GuardError>> {
                panic!("guard exploded")
            },
        );

        let activation = TabUnit::content(group.clone(), "b").attempt_activate();
        assert_eq!(activation.settle().await, Some(TransitionOutcome::Vetoed));
        assert_eq!(group.active(), Some(TabId::from("a")));
        assert_eq!(group.transition_counter(), 1);
    }

    #[tokio::test]
    async fn test_guard_panicking_while_pending_is_a_veto() {
        let (group, _events) = group_at("a");
        group.set_guard(|candidate: TabId, _current: Option<TabId>| async move {
            if candidate == TabId::from("b") {
                panic!("guard exploded mid-flight");
            }
            Ok::<_, GuardError>(true)
        });

        let outcome = TabUnit::content(group.clone(), "b")
            .attempt_activate()
            .settle()
            .await;
        assert_eq!(outcome, Some(TransitionOutcome::Vetoed));

        // The group keeps working afterwards
        let outcome = TabUnit::content(group.clone(), "c")
            .attempt_activate()
            .settle()
            .await;
        assert_eq!(outcome, Some(TransitionOutcome::Committed));
        assert_eq!(group.active(), Some(TabId::from("c")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_older_attempt_cannot_override_newer() {
        let (group, _events) = group_at("a");
        delayed_guard(&group, &[("x", 100), ("y", 10)]);

        let x = TabUnit::content(group.clone(), "x")
            .attempt_activate()
            .into_pending()
            .unwrap();
        assert_eq!(group.transition_counter(), 1);
        let y = TabUnit::content(group.clone(), "y")
            .attempt_activate()
            .into_pending()
            .unwrap();
        assert_eq!(group.transition_counter(), 2);
        assert_eq!((x.ticket(), y.ticket()), (1, 2));

        let x = x.spawn();
        let y = y.spawn();

        assert_eq!(y.await.unwrap(), TransitionOutcome::Committed);
        assert_eq!(group.active(), Some(TabId::from("y")));

        assert_eq!(x.await.unwrap(), TransitionOutcome::Stale);
        assert_eq!(group.active(), Some(TabId::from("y")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_older_attempt_is_still_stale() {
        let (group, _events) = group_at("a");
        delayed_guard(&group, &[("x", 10), ("y", 100)]);

        let x = TabUnit::content(group.clone(), "x").attempt_activate();
        let y = TabUnit::content(group.clone(), "y").attempt_activate();

        let x = x.into_pending().unwrap().spawn();
        let y = y.into_pending().unwrap().spawn();

        assert_eq!(x.await.unwrap(), TransitionOutcome::Stale);
        // x approved first but y is newer, so nothing changed yet
        assert_eq!(group.active(), Some(TabId::from("a")));

        assert_eq!(y.await.unwrap(), TransitionOutcome::Committed);
        assert_eq!(group.active(), Some(TabId::from("y")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_veto_leaves_older_stale() {
        let (group, _events) = group_at("a");
        group.set_guard(|candidate: TabId, _current: Option<TabId>| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<_, GuardError>(candidate != TabId::from("locked"))
        });

        let x = TabUnit::content(group.clone(), "x").attempt_activate();
        let locked = TabUnit::content(group.clone(), "locked").attempt_activate();

        let (x, locked) = tokio::join!(x.settle(), locked.settle());

        assert_eq!(x, Some(TransitionOutcome::Stale));
        assert_eq!(locked, Some(TransitionOutcome::Vetoed));
        assert_eq!(group.active(), Some(TabId::from("a")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unguarded_commit_supersedes_pending_guard() {
        let (group, _events) = group_at("a");
        delayed_guard(&group, &[("x", 50)]);

        let x = TabUnit::content(group.clone(), "x")
            .attempt_activate()
            .into_pending()
            .unwrap()
            .spawn();

        group.clear_guard();
        assert!(matches!(
            TabUnit::content(group.clone(), "z").attempt_activate(),
            Activation::Committed
        ));

        assert_eq!(x.await.unwrap(), TransitionOutcome::Stale);
        assert_eq!(group.active(), Some(TabId::from("z")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_owner_select_supersedes_pending_guard() {
        let (group, _events) = group_at("a");
        delayed_guard(&group, &[("x", 50)]);

        let x = TabUnit::content(group.clone(), "x")
            .attempt_activate()
            .into_pending()
            .unwrap()
            .spawn();
        group.select(TabId::from("home"));

        assert_eq!(x.await.unwrap(), TransitionOutcome::Stale);
        assert_eq!(group.active(), Some(TabId::from("home")));
    }
}
