// Host-side tests for scoped handle release.

use lovefx::fx::{EffectScope, Release};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

struct Recorded {
    name: &'static str,
    log: Log,
}

impl Release for Recorded {
    fn release(self) {
        self.log.borrow_mut().push(self.name);
    }
}

fn handle(name: &'static str, log: &Log) -> Recorded {
    Recorded {
        name,
        log: Rc::clone(log),
    }
}

#[test]
fn release_by_key_happens_once() {
    let log = Log::default();
    let mut scope = EffectScope::new();
    let k = scope.acquire(handle("timer", &log));
    assert!(scope.contains(k));

    assert!(scope.release(k));
    assert!(!scope.release(k));
    assert!(!scope.contains(k));
    assert_eq!(*log.borrow(), vec!["timer"]);
}

#[test]
fn release_all_then_drop_does_not_double_release() {
    let log = Log::default();
    {
        let mut scope = EffectScope::new();
        scope.acquire(handle("a", &log));
        scope.acquire(handle("b", &log));
        scope.acquire(handle("c", &log));
        assert_eq!(scope.len(), 3);
        assert_eq!(scope.release_all(), 3);
        assert!(scope.is_empty());
        assert_eq!(scope.release_all(), 0);
    }
    let mut released = log.borrow().clone();
    released.sort_unstable();
    assert_eq!(released, vec!["a", "b", "c"]);
}

#[test]
fn drop_releases_live_handles() {
    let log = Log::default();
    {
        let mut scope = EffectScope::new();
        scope.acquire(handle("listener", &log));
        scope.acquire(handle("interval", &log));
    }
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn replace_releases_previous_handle() {
    let log = Log::default();
    let mut scope = EffectScope::new();
    let k = scope.replace(None, handle("first", &log));
    assert!(log.borrow().is_empty());

    let k2 = scope.replace(Some(k), handle("second", &log));
    assert_eq!(k, k2);
    assert_eq!(scope.len(), 1);
    assert_eq!(*log.borrow(), vec!["first"]);

    scope.release(k);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn forget_skips_release() {
    let log = Log::default();
    let mut scope = EffectScope::new();
    let k = scope.acquire(handle("fired", &log));
    let h = scope.forget(k);
    assert!(h.is_some());
    assert!(scope.is_empty());
    drop(scope);
    assert!(log.borrow().is_empty());
    // Caller owns it now.
    drop(h);
    assert!(log.borrow().is_empty());
}

#[test]
fn keys_are_unique_across_reuse() {
    let log = Log::default();
    let mut scope = EffectScope::new();
    let a = scope.acquire(handle("a", &log));
    scope.release(a);
    let b = scope.acquire(handle("b", &log));
    assert_ne!(a, b);
    assert!(!scope.release(a));
    assert!(scope.contains(b));
}

#[test]
fn closed_scope_releases_late_handles_immediately() {
    let log = Log::default();
    let mut scope = EffectScope::new();
    let k = scope.acquire(handle("poll", &log));
    assert_eq!(scope.close(), 1);
    assert!(scope.is_closed());
    assert_eq!(*log.borrow(), vec!["poll"]);

    // Work scheduled after teardown never stays live.
    let late = scope.acquire(handle("late-timer", &log));
    assert!(!scope.contains(late));
    let replaced = scope.replace(Some(k), handle("late-override", &log));
    assert!(!scope.contains(replaced));
    scope.replace(None, handle("late-fresh", &log));
    assert!(scope.is_empty());
    assert_eq!(
        *log.borrow(),
        vec!["poll", "late-timer", "late-override", "late-fresh"]
    );

    drop(scope);
    assert_eq!(log.borrow().len(), 4);
}
