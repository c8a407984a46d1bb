use super::*;

#[test]
fn new_guard_is_live() {
    assert!(MountGuard::new().is_live());
}

#[test]
fn cancel_reaches_all_clones() {
    let guard = MountGuard::new();
    let task_copy = guard.clone();
    guard.cancel();
    assert!(!task_copy.is_live());
}

#[test]
fn cancellation_is_sticky() {
    let guard = MountGuard::new();
    guard.cancel();
    guard.cancel();
    assert!(!guard.is_live());
}

#[test]
fn clones_share_one_flag() {
    let guard = MountGuard::new();
    let a = guard.clone();
    let b = a.clone();
    b.cancel();
    assert!(!guard.is_live());
    assert!(!a.is_live());
}
