use super::*;

// =============================================================
// InitLatch
// =============================================================

#[test]
fn latch_starts_unset() {
    assert!(!InitLatch::default().is_set());
}

#[test]
fn latch_reports_only_the_first_set() {
    let latch = InitLatch::default();
    assert!(latch.set());
    assert!(latch.is_set());
    assert!(!latch.set());
    assert!(latch.is_set());
}
