#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_millis_is_after_2024() {
    // 2024-01-01T00:00:00Z
    assert!(now_millis() > 1_704_067_200_000);
}

#[test]
fn now_millis_is_monotonic_enough_for_expiry_math() {
    let a = now_millis();
    let b = now_millis();
    assert!(b >= a);
}
