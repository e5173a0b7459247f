//! Unit tests for the debounce timer
//!
//! Tests for src/debounce.rs - only the final value fires, and cancel is
//! immediate.

use crate::common::ms;
use category_navigator::Debouncer;
use std::time::Instant;

#[test]
fn test_burst_fires_once_with_last_value() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(ms(350));
    let mut fired = Vec::new();

    for (i, value) in ["a", "ab", "abc"].into_iter().enumerate() {
        let now = t0 + ms(100 * i as u64);
        debouncer.push(value, now);
        fired.extend(debouncer.poll(now + ms(50)));
    }

    let mut now = t0 + ms(200);
    while now <= t0 + ms(2000) {
        fired.extend(debouncer.poll(now));
        now += ms(10);
    }

    assert_eq!(fired, vec!["abc"]);
}

#[test]
fn test_cancel_then_push_starts_new_window() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(ms(350));
    debouncer.push(1, t0);
    debouncer.cancel();
    debouncer.push(2, t0 + ms(500));

    assert_eq!(debouncer.poll(t0 + ms(600)), None);
    assert_eq!(debouncer.poll(t0 + ms(850)), Some(2));
}
