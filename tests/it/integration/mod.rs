//! Integration tests for scroll-sync.
//!
//! These drive a `ScrollSync` through complete gestures against a recording
//! host and check both the committed values and the listener bookkeeping.

mod touch_tests;
