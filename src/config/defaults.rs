// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the site features. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scroll**: Scroll-to-top threshold and scroll throttling
//! - **Counters**: Statistic counter animation timing
//! - **Reveal**: Scroll reveal visibility and stagger
//! - **Toasts**: Notification display timing
//! - **Filter**: Event search debounce

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Vertical offset (px) past which the scroll-to-top control is shown.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 300.0;

/// Minimum scroll-to-top threshold.
pub const MIN_SCROLL_THRESHOLD_PX: f64 = 0.0;

/// Maximum scroll-to-top threshold.
pub const MAX_SCROLL_THRESHOLD_PX: f64 = 10_000.0;

/// Default throttle window for scroll handling (0 disables throttling).
pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = 100;

/// Maximum scroll throttle window.
pub const MAX_SCROLL_THROTTLE_MS: u64 = 1_000;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Total duration of a counter animation.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;

/// Interval between counter animation frames.
pub const DEFAULT_COUNTER_TICK_MS: u64 = 16;

/// Minimum counter tick interval.
pub const MIN_COUNTER_TICK_MS: u64 = 1;

/// Maximum counter animation duration.
pub const MAX_COUNTER_DURATION_MS: u64 = 60_000;

/// Intersection ratio at which a counter starts animating.
pub const DEFAULT_COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Intersection ratio at which an element is revealed.
pub const DEFAULT_REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Bottom root margin for reveal observation (negative shrinks the viewport).
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = -50.0;

/// Number of stagger buckets the reveal delay cycles through.
pub const DEFAULT_REVEAL_STAGGER_BUCKETS: u32 = 4;

/// Maximum number of stagger buckets.
pub const MAX_REVEAL_STAGGER_BUCKETS: u32 = 32;

/// Delay added per stagger bucket.
pub const DEFAULT_REVEAL_STAGGER_STEP_MS: u64 = 100;

/// Maximum delay per stagger bucket.
pub const MAX_REVEAL_STAGGER_STEP_MS: u64 = 2_000;

/// Largest bottom margin magnitude accepted for reveal observation.
pub const MAX_REVEAL_BOTTOM_MARGIN_PX: f64 = 10_000.0;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Delay between inserting a toast and marking it visible.
pub const DEFAULT_TOAST_SHOW_DELAY_MS: u64 = 10;

/// Time a toast stays before dismissing itself.
pub const DEFAULT_TOAST_AUTO_DISMISS_MS: u64 = 4_000;

/// Duration of the hide transition before the toast is detached.
pub const DEFAULT_TOAST_HIDE_TRANSITION_MS: u64 = 300;

/// Maximum toast auto-dismiss duration.
pub const MAX_TOAST_AUTO_DISMISS_MS: u64 = 60_000;

/// Maximum delay before a toast becomes visible.
pub const MAX_TOAST_SHOW_DELAY_MS: u64 = 1_000;

/// Maximum hide transition duration.
pub const MAX_TOAST_HIDE_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Debounce window for the event search box (0 filters on every keystroke).
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 0;

/// Maximum search debounce window.
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCROLL_THRESHOLD_PX >= MIN_SCROLL_THRESHOLD_PX);
    assert!(DEFAULT_SCROLL_THRESHOLD_PX <= MAX_SCROLL_THRESHOLD_PX);
    assert!(DEFAULT_SCROLL_THROTTLE_MS <= MAX_SCROLL_THROTTLE_MS);

    assert!(DEFAULT_COUNTER_TICK_MS >= MIN_COUNTER_TICK_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS >= DEFAULT_COUNTER_TICK_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS <= MAX_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_VISIBILITY_THRESHOLD >= 0.0);
    assert!(DEFAULT_COUNTER_VISIBILITY_THRESHOLD <= 1.0);

    assert!(DEFAULT_REVEAL_VISIBILITY_THRESHOLD >= 0.0);
    assert!(DEFAULT_REVEAL_VISIBILITY_THRESHOLD <= 1.0);
    assert!(DEFAULT_REVEAL_STAGGER_BUCKETS > 0);
    assert!(DEFAULT_REVEAL_STAGGER_BUCKETS <= MAX_REVEAL_STAGGER_BUCKETS);
    assert!(DEFAULT_REVEAL_STAGGER_STEP_MS <= MAX_REVEAL_STAGGER_STEP_MS);
    assert!(DEFAULT_REVEAL_BOTTOM_MARGIN_PX >= -MAX_REVEAL_BOTTOM_MARGIN_PX);
    assert!(DEFAULT_REVEAL_BOTTOM_MARGIN_PX <= MAX_REVEAL_BOTTOM_MARGIN_PX);
    // the longest stagger delay must fit a u32 millisecond count
    assert!((MAX_REVEAL_STAGGER_BUCKETS as u64 - 1) * MAX_REVEAL_STAGGER_STEP_MS <= u32::MAX as u64);

    assert!(DEFAULT_TOAST_AUTO_DISMISS_MS > DEFAULT_TOAST_SHOW_DELAY_MS);
    assert!(DEFAULT_TOAST_AUTO_DISMISS_MS <= MAX_TOAST_AUTO_DISMISS_MS);
    assert!(DEFAULT_TOAST_SHOW_DELAY_MS <= MAX_TOAST_SHOW_DELAY_MS);
    assert!(DEFAULT_TOAST_HIDE_TRANSITION_MS <= MAX_TOAST_HIDE_TRANSITION_MS);

    assert!(DEFAULT_SEARCH_DEBOUNCE_MS <= MAX_SEARCH_DEBOUNCE_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_defaults_are_valid() {
        assert_eq!(DEFAULT_SCROLL_THRESHOLD_PX, 300.0);
        assert!(DEFAULT_SCROLL_THROTTLE_MS <= MAX_SCROLL_THROTTLE_MS);
    }

    #[test]
    fn counter_defaults_give_125_frames() {
        assert_eq!(DEFAULT_COUNTER_DURATION_MS / DEFAULT_COUNTER_TICK_MS, 125);
    }

    #[test]
    fn toast_defaults_match_transition_timing() {
        assert_eq!(DEFAULT_TOAST_AUTO_DISMISS_MS, 4_000);
        assert_eq!(DEFAULT_TOAST_HIDE_TRANSITION_MS, 300);
        assert_eq!(DEFAULT_TOAST_SHOW_DELAY_MS, 10);
    }

    #[test]
    fn reveal_defaults_are_valid() {
        assert_eq!(DEFAULT_REVEAL_STAGGER_BUCKETS, 4);
        assert!(DEFAULT_REVEAL_BOTTOM_MARGIN_PX < 0.0);
    }
}
