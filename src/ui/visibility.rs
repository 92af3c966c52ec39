// SPDX-License-Identifier: MPL-2.0
//! Visibility observation.
//!
//! Each subscriber registers targets with a threshold and a root margin.
//! The host reports layout through [`VisibilityObserver::measure`] (element
//! rectangles against the viewport) or ratios it measured itself through
//! [`VisibilityObserver::report_ratio`]. The observer emits an event only
//! when a target crosses into visibility; staying visible emits nothing.
//! Once-only semantics belong to the subscriber.

use crate::domain::geometry::{intersection_ratio, Rect, RootMargin};
use crate::domain::page::ElementId;
use std::collections::HashSet;

/// Feature owning a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscriber {
    Counters,
    Reveal,
}

/// Options of one subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Minimum intersection ratio, in `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

/// A target crossed into visibility for a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BecameVisible {
    pub subscriber: Subscriber,
    pub target: ElementId,
}

#[derive(Debug)]
struct Subscription {
    subscriber: Subscriber,
    options: ObserverOptions,
    targets: Vec<ElementId>,
    /// Targets currently at or above the threshold.
    visible: HashSet<ElementId>,
}

impl Subscription {
    /// Updates the edge state of `target`, returning `true` on a rising edge.
    fn update(&mut self, target: ElementId, is_visible: bool) -> bool {
        if is_visible {
            self.visible.insert(target)
        } else {
            self.visible.remove(&target);
            false
        }
    }
}

#[derive(Debug, Default)]
pub struct VisibilityObserver {
    subscriptions: Vec<Subscription>,
}

impl VisibilityObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `target` for `subscriber`.
    ///
    /// The options of the first call for a subscriber apply to all of its
    /// targets.
    pub fn observe(&mut self, subscriber: Subscriber, options: ObserverOptions, target: ElementId) {
        let index = match self
            .subscriptions
            .iter()
            .position(|s| s.subscriber == subscriber)
        {
            Some(index) => index,
            None => {
                self.subscriptions.push(Subscription {
                    subscriber,
                    options,
                    targets: Vec::new(),
                    visible: HashSet::new(),
                });
                self.subscriptions.len() - 1
            }
        };

        let subscription = &mut self.subscriptions[index];
        if !subscription.targets.contains(&target) {
            subscription.targets.push(target);
        }
    }

    /// Stops observing `target` for `subscriber`.
    pub fn unobserve(&mut self, subscriber: Subscriber, target: ElementId) {
        if let Some(subscription) = self
            .subscriptions
            .iter_mut()
            .find(|s| s.subscriber == subscriber)
        {
            subscription.targets.retain(|t| *t != target);
            subscription.visible.remove(&target);
        }
    }

    /// Returns whether any subscriber observes `target`.
    #[must_use]
    pub fn is_observed(&self, subscriber: Subscriber, target: ElementId) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.subscriber == subscriber && s.targets.contains(&target))
    }

    /// Measures element rectangles against the viewport.
    ///
    /// Targets missing from `elements` keep their previous state.
    pub fn measure(&mut self, viewport: Rect, elements: &[(ElementId, Rect)]) -> Vec<BecameVisible> {
        let mut events = Vec::new();
        for subscription in &mut self.subscriptions {
            let root = viewport.expand(subscription.options.root_margin);
            let threshold = subscription.options.threshold;

            for (target, rect) in elements {
                if !subscription.targets.contains(target) {
                    continue;
                }
                let is_visible = rect.intersection(&root).is_some()
                    && intersection_ratio(rect, &root) >= threshold;
                if subscription.update(*target, is_visible) {
                    events.push(BecameVisible {
                        subscriber: subscription.subscriber,
                        target: *target,
                    });
                }
            }
        }
        events
    }

    /// Applies a ratio measured by the host. Root margins are the host's
    /// responsibility on this path.
    pub fn report_ratio(&mut self, target: ElementId, ratio: f64) -> Vec<BecameVisible> {
        let mut events = Vec::new();
        for subscription in &mut self.subscriptions {
            if !subscription.targets.contains(&target) {
                continue;
            }
            let is_visible = ratio > 0.0 && ratio >= subscription.options.threshold;
            if subscription.update(target, is_visible) {
                events.push(BecameVisible {
                    subscriber: subscription.subscriber,
                    target,
                });
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    fn options(threshold: f64, bottom: f64) -> ObserverOptions {
        ObserverOptions {
            threshold,
            root_margin: RootMargin::bottom(bottom),
        }
    }

    #[test]
    fn emits_only_on_rising_edge() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Counters, options(0.5, 0.0), id);

        let inside = [(id, Rect::new(0.0, 100.0, 100.0, 100.0))];
        assert_eq!(observer.measure(VIEWPORT, &inside).len(), 1);
        assert!(observer.measure(VIEWPORT, &inside).is_empty());

        let outside = [(id, Rect::new(0.0, 2000.0, 100.0, 100.0))];
        assert!(observer.measure(VIEWPORT, &outside).is_empty());
        assert_eq!(observer.measure(VIEWPORT, &inside).len(), 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Counters, options(0.5, 0.0), id);

        let just_under = [(id, Rect::new(0.0, 751.0, 100.0, 100.0))];
        assert!(observer.measure(VIEWPORT, &just_under).is_empty());

        let half = [(id, Rect::new(0.0, 750.0, 100.0, 100.0))];
        assert_eq!(
            observer.measure(VIEWPORT, &half),
            vec![BecameVisible {
                subscriber: Subscriber::Counters,
                target: id,
            }]
        );
    }

    #[test]
    fn root_margin_shrinks_observed_area() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Reveal, options(0.1, -50.0), id);

        // 40px inside the viewport, but entirely inside the excluded margin
        let near_bottom = [(id, Rect::new(0.0, 760.0, 100.0, 100.0))];
        assert!(observer.measure(VIEWPORT, &near_bottom).is_empty());

        let higher = [(id, Rect::new(0.0, 700.0, 100.0, 100.0))];
        assert_eq!(observer.measure(VIEWPORT, &higher).len(), 1);
    }

    #[test]
    fn subscribers_are_independent() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Counters, options(0.5, 0.0), id);
        observer.observe(Subscriber::Reveal, options(0.1, 0.0), id);

        let events = observer.report_ratio(id, 0.2);
        assert_eq!(
            events,
            vec![BecameVisible {
                subscriber: Subscriber::Reveal,
                target: id,
            }]
        );
    }

    #[test]
    fn unobserved_targets_emit_nothing() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Counters, options(0.5, 0.0), id);
        observer.unobserve(Subscriber::Counters, id);

        assert!(!observer.is_observed(Subscriber::Counters, id));
        assert!(observer.report_ratio(id, 1.0).is_empty());
    }

    #[test]
    fn zero_ratio_is_never_visible() {
        let mut observer = VisibilityObserver::new();
        let id = ElementId::new(1);
        observer.observe(Subscriber::Reveal, options(0.0, 0.0), id);
        assert!(observer.report_ratio(id, 0.0).is_empty());
        assert_eq!(observer.report_ratio(id, 0.01).len(), 1);
    }
}
