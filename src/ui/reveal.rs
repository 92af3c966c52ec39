// SPDX-License-Identifier: MPL-2.0
//! Scroll reveal animation.
//!
//! Targets are prepared with a staggered transition delay, cycling through
//! a fixed number of buckets, and revealed for good the first time they
//! become visible.

use crate::app::context::Context;
use crate::domain::geometry::RootMargin;
use crate::domain::page::ElementId;
use crate::ui::view::ViewCommand;
use crate::ui::visibility::{ObserverOptions, Subscriber};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Reveal {
    targets: HashSet<ElementId>,
    revealed: HashSet<ElementId>,
}

impl Reveal {
    /// Prepares and observes every target. Returns `None` without targets.
    pub fn init(targets: &[ElementId], ctx: &mut Context<'_>) -> Option<Self> {
        if targets.is_empty() {
            return None;
        }

        let reveal = &ctx.config.reveal;
        let options = ObserverOptions {
            threshold: reveal.visibility_threshold(),
            root_margin: RootMargin::bottom(reveal.bottom_margin()),
        };
        let buckets = reveal.stagger_buckets() as usize;
        let step = reveal.stagger_step();

        for (index, &target) in targets.iter().enumerate() {
            let delay = step * (index % buckets) as u32;
            ctx.emit(ViewCommand::RevealPrepared { target, delay });
            ctx.visibility.observe(Subscriber::Reveal, options, target);
        }

        Some(Self {
            targets: targets.iter().copied().collect(),
            revealed: HashSet::new(),
        })
    }

    pub fn on_visible(&mut self, target: ElementId, ctx: &mut Context<'_>) {
        if !self.targets.contains(&target) || !self.revealed.insert(target) {
            return;
        }
        ctx.visibility.unobserve(Subscriber::Reveal, target);
        ctx.emit(ViewCommand::Revealed { target });
    }

    #[must_use]
    pub fn is_revealed(&self, target: ElementId) -> bool {
        self.revealed.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Rect;
    use crate::test_utils::TestRuntime;
    use std::time::Duration;

    fn ids(n: u32) -> Vec<ElementId> {
        (0..n).map(ElementId::new).collect()
    }

    #[test]
    fn delays_cycle_through_four_buckets() {
        let mut rt = TestRuntime::new();
        Reveal::init(&ids(6), &mut rt.ctx(0)).unwrap();

        let delays: Vec<u64> = rt
            .view
            .iter()
            .filter_map(|command| match command {
                ViewCommand::RevealPrepared { delay, .. } => Some(delay.as_millis() as u64),
                _ => None,
            })
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 0, 100]);
    }

    #[test]
    fn target_is_revealed_once_through_the_observer() {
        let mut rt = TestRuntime::new();
        let mut reveal = Reveal::init(&ids(1), &mut rt.ctx(0)).unwrap();
        rt.take_view();
        let id = ElementId::new(0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);

        // inside the 50px bottom margin: not yet
        let low = [(id, Rect::new(0.0, 760.0, 100.0, 100.0))];
        assert!(rt.visibility.measure(viewport, &low).is_empty());

        let high = [(id, Rect::new(0.0, 600.0, 100.0, 100.0))];
        for event in rt.visibility.measure(viewport, &high) {
            reveal.on_visible(event.target, &mut rt.ctx(0));
        }
        assert!(reveal.is_revealed(id));

        reveal.on_visible(id, &mut rt.ctx(0));
        assert_eq!(rt.take_view(), vec![ViewCommand::Revealed { target: id }]);
    }

    #[test]
    fn oversized_stagger_settings_are_bounded() {
        let mut config = crate::config::Config::default();
        config.reveal.stagger_buckets = Some(u32::MAX);
        config.reveal.stagger_step_ms = Some(u64::MAX / 2);
        let mut rt = TestRuntime::with_config(config);

        Reveal::init(&ids(3000), &mut rt.ctx(0)).unwrap();
        let longest = rt
            .view
            .iter()
            .filter_map(|command| match command {
                ViewCommand::RevealPrepared { delay, .. } => Some(*delay),
                _ => None,
            })
            .max();
        assert_eq!(longest, Some(Duration::from_millis(31 * 2_000)));
    }

    #[test]
    fn no_targets_disables_feature() {
        let mut rt = TestRuntime::new();
        assert!(Reveal::init(&[], &mut rt.ctx(0)).is_none());
        assert!(rt.view.is_empty());
    }
}
