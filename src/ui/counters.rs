// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters.
//!
//! Each counter counts up from zero the first time it becomes visible and
//! never again. Frames are driven by the runtime timers at the configured
//! tick.

use crate::app::context::Context;
use crate::app::timers::TimerEvent;
use crate::domain::counter::{CountUp, CounterTarget};
use crate::domain::geometry::RootMargin;
use crate::domain::page::{ElementId, TextAnchor};
use crate::ui::view::ViewCommand;
use crate::ui::visibility::{ObserverOptions, Subscriber};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Counters {
    texts: HashMap<ElementId, String>,
    running: HashMap<ElementId, CountUp>,
    /// Counters that have been triggered, whether or not they animated.
    processed: HashSet<ElementId>,
    duration: Duration,
    tick: Duration,
}

impl Counters {
    /// Observes every counter. Returns `None` when the page has none.
    pub fn init(stat_numbers: &[TextAnchor], ctx: &mut Context<'_>) -> Option<Self> {
        if stat_numbers.is_empty() {
            return None;
        }

        let options = ObserverOptions {
            threshold: ctx.config.counters.visibility_threshold(),
            root_margin: RootMargin::ZERO,
        };
        let mut texts = HashMap::with_capacity(stat_numbers.len());
        for anchor in stat_numbers {
            texts.insert(anchor.id, anchor.text.clone());
            ctx.visibility.observe(Subscriber::Counters, options, anchor.id);
        }

        Some(Self {
            texts,
            running: HashMap::new(),
            processed: HashSet::new(),
            duration: ctx.config.counters.duration(),
            tick: ctx.config.counters.tick(),
        })
    }

    /// Starts the animation of a counter that became visible.
    pub fn on_visible(&mut self, target: ElementId, ctx: &mut Context<'_>) {
        let Some(text) = self.texts.get(&target) else {
            return;
        };
        if !self.processed.insert(target) {
            return;
        }
        ctx.visibility.unobserve(Subscriber::Counters, target);

        let Some(parsed) = CounterTarget::parse(text) else {
            tracing::debug!(?target, text = %text, "counter text has no usable number");
            return;
        };
        self.running
            .insert(target, CountUp::new(parsed, self.duration, self.tick));
        ctx.schedule_after(self.tick, TimerEvent::CounterFrame(target));
    }

    /// Advances one frame of a running counter.
    pub fn handle_timer(&mut self, target: ElementId, ctx: &mut Context<'_>) {
        let Some(count_up) = self.running.get_mut(&target) else {
            return;
        };

        let frame = count_up.step();
        ctx.emit(ViewCommand::CounterText {
            target,
            text: frame.text,
        });
        if frame.done {
            self.running.remove(&target);
        } else {
            ctx.schedule_after(self.tick, TimerEvent::CounterFrame(target));
        }
    }

    #[must_use]
    pub fn is_processed(&self, target: ElementId) -> bool {
        self.processed.contains(&target)
    }

    #[must_use]
    pub fn is_running(&self, target: ElementId) -> bool {
        self.running.contains_key(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRuntime;

    fn anchors(texts: &[&str]) -> Vec<TextAnchor> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| TextAnchor {
                id: ElementId::new(i as u32),
                text: (*text).to_string(),
            })
            .collect()
    }

    fn run(rt: &mut TestRuntime, counters: &mut Counters, ms: u64) {
        while let Some((deadline, event)) = rt.next_due(ms) {
            if let TimerEvent::CounterFrame(target) = event {
                counters.handle_timer(target, &mut rt.ctx_at(deadline));
            }
        }
    }

    fn last_text(rt: &TestRuntime, target: ElementId) -> Option<String> {
        rt.view.iter().rev().find_map(|command| match command {
            ViewCommand::CounterText { target: t, text } if *t == target => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn no_counters_disables_feature() {
        let mut rt = TestRuntime::new();
        assert!(Counters::init(&[], &mut rt.ctx(0)).is_none());
    }

    #[test]
    fn counter_reaches_exact_target_after_duration() {
        let mut rt = TestRuntime::new();
        let mut counters = Counters::init(&anchors(&["250+"]), &mut rt.ctx(0)).unwrap();
        let id = ElementId::new(0);

        counters.on_visible(id, &mut rt.ctx(0));
        run(&mut rt, &mut counters, 1000);
        assert!(counters.is_running(id));

        run(&mut rt, &mut counters, 2100);
        assert!(!counters.is_running(id));
        assert_eq!(last_text(&rt, id).as_deref(), Some("250+"));
    }

    #[test]
    fn separator_quirk_is_preserved() {
        let mut rt = TestRuntime::new();
        let mut counters = Counters::init(&anchors(&["1,000"]), &mut rt.ctx(0)).unwrap();
        let id = ElementId::new(0);

        counters.on_visible(id, &mut rt.ctx(0));
        run(&mut rt, &mut counters, 5000);
        assert_eq!(last_text(&rt, id).as_deref(), Some("1000,"));
    }

    #[test]
    fn counter_animates_at_most_once() {
        let mut rt = TestRuntime::new();
        let mut counters = Counters::init(&anchors(&["10"]), &mut rt.ctx(0)).unwrap();
        let id = ElementId::new(0);

        counters.on_visible(id, &mut rt.ctx(0));
        run(&mut rt, &mut counters, 5000);
        let frames = rt.take_view().len();
        assert!(frames > 0);

        counters.on_visible(id, &mut rt.ctx(6000));
        run(&mut rt, &mut counters, 10_000);
        assert!(rt.take_view().is_empty());
        assert!(counters.is_processed(id));
        assert!(!rt.visibility.is_observed(Subscriber::Counters, id));
    }

    #[test]
    fn text_without_digits_is_left_untouched() {
        let mut rt = TestRuntime::new();
        let mut counters = Counters::init(&anchors(&["many"]), &mut rt.ctx(0)).unwrap();
        let id = ElementId::new(0);

        counters.on_visible(id, &mut rt.ctx(0));
        assert!(rt.timers.is_empty());
        assert!(counters.is_processed(id));
        assert!(rt.view.is_empty());
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut rt = TestRuntime::new();
        let mut counters = Counters::init(&anchors(&["5"]), &mut rt.ctx(0)).unwrap();
        counters.on_visible(ElementId::new(99), &mut rt.ctx(0));
        assert!(!counters.is_processed(ElementId::new(99)));
    }
}
