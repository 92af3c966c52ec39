// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`NotificationService`] inserts toasts, shows them after a short
//! delay, and hides then detaches them on close or timeout. Both paths go
//! through [`NotificationService::dismiss`].

use super::notification::{Phase, Toast, ToastId, ToastKind};
use crate::app::timers::{TimerEvent, Timers};
use crate::config::ToastsConfig;
use crate::ui::view::{ViewCommand, Visibility};
use std::time::{Duration, Instant};

/// Owns every attached toast and its timers.
#[derive(Debug)]
pub struct NotificationService {
    /// Attached toasts in insertion order.
    toasts: Vec<Toast>,
    next_id: u64,
    show_delay: Duration,
    auto_dismiss: Duration,
    hide_transition: Duration,
}

impl NotificationService {
    /// Creates the service and produces the toast container.
    pub fn new(config: &ToastsConfig, view: &mut Vec<ViewCommand>) -> Self {
        view.push(ViewCommand::InsertToastContainer);
        Self {
            toasts: Vec::new(),
            next_id: 0,
            show_delay: config.show_delay(),
            auto_dismiss: config.auto_dismiss(),
            hide_transition: config.hide_transition(),
        }
    }

    /// Inserts a toast and schedules its show and auto-dismiss timers.
    pub fn show(
        &mut self,
        kind: ToastKind,
        text: impl Into<String>,
        now: Instant,
        timers: &mut Timers,
        view: &mut Vec<ViewCommand>,
    ) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id += 1;

        let toast = Toast::new(id, kind, text.into());
        view.push(ViewCommand::InsertToast {
            id,
            kind,
            icon: kind.icon(),
            text: toast.text().to_owned(),
        });
        self.toasts.push(toast);

        timers.schedule_after(now, self.show_delay, TimerEvent::ToastShow(id));
        timers.schedule_after(now, self.auto_dismiss, TimerEvent::ToastExpire(id));
        tracing::debug!(%id, ?kind, "toast shown");
        id
    }

    /// Hides a toast and schedules its removal.
    ///
    /// Returns `false` when the toast is already leaving or gone.
    pub fn dismiss(
        &mut self,
        id: ToastId,
        now: Instant,
        timers: &mut Timers,
        view: &mut Vec<ViewCommand>,
    ) -> bool {
        let Some(toast) = self.find_mut(id) else {
            return false;
        };
        if toast.phase() == Phase::Leaving {
            return false;
        }

        toast.set_phase(Phase::Leaving);
        view.push(ViewCommand::Toast {
            id,
            visibility: Visibility::Hidden,
        });
        timers.schedule_after(now, self.hide_transition, TimerEvent::ToastDetach(id));
        true
    }

    /// Handles a toast timer. Other timer events are ignored.
    pub fn handle_timer(
        &mut self,
        event: TimerEvent,
        now: Instant,
        timers: &mut Timers,
        view: &mut Vec<ViewCommand>,
    ) {
        match event {
            TimerEvent::ToastShow(id) => {
                if let Some(toast) = self.find_mut(id) {
                    if toast.phase() == Phase::Entering {
                        toast.set_phase(Phase::Visible);
                        view.push(ViewCommand::Toast {
                            id,
                            visibility: Visibility::Shown,
                        });
                    }
                }
            }
            TimerEvent::ToastExpire(id) => {
                self.dismiss(id, now, timers, view);
            }
            TimerEvent::ToastDetach(id) => {
                if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
                    self.toasts.remove(pos);
                    view.push(ViewCommand::RemoveToast { id });
                }
            }
            _ => {}
        }
    }

    /// Returns an attached toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    /// Returns the attached toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn find_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        start: Instant,
        service: NotificationService,
        timers: Timers,
        view: Vec<ViewCommand>,
    }

    impl Harness {
        fn new() -> Self {
            let mut view = Vec::new();
            let service = NotificationService::new(&ToastsConfig::default(), &mut view);
            Self {
                start: Instant::now(),
                service,
                timers: Timers::new(),
                view,
            }
        }

        fn at(&self, ms: u64) -> Instant {
            self.start + Duration::from_millis(ms)
        }

        fn show(&mut self, ms: u64, kind: ToastKind) -> ToastId {
            let now = self.at(ms);
            self.service
                .show(kind, "hello", now, &mut self.timers, &mut self.view)
        }

        fn advance(&mut self, ms: u64) {
            let now = self.at(ms);
            while let Some((deadline, event)) = self.timers.pop_due(now) {
                self.service
                    .handle_timer(event, deadline, &mut self.timers, &mut self.view);
            }
        }
    }

    #[test]
    fn construction_produces_container() {
        let harness = Harness::new();
        assert_eq!(harness.view, vec![ViewCommand::InsertToastContainer]);
        assert!(harness.service.is_empty());
    }

    #[test]
    fn toast_becomes_visible_after_show_delay() {
        let mut harness = Harness::new();
        let id = harness.show(0, ToastKind::Success);

        harness.advance(9);
        assert_eq!(harness.service.get(id).map(Toast::phase), Some(Phase::Entering));

        harness.advance(10);
        assert_eq!(harness.service.get(id).map(Toast::phase), Some(Phase::Visible));
    }

    #[test]
    fn toast_is_removed_after_timeout_and_transition() {
        let mut harness = Harness::new();
        let id = harness.show(0, ToastKind::Info);

        harness.advance(4000);
        assert_eq!(harness.service.get(id).map(Toast::phase), Some(Phase::Leaving));

        harness.advance(4299);
        assert!(harness.service.get(id).is_some());

        harness.advance(4300);
        assert!(harness.service.get(id).is_none());
        assert_eq!(harness.view.last(), Some(&ViewCommand::RemoveToast { id }));
    }

    #[test]
    fn second_dismiss_is_a_no_op() {
        let mut harness = Harness::new();
        let id = harness.show(0, ToastKind::Info);
        let now = harness.at(100);

        assert!(harness
            .service
            .dismiss(id, now, &mut harness.timers, &mut harness.view));
        assert!(!harness
            .service
            .dismiss(id, now, &mut harness.timers, &mut harness.view));

        // the stale auto-dismiss timer must not resurrect or re-hide it
        harness.advance(5000);
        assert!(harness.service.is_empty());
        let removals = harness
            .view
            .iter()
            .filter(|c| matches!(c, ViewCommand::RemoveToast { .. }))
            .count();
        assert_eq!(removals, 1);
    }

    #[test]
    fn dismissed_before_shown_never_becomes_visible() {
        let mut harness = Harness::new();
        let id = harness.show(0, ToastKind::Warning);
        let now = harness.at(5);
        harness
            .service
            .dismiss(id, now, &mut harness.timers, &mut harness.view);

        harness.advance(20);
        assert!(!harness.view.contains(&ViewCommand::Toast {
            id,
            visibility: Visibility::Shown,
        }));
    }

    #[test]
    fn toast_carries_kind_icon() {
        let mut harness = Harness::new();
        let id = harness.show(0, ToastKind::Error);
        assert!(harness.view.contains(&ViewCommand::InsertToast {
            id,
            kind: ToastKind::Error,
            icon: "✕",
            text: "hello".into(),
        }));
    }
}
