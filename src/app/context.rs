// SPDX-License-Identifier: MPL-2.0
//! Shared runtime services handed to feature controllers.

use super::persisted_state::PreferenceStore;
use super::timers::{TimerEvent, Timers};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationService, ToastId, ToastKind};
use crate::ui::view::ViewCommand;
use crate::ui::visibility::VisibilityObserver;
use std::time::{Duration, Instant};

/// Everything a controller may read or drive while handling one event.
///
/// `now` is the time of the event being handled. For timer callbacks it is
/// the timer's own deadline, not the wall clock.
pub struct Context<'a> {
    pub now: Instant,
    pub config: &'a Config,
    pub i18n: &'a I18n,
    pub store: &'a mut dyn PreferenceStore,
    pub timers: &'a mut Timers,
    pub notifications: &'a mut NotificationService,
    pub visibility: &'a mut VisibilityObserver,
    pub view: &'a mut Vec<ViewCommand>,
}

impl Context<'_> {
    /// Emits a view command.
    pub fn emit(&mut self, command: ViewCommand) {
        self.view.push(command);
    }

    /// Schedules a timer relative to `now`.
    pub fn schedule_after(&mut self, delay: Duration, event: TimerEvent) {
        self.timers.schedule_after(self.now, delay, event);
    }

    /// Shows a toast with already localized text.
    pub fn toast(&mut self, kind: ToastKind, text: impl Into<String>) -> ToastId {
        self.notifications
            .show(kind, text, self.now, self.timers, self.view)
    }

    /// Shows a toast whose text is the translation of `key`.
    pub fn toast_key(&mut self, kind: ToastKind, key: &str) -> ToastId {
        let text = self.i18n.tr(key);
        self.toast(kind, text)
    }
}
